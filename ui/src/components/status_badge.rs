use payloads::{ExpenseStatus, ProjectStatus, TaskStatus};
use yew::prelude::*;

fn badge(classes: &'static str, label: &'static str) -> Html {
    html! {
        <span class={format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium {}",
            classes
        )}>
            {label}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskStatusBadgeProps {
    pub status: TaskStatus,
}

#[function_component]
pub fn TaskStatusBadge(props: &TaskStatusBadgeProps) -> Html {
    let classes = match props.status {
        TaskStatus::NotStarted => {
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-200"
        }
        TaskStatus::InProgress => {
            "bg-blue-100 text-blue-700 dark:bg-blue-900 dark:text-blue-300"
        }
        TaskStatus::Completed => {
            "bg-green-100 text-green-700 dark:bg-green-900 dark:text-green-300"
        }
    };
    badge(classes, props.status.label())
}

#[derive(Properties, PartialEq)]
pub struct ProjectStatusBadgeProps {
    pub status: ProjectStatus,
}

#[function_component]
pub fn ProjectStatusBadge(props: &ProjectStatusBadgeProps) -> Html {
    let classes = match props.status {
        ProjectStatus::Proposed => {
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-200"
        }
        ProjectStatus::Active => {
            "bg-green-100 text-green-700 dark:bg-green-900 dark:text-green-300"
        }
        ProjectStatus::OnHold => {
            "bg-amber-100 text-amber-700 dark:bg-amber-900 dark:text-amber-300"
        }
        ProjectStatus::Completed => {
            "bg-blue-100 text-blue-700 dark:bg-blue-900 dark:text-blue-300"
        }
    };
    badge(classes, props.status.label())
}

#[derive(Properties, PartialEq)]
pub struct ExpenseStatusBadgeProps {
    pub status: ExpenseStatus,
}

#[function_component]
pub fn ExpenseStatusBadge(props: &ExpenseStatusBadgeProps) -> Html {
    let classes = match props.status {
        ExpenseStatus::Draft => {
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-200"
        }
        ExpenseStatus::Submitted => {
            "bg-blue-100 text-blue-700 dark:bg-blue-900 dark:text-blue-300"
        }
        ExpenseStatus::Approved => {
            "bg-green-100 text-green-700 dark:bg-green-900 dark:text-green-300"
        }
        ExpenseStatus::Rejected => {
            "bg-red-100 text-red-700 dark:bg-red-900 dark:text-red-300"
        }
    };
    badge(classes, props.status.label())
}
