use payloads::{EmployeeId, ProjectId, TaskStatus, requests, responses};
use std::str::FromStr;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Modal, RequireAuth, TaskForm, TaskStatusBadge};
use crate::contexts::toast::use_toast;
use crate::hooks::{
    use_employees, use_projects, use_tasks, use_title,
};
use crate::utils::format_timestamp;
use crate::{Route, State, get_api_client};

#[function_component]
pub fn TasksPage() -> Html {
    use_title("Tasks");
    html! {
        <RequireAuth>
            <TasksPageInner />
        </RequireAuth>
    }
}

#[function_component]
fn TasksPageInner() -> Html {
    let (state, _dispatch) = use_store::<State>();
    let toast = use_toast();
    let projects_hook = use_projects();
    let _employees_hook = use_employees();

    // Filter state; the task list refetches whenever it changes.
    let filter = use_state(requests::TaskFilter::default);
    let tasks_hook = use_tasks((*filter).clone());

    let show_create = use_state(|| false);
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let on_project_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(requests::TaskFilter {
                project_id: ProjectId::from_str(&select.value()).ok(),
                ..(*filter).clone()
            });
        })
    };

    let on_status_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let status = TaskStatus::ALL
                .iter()
                .find(|s| s.label() == select.value())
                .copied();
            filter.set(requests::TaskFilter {
                status,
                ..(*filter).clone()
            });
        })
    };

    let on_assignee_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(requests::TaskFilter {
                assignee_id: EmployeeId::from_str(&select.value()).ok(),
                ..(*filter).clone()
            });
        })
    };

    let on_advance_task = {
        let refetch = tasks_hook.send.clone();
        let toast = toast.clone();
        Callback::from(move |task: responses::Task| {
            let next = match task.task_details.status {
                TaskStatus::NotStarted => TaskStatus::InProgress,
                TaskStatus::InProgress => TaskStatus::Completed,
                TaskStatus::Completed => return,
            };
            let refetch = refetch.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let details = payloads::Task {
                    status: next,
                    ..task.task_details
                };
                match api_client.update_task(&task.task_id, &details).await {
                    Ok(_) => refetch.emit(()),
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    let select_class = "px-3 py-2 rounded-md border border-neutral-300 \
                        dark:border-neutral-600 bg-white dark:bg-neutral-700 \
                        text-sm focus:outline-none focus:ring-2 \
                        focus:ring-neutral-500";

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Tasks"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Work items across all projects"}
                    </p>
                </div>
                <button
                    onclick={
                        let show_create = show_create.clone();
                        Callback::from(move |_| show_create.set(true))
                    }
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New task"}
                </button>
            </div>

            <div class="flex flex-wrap gap-3">
                <select class={select_class} onchange={on_project_filter}>
                    <option value="" selected={filter.project_id.is_none()}>
                        {"All projects"}
                    </option>
                    {projects_hook.state.data().map(|projects| projects.iter().map(|project| {
                        let id = project.project_id;
                        html! {
                            <option
                                value={id.to_string()}
                                selected={filter.project_id == Some(id)}
                            >
                                {&project.project_details.name}
                            </option>
                        }
                    }).collect::<Html>()).unwrap_or_default()}
                </select>
                <select class={select_class} onchange={on_status_filter}>
                    <option value="" selected={filter.status.is_none()}>
                        {"All statuses"}
                    </option>
                    {TaskStatus::ALL.iter().map(|s| html! {
                        <option selected={filter.status == Some(*s)}>{s.label()}</option>
                    }).collect::<Html>()}
                </select>
                <select class={select_class} onchange={on_assignee_filter}>
                    <option value="" selected={filter.assignee_id.is_none()}>
                        {"Anyone"}
                    </option>
                    {state.employees().map(|employees| employees.iter().map(|employee| {
                        let id = employee.employee_id;
                        html! {
                            <option
                                value={id.to_string()}
                                selected={filter.assignee_id == Some(id)}
                            >
                                {&employee.employee_details.name}
                            </option>
                        }
                    }).collect::<Html>()).unwrap_or_default()}
                </select>
            </div>

            {tasks_hook.render("tasks", |tasks| {
                if tasks.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No tasks match this filter."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="space-y-3">
                        {tasks.iter().map(|task| {
                            let details = &task.task_details;
                            let project_name = state
                                .get_project(details.project_id)
                                .map(|p| p.project_details.name.clone());
                            let assignee = details
                                .assignee_id
                                .and_then(|id| state.employee_name(id))
                                .unwrap_or("Unassigned");
                            let advance_label = match details.status {
                                TaskStatus::NotStarted => Some("Start"),
                                TaskStatus::InProgress => Some("Complete"),
                                TaskStatus::Completed => None,
                            };
                            html! {
                                <div key={task.task_id.to_string()} class="flex items-center justify-between bg-white dark:bg-neutral-800 px-6 py-4 rounded-lg shadow-sm border border-neutral-200 dark:border-neutral-700">
                                    <div>
                                        <p class="font-medium text-neutral-900 dark:text-neutral-100">
                                            {&details.title}
                                        </p>
                                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                            {match &project_name {
                                                Some(name) => html! {
                                                    <Link<Route>
                                                        to={Route::ProjectDetail { id: details.project_id }}
                                                        classes="hover:underline"
                                                    >
                                                        {name.clone()}
                                                    </Link<Route>>
                                                },
                                                None => html! { {"—"} },
                                            }}
                                            {" · "}{assignee}
                                            {details.due_at.map(|due| format!(" · due {}", format_timestamp(due))).unwrap_or_default()}
                                        </p>
                                    </div>
                                    <div class="flex items-center space-x-4">
                                        <TaskStatusBadge status={details.status} />
                                        if let Some(label) = advance_label {
                                            <button
                                                onclick={{
                                                    let on_advance_task = on_advance_task.clone();
                                                    let task = task.clone();
                                                    Callback::from(move |_: MouseEvent| {
                                                        on_advance_task.emit(task.clone())
                                                    })
                                                }}
                                                class="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100 transition-colors"
                                            >
                                                {label}
                                            </button>
                                        }
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()}
                    </div>
                }
            })}

            if *show_create {
                <Modal on_close={close_create.clone()} max_width="max-w-lg">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"New task"}
                    </h3>
                    <TaskForm
                        on_success={{
                            let close = close_create.clone();
                            let refetch = tasks_hook.send.clone();
                            Callback::from(move |_| {
                                refetch.emit(());
                                close.emit(());
                            })
                        }}
                        on_cancel={close_create.clone()}
                    />
                </Modal>
            }
        </div>
    }
}
