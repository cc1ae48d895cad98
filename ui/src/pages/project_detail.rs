use payloads::{ProjectId, TaskStatus, requests, responses};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    Modal, ProjectForm, ProjectStatusBadge, RequireAuth, TaskForm,
    TaskStatusBadge,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_employees, use_project, use_tasks, use_title};
use crate::utils::{format_date, format_money};
use crate::{Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub project_id: ProjectId,
}

#[function_component]
pub fn ProjectDetailPage(props: &Props) -> Html {
    html! {
        <RequireAuth>
            <ProjectDetailInner project_id={props.project_id} />
        </RequireAuth>
    }
}

#[function_component]
fn ProjectDetailInner(props: &Props) -> Html {
    let project_id = props.project_id;
    let (state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let project_hook = use_project(project_id);
    let tasks_hook = use_tasks(requests::TaskFilter {
        project_id: Some(project_id),
        ..Default::default()
    });
    // Roster for assignee names in the task list.
    let _employees_hook = use_employees();

    use_title(
        project_hook
            .state
            .data()
            .map(|p| p.project_details.name.as_str())
            .unwrap_or("Project"),
    );

    let show_edit = use_state(|| false);
    let show_new_task = use_state(|| false);
    let show_delete = use_state(|| false);
    let is_deleting = use_state(|| false);

    let close_edit = {
        let show_edit = show_edit.clone();
        Callback::from(move |_| show_edit.set(false))
    };
    let close_new_task = {
        let show_new_task = show_new_task.clone();
        Callback::from(move |_| show_new_task.set(false))
    };
    let close_delete = {
        let show_delete = show_delete.clone();
        Callback::from(move |_| show_delete.set(false))
    };

    let on_delete = {
        let is_deleting = is_deleting.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            is_deleting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.delete_project(&project_id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|s| s.remove_project(project_id));
                        toast.success("Project deleted");
                        navigator.push(&Route::Projects);
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                        is_deleting.set(false);
                    }
                }
            });
        })
    };

    // Move a task to the next status in its workflow.
    let on_advance_task = {
        let refetch = tasks_hook.send.clone();
        let toast = toast.clone();
        Callback::from(move |task: responses::Task| {
            let Some(next) = next_status(task.task_details.status) else {
                return;
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

    let on_clear_completed = {
        let refetch = tasks_hook.send.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let refetch = refetch.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let filter = requests::TaskFilter {
                    project_id: Some(project_id),
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                };
                match api_client.delete_tasks(&filter).await {
                    Ok(()) => {
                        toast.success("Completed tasks cleared");
                        refetch.emit(());
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    html! {
        <div class="space-y-8">
            {project_hook.render("project", |project| {
                let details = &project.project_details;
                let client_name = state
                    .get_company(details.company_id)
                    .map(|c| c.company_details.name.clone());
                html! {
                    <div class="space-y-6">
                        <div class="flex justify-between items-start">
                            <div>
                                <div class="flex items-center space-x-3">
                                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                        {&details.name}
                                    </h1>
                                    <ProjectStatusBadge status={details.status} />
                                </div>
                                if let Some(client_name) = client_name {
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                                        {"for "}
                                        <Link<Route>
                                            to={Route::CompanyDetail { id: details.company_id }}
                                            classes="hover:underline"
                                        >
                                            {client_name}
                                        </Link<Route>>
                                    </p>
                                }
                            </div>
                            <div class="flex space-x-3">
                                <button
                                    onclick={
                                        let show_edit = show_edit.clone();
                                        Callback::from(move |_| show_edit.set(true))
                                    }
                                    class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                                >
                                    {"Edit"}
                                </button>
                                <button
                                    onclick={
                                        let show_delete = show_delete.clone();
                                        Callback::from(move |_| show_delete.set(true))
                                    }
                                    class="px-4 py-2 rounded-md text-sm font-medium border border-red-300 dark:border-red-800 text-red-700 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors"
                                >
                                    {"Delete"}
                                </button>
                            </div>
                        </div>

                        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-2 text-sm">
                            if let Some(description) = &details.description {
                                <p class="text-neutral-600 dark:text-neutral-400">{description}</p>
                            }
                            <p>
                                <span class="font-medium">{"Rate: "}</span>
                                {format!("{}/hr", format_money(details.hourly_rate))}
                            </p>
                            if let Some(budget) = details.budget {
                                <p><span class="font-medium">{"Budget: "}</span>{format_money(budget)}</p>
                            }
                            if let Some(start) = details.start_date {
                                <p><span class="font-medium">{"Started: "}</span>{format_date(start)}</p>
                            }
                        </div>
                    </div>
                }
            })}

            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Tasks"}
                </h2>
                <div class="flex space-x-3">
                    <button
                        onclick={on_clear_completed}
                        class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                    >
                        {"Clear completed"}
                    </button>
                    <button
                        onclick={
                            let show_new_task = show_new_task.clone();
                            Callback::from(move |_| show_new_task.set(true))
                        }
                        class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        {"New task"}
                    </button>
                </div>
            </div>

            {tasks_hook.render("tasks", |tasks| {
                if tasks.is_empty() {
                    return html! {
                        <p class="text-neutral-600 dark:text-neutral-400 py-4">
                            {"No tasks on this project yet."}
                        </p>
                    };
                }
                html! {
                    <div class="space-y-3">
                        {tasks.iter().map(|task| {
                            let details = &task.task_details;
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
                                            {assignee}
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

            if *show_edit {
                if let Some(project) = project_hook.state.data() {
                    <Modal on_close={close_edit.clone()} max_width="max-w-lg">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                            {"Edit project"}
                        </h3>
                        <ProjectForm
                            existing={project.clone()}
                            on_success={close_edit.reform(|_| ())}
                            on_cancel={close_edit.clone()}
                        />
                    </Modal>
                }
            }

            if *show_new_task {
                <Modal on_close={close_new_task.clone()} max_width="max-w-lg">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"New task"}
                    </h3>
                    <TaskForm
                        fixed_project={project_id}
                        on_success={{
                            let close = close_new_task.clone();
                            let refetch = tasks_hook.send.clone();
                            Callback::from(move |_| {
                                refetch.emit(());
                                close.emit(());
                            })
                        }}
                        on_cancel={close_new_task.clone()}
                    />
                </Modal>
            }

            if *show_delete {
                <Modal on_close={close_delete.clone()}>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Delete project?"}
                    </h3>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                        {"This removes the project and its tasks. This cannot be undone."}
                    </p>
                    <div class="flex justify-end space-x-3">
                        <button
                            onclick={close_delete.reform(|_| ())}
                            class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            onclick={on_delete}
                            disabled={*is_deleting}
                            class="px-4 py-2 rounded-md text-sm font-medium bg-red-600 hover:bg-red-700 text-white disabled:opacity-50 transition-colors"
                        >
                            {if *is_deleting { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </Modal>
            }
        </div>
    }
}

fn next_status(status: TaskStatus) -> Option<TaskStatus> {
    match status {
        TaskStatus::NotStarted => Some(TaskStatus::InProgress),
        TaskStatus::InProgress => Some(TaskStatus::Completed),
        TaskStatus::Completed => None,
    }
}
