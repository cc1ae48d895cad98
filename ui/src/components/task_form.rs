use jiff::tz::TimeZone;
use payloads::{EmployeeId, ProjectId, TaskStatus, requests, responses};
use std::str::FromStr;
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_employees, use_projects};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// When set, the form edits this task instead of creating one.
    #[prop_or_default]
    pub existing: Option<responses::Task>,
    /// Pins the project, e.g. when opened from a project page.
    #[prop_or_default]
    pub fixed_project: Option<ProjectId>,
    pub on_success: Callback<responses::Task>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn TaskForm(props: &Props) -> Html {
    let toast = use_toast();
    let projects = use_projects();
    let employees = use_employees();

    let details = props.existing.as_ref().map(|t| &t.task_details);

    let selected_project = use_state(|| {
        details.map(|d| d.project_id).or(props.fixed_project)
    });
    let selected_assignee = use_state(|| details.and_then(|d| d.assignee_id));
    let title_input =
        use_state(|| details.map(|d| d.title.clone()).unwrap_or_default());
    let details_input = use_state(|| {
        details.and_then(|d| d.details.clone()).unwrap_or_default()
    });
    let status = use_state(|| {
        details.map(|d| d.status).unwrap_or(TaskStatus::NotStarted)
    });
    let due_input = use_state(|| {
        details
            .and_then(|d| d.due_at)
            .map(|t| {
                t.to_zoned(TimeZone::UTC).date().to_string()
            })
            .unwrap_or_default()
    });

    let title_error = use_state(|| None::<&'static str>);
    let is_submitting = use_state(|| false);

    let on_project_change = {
        let selected_project = selected_project.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected_project.set(ProjectId::from_str(&select.value()).ok());
        })
    };

    let on_assignee_change = {
        let selected_assignee = selected_assignee.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected_assignee.set(EmployeeId::from_str(&select.value()).ok());
        })
    };

    let on_title_change = {
        let title_input = title_input.clone();
        let title_error = title_error.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            title_error.set(requests::validate_name(&value).error_message());
            title_input.set(value);
        })
    };

    let on_details_change = {
        let details_input = details_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement =
                e.target_unchecked_into();
            details_input.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(picked) =
                TaskStatus::ALL.iter().find(|s| s.label() == select.value())
            {
                status.set(*picked);
            }
        })
    };

    let on_due_change = {
        let due_input = due_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            due_input.set(input.value());
        })
    };

    let can_submit = selected_project.is_some()
        && requests::validate_name(&title_input).is_valid()
        && !*is_submitting;

    let on_submit = {
        let selected_project = selected_project.clone();
        let selected_assignee = selected_assignee.clone();
        let title_input = title_input.clone();
        let details_input = details_input.clone();
        let status = status.clone();
        let due_input = due_input.clone();
        let is_submitting = is_submitting.clone();
        let existing_id = props.existing.as_ref().map(|t| t.task_id);
        let on_success = props.on_success.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(project_id) = *selected_project else {
                return;
            };
            // Due dates are interpreted as end-of-day UTC.
            let due_at = jiff::civil::Date::from_str(&due_input)
                .ok()
                .and_then(|date| {
                    date.at(23, 59, 59, 0).to_zoned(TimeZone::UTC).ok()
                })
                .map(|zoned| zoned.timestamp());
            let task_details = {
                let trimmed = details_input.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            let details = payloads::Task {
                project_id,
                assignee_id: *selected_assignee,
                title: title_input.trim().to_string(),
                details: task_details,
                status: *status,
                due_at,
            };

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match existing_id {
                    Some(id) => api_client.update_task(&id, &details).await,
                    None => api_client.create_task(&details).await,
                };
                match result {
                    Ok(task) => {
                        toast.success(match existing_id {
                            Some(_) => "Task updated",
                            None => "Task created",
                        });
                        on_success.emit(task);
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 rounded-md border border-neutral-300 \
                       dark:border-neutral-600 bg-white dark:bg-neutral-700 \
                       text-sm focus:outline-none focus:ring-2 \
                       focus:ring-neutral-500";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            if props.fixed_project.is_none() {
                <div>
                    <label class={label_class}>{"Project"}</label>
                    <select class={input_class} onchange={on_project_change}>
                        <option value="" selected={selected_project.is_none()}>
                            {"Select a project"}
                        </option>
                        {projects.state.data().map(|projects| projects.iter().map(|project| {
                            let id = project.project_id;
                            html! {
                                <option
                                    value={id.to_string()}
                                    selected={*selected_project == Some(id)}
                                >
                                    {&project.project_details.name}
                                </option>
                            }
                        }).collect::<Html>()).unwrap_or_default()}
                    </select>
                </div>
            }
            <div>
                <label class={label_class}>{"Title"}</label>
                <input
                    type="text"
                    class={input_class}
                    value={(*title_input).clone()}
                    onchange={on_title_change}
                />
                if let Some(error) = *title_error {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                }
            </div>
            <div>
                <label class={label_class}>{"Details"}</label>
                <textarea
                    class={input_class}
                    rows="3"
                    value={(*details_input).clone()}
                    onchange={on_details_change}
                />
            </div>
            <div class="grid grid-cols-3 gap-4">
                <div>
                    <label class={label_class}>{"Status"}</label>
                    <select class={input_class} onchange={on_status_change}>
                        {TaskStatus::ALL.iter().map(|s| html! {
                            <option selected={*status == *s}>{s.label()}</option>
                        }).collect::<Html>()}
                    </select>
                </div>
                <div>
                    <label class={label_class}>{"Assignee"}</label>
                    <select class={input_class} onchange={on_assignee_change}>
                        <option value="" selected={selected_assignee.is_none()}>
                            {"Unassigned"}
                        </option>
                        {employees.state.data().map(|employees| employees.iter().map(|employee| {
                            let id = employee.employee_id;
                            html! {
                                <option
                                    value={id.to_string()}
                                    selected={*selected_assignee == Some(id)}
                                >
                                    {&employee.employee_details.name}
                                </option>
                            }
                        }).collect::<Html>()).unwrap_or_default()}
                    </select>
                </div>
                <div>
                    <label class={label_class}>{"Due date"}</label>
                    <input
                        type="date"
                        class={input_class}
                        value={(*due_input).clone()}
                        onchange={on_due_change}
                    />
                </div>
            </div>
            <div class="flex justify-end space-x-3 pt-2">
                if let Some(on_cancel) = &props.on_cancel {
                    <button
                        type="button"
                        onclick={on_cancel.reform(|_| ())}
                        class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                }
                <button
                    type="submit"
                    disabled={!can_submit}
                    class="px-4 py-2 rounded-md text-sm font-medium bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {if *is_submitting { "Saving..." } else { "Save task" }}
                </button>
            </div>
        </form>
    }
}
