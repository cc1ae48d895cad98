use payloads::{CompanyId, ProjectStatus, requests, responses};
use std::str::FromStr;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::use_companies;
use crate::{State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// When set, the form edits this project instead of creating one.
    #[prop_or_default]
    pub existing: Option<responses::Project>,
    /// Pins the client company, e.g. when opened from a company page.
    #[prop_or_default]
    pub fixed_company: Option<CompanyId>,
    pub on_success: Callback<responses::Project>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn ProjectForm(props: &Props) -> Html {
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let companies = use_companies();

    let details = props.existing.as_ref().map(|p| &p.project_details);

    // Form state
    let selected_company = use_state(|| {
        details.map(|d| d.company_id).or(props.fixed_company)
    });
    let name_input =
        use_state(|| details.map(|d| d.name.clone()).unwrap_or_default());
    let description_input = use_state(|| {
        details.and_then(|d| d.description.clone()).unwrap_or_default()
    });
    let status = use_state(|| {
        details.map(|d| d.status).unwrap_or(ProjectStatus::Proposed)
    });
    let rate_input = use_state(|| {
        details.map(|d| d.hourly_rate.to_string()).unwrap_or_default()
    });
    let budget_input = use_state(|| {
        details
            .and_then(|d| d.budget)
            .map(|b| b.to_string())
            .unwrap_or_default()
    });
    let start_input = use_state(|| {
        details
            .and_then(|d| d.start_date)
            .map(|d| d.to_string())
            .unwrap_or_default()
    });

    let name_error = use_state(|| None::<&'static str>);
    let rate_error = use_state(|| None::<&'static str>);
    let is_submitting = use_state(|| false);

    let on_company_change = {
        let selected_company = selected_company.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected_company.set(CompanyId::from_str(&select.value()).ok());
        })
    };

    let on_name_change = {
        let name_input = name_input.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            name_error.set(requests::validate_name(&value).error_message());
            name_input.set(value);
        })
    };

    let on_description_change = {
        let description_input = description_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement =
                e.target_unchecked_into();
            description_input.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(picked) = ProjectStatus::ALL
                .iter()
                .find(|s| s.label() == select.value())
            {
                status.set(*picked);
            }
        })
    };

    let on_rate_change = {
        let rate_input = rate_input.clone();
        let rate_error = rate_error.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            rate_error.set(requests::validate_amount(&value).error_message());
            rate_input.set(value);
        })
    };

    let on_budget_change = {
        let budget_input = budget_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            budget_input.set(input.value());
        })
    };

    let on_start_change = {
        let start_input = start_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            start_input.set(input.value());
        })
    };

    let can_submit = selected_company.is_some()
        && requests::validate_name(&name_input).is_valid()
        && requests::validate_amount(&rate_input).is_valid()
        && !*is_submitting;

    let on_submit = {
        let selected_company = selected_company.clone();
        let name_input = name_input.clone();
        let description_input = description_input.clone();
        let status = status.clone();
        let rate_input = rate_input.clone();
        let budget_input = budget_input.clone();
        let start_input = start_input.clone();
        let is_submitting = is_submitting.clone();
        let existing_id = props.existing.as_ref().map(|p| p.project_id);
        let on_success = props.on_success.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(company_id) = *selected_company else {
                return;
            };
            let requests::AmountValidation::Valid(hourly_rate) =
                requests::validate_amount(&rate_input)
            else {
                return;
            };
            let budget = match requests::validate_amount(&budget_input) {
                requests::AmountValidation::Valid(amount) => Some(amount),
                _ => None,
            };
            let description = {
                let trimmed = description_input.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            let details = payloads::Project {
                company_id,
                name: name_input.trim().to_string(),
                description,
                status: *status,
                hourly_rate,
                budget,
                start_date: jiff::civil::Date::from_str(&start_input).ok(),
            };

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match existing_id {
                    Some(id) => api_client.update_project(&id, &details).await,
                    None => api_client.create_project(&details).await,
                };
                match result {
                    Ok(project) => {
                        dispatch.reduce_mut(|s| {
                            s.upsert_project(project.clone());
                        });
                        toast.success(match existing_id {
                            Some(_) => "Project updated",
                            None => "Project created",
                        });
                        on_success.emit(project);
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
            if props.fixed_company.is_none() {
                <div>
                    <label class={label_class}>{"Client"}</label>
                    <select class={input_class} onchange={on_company_change}>
                        <option value="" selected={selected_company.is_none()}>
                            {"Select a client"}
                        </option>
                        {companies.state.data().map(|companies| companies.iter().map(|company| {
                            let id = company.company_id;
                            html! {
                                <option
                                    value={id.to_string()}
                                    selected={*selected_company == Some(id)}
                                >
                                    {&company.company_details.name}
                                </option>
                            }
                        }).collect::<Html>()).unwrap_or_default()}
                    </select>
                </div>
            }
            <div>
                <label class={label_class}>{"Name"}</label>
                <input
                    type="text"
                    class={input_class}
                    value={(*name_input).clone()}
                    onchange={on_name_change}
                />
                if let Some(error) = *name_error {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                }
            </div>
            <div>
                <label class={label_class}>{"Description"}</label>
                <textarea
                    class={input_class}
                    rows="3"
                    value={(*description_input).clone()}
                    onchange={on_description_change}
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={label_class}>{"Status"}</label>
                    <select class={input_class} onchange={on_status_change}>
                        {ProjectStatus::ALL.iter().map(|s| html! {
                            <option selected={*status == *s}>{s.label()}</option>
                        }).collect::<Html>()}
                    </select>
                </div>
                <div>
                    <label class={label_class}>{"Start date"}</label>
                    <input
                        type="date"
                        class={input_class}
                        value={(*start_input).clone()}
                        onchange={on_start_change}
                    />
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={label_class}>{"Hourly rate"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        class={input_class}
                        value={(*rate_input).clone()}
                        onchange={on_rate_change}
                    />
                    if let Some(error) = *rate_error {
                        <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                </div>
                <div>
                    <label class={label_class}>{"Budget (optional)"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        class={input_class}
                        value={(*budget_input).clone()}
                        onchange={on_budget_change}
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
                    {if *is_submitting { "Saving..." } else { "Save project" }}
                </button>
            </div>
        </form>
    }
}
