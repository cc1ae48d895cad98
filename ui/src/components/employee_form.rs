use payloads::{requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// When set, the form edits this employee instead of creating one.
    #[prop_or_default]
    pub existing: Option<responses::Employee>,
    pub on_success: Callback<responses::Employee>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn EmployeeForm(props: &Props) -> Html {
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let details = props.existing.as_ref().map(|e| &e.employee_details);

    let name_input =
        use_state(|| details.map(|d| d.name.clone()).unwrap_or_default());
    let email_input =
        use_state(|| details.map(|d| d.email.clone()).unwrap_or_default());
    let title_input =
        use_state(|| details.map(|d| d.title.clone()).unwrap_or_default());
    let cost_input = use_state(|| {
        details.map(|d| d.hourly_cost.to_string()).unwrap_or_default()
    });
    let is_active = use_state(|| details.map(|d| d.is_active).unwrap_or(true));

    let name_error = use_state(|| None::<&'static str>);
    let email_error = use_state(|| None::<&'static str>);
    let cost_error = use_state(|| None::<&'static str>);
    let is_submitting = use_state(|| false);

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

    let on_email_change = {
        let email_input = email_input.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            email_error.set(requests::validate_email(&value).error_message());
            email_input.set(value);
        })
    };

    let on_title_change = {
        let title_input = title_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            title_input.set(input.value());
        })
    };

    let on_cost_change = {
        let cost_input = cost_input.clone();
        let cost_error = cost_error.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            cost_error.set(requests::validate_amount(&value).error_message());
            cost_input.set(value);
        })
    };

    let on_active_change = {
        let is_active = is_active.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            is_active.set(input.checked());
        })
    };

    let can_submit = requests::validate_name(&name_input).is_valid()
        && requests::validate_email(&email_input).is_valid()
        && requests::validate_amount(&cost_input).is_valid()
        && !*is_submitting;

    let on_submit = {
        let name_input = name_input.clone();
        let email_input = email_input.clone();
        let title_input = title_input.clone();
        let cost_input = cost_input.clone();
        let is_active = is_active.clone();
        let is_submitting = is_submitting.clone();
        let existing_id = props.existing.as_ref().map(|e| e.employee_id);
        let on_success = props.on_success.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let requests::AmountValidation::Valid(hourly_cost) =
                requests::validate_amount(&cost_input)
            else {
                return;
            };
            let details = payloads::Employee {
                name: name_input.trim().to_string(),
                email: email_input.trim().to_string(),
                title: title_input.trim().to_string(),
                hourly_cost,
                is_active: *is_active,
            };

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match existing_id {
                    Some(id) => {
                        api_client.update_employee(&id, &details).await
                    }
                    None => api_client.create_employee(&details).await,
                };
                match result {
                    Ok(employee) => {
                        dispatch.reduce_mut(|s| {
                            s.upsert_employee(employee.clone());
                        });
                        toast.success(match existing_id {
                            Some(_) => "Employee updated",
                            None => "Employee added",
                        });
                        on_success.emit(employee);
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
                <label class={label_class}>{"Email"}</label>
                <input
                    type="email"
                    class={input_class}
                    value={(*email_input).clone()}
                    onchange={on_email_change}
                />
                if let Some(error) = *email_error {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                }
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={label_class}>{"Job title"}</label>
                    <input
                        type="text"
                        class={input_class}
                        value={(*title_input).clone()}
                        onchange={on_title_change}
                    />
                </div>
                <div>
                    <label class={label_class}>{"Hourly cost"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        class={input_class}
                        value={(*cost_input).clone()}
                        onchange={on_cost_change}
                    />
                    if let Some(error) = *cost_error {
                        <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                </div>
            </div>
            <div>
                <label class="inline-flex items-center space-x-2 text-sm text-neutral-700 dark:text-neutral-300">
                    <input
                        type="checkbox"
                        checked={*is_active}
                        onchange={on_active_change}
                    />
                    <span>{"Active"}</span>
                </label>
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
                    {if *is_submitting { "Saving..." } else { "Save employee" }}
                </button>
            </div>
        </form>
    }
}
