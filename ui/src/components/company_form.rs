use payloads::{requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// When set, the form edits this company instead of creating one.
    #[prop_or_default]
    pub existing: Option<responses::Company>,
    pub on_success: Callback<responses::Company>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn CompanyForm(props: &Props) -> Html {
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let details = props.existing.as_ref().map(|c| &c.company_details);

    // Form state
    let name_input =
        use_state(|| details.map(|d| d.name.clone()).unwrap_or_default());
    let email_input = use_state(|| {
        details.map(|d| d.contact_email.clone()).unwrap_or_default()
    });
    let phone_input = use_state(|| {
        details.and_then(|d| d.phone.clone()).unwrap_or_default()
    });
    let address_input = use_state(|| {
        details.and_then(|d| d.address.clone()).unwrap_or_default()
    });
    let notes_input = use_state(|| {
        details.and_then(|d| d.notes.clone()).unwrap_or_default()
    });

    // Validation + submission state
    let name_error = use_state(|| None::<&'static str>);
    let email_error = use_state(|| None::<&'static str>);
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

    let on_phone_change = {
        let phone_input = phone_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            phone_input.set(input.value());
        })
    };

    let on_address_change = {
        let address_input = address_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            address_input.set(input.value());
        })
    };

    let on_notes_change = {
        let notes_input = notes_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement =
                e.target_unchecked_into();
            notes_input.set(input.value());
        })
    };

    let can_submit = requests::validate_name(&name_input).is_valid()
        && requests::validate_email(&email_input).is_valid()
        && !*is_submitting;

    let on_submit = {
        let name_input = name_input.clone();
        let email_input = email_input.clone();
        let phone_input = phone_input.clone();
        let address_input = address_input.clone();
        let notes_input = notes_input.clone();
        let is_submitting = is_submitting.clone();
        let existing_id = props.existing.as_ref().map(|c| c.company_id);
        let on_success = props.on_success.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let none_if_empty = |s: &str| {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            let details = payloads::Company {
                name: name_input.trim().to_string(),
                contact_email: email_input.trim().to_string(),
                phone: none_if_empty(&phone_input),
                address: none_if_empty(&address_input),
                notes: none_if_empty(&notes_input),
            };

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match existing_id {
                    Some(id) => api_client.update_company(&id, &details).await,
                    None => api_client.create_company(&details).await,
                };
                match result {
                    Ok(company) => {
                        dispatch.reduce_mut(|s| {
                            s.upsert_company(company.clone());
                        });
                        toast.success(match existing_id {
                            Some(_) => "Client updated",
                            None => "Client created",
                        });
                        on_success.emit(company);
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
                <label class={label_class}>{"Contact email"}</label>
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
            <div>
                <label class={label_class}>{"Phone"}</label>
                <input
                    type="tel"
                    class={input_class}
                    value={(*phone_input).clone()}
                    onchange={on_phone_change}
                />
            </div>
            <div>
                <label class={label_class}>{"Address"}</label>
                <input
                    type="text"
                    class={input_class}
                    value={(*address_input).clone()}
                    onchange={on_address_change}
                />
            </div>
            <div>
                <label class={label_class}>{"Notes"}</label>
                <textarea
                    class={input_class}
                    rows="3"
                    value={(*notes_input).clone()}
                    onchange={on_notes_change}
                />
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
                    {if *is_submitting { "Saving..." } else { "Save client" }}
                </button>
            </div>
        </form>
    }
}
