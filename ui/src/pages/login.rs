use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::use_title;
use crate::{AuthState, Route, State, get_api_client, session};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Log in");
    let (_state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let email_input = use_state(String::new);
    let password_input = use_state(String::new);
    let email_error = use_state(|| None::<&'static str>);
    let is_submitting = use_state(|| false);

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

    let on_password_change = {
        let password_input = password_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password_input.set(input.value());
        })
    };

    let can_submit = requests::validate_email(&email_input).is_valid()
        && !password_input.is_empty()
        && !*is_submitting;

    let on_submit = {
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = requests::LoginCredentials {
                email: email_input.trim().to_string(),
                password: (*password_input).clone(),
            };

            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.login(&credentials).await {
                    Ok(profile) => {
                        session::persist(api_client.session());
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(profile);
                        });
                        navigator.push(&Route::Home);
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
        <div class="max-w-sm mx-auto py-12">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Log in"}
            </h1>
            <form onsubmit={on_submit} class="space-y-4">
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
                <div>
                    <label class={label_class}>{"Password"}</label>
                    <input
                        type="password"
                        class={input_class}
                        value={(*password_input).clone()}
                        onchange={on_password_change}
                    />
                </div>
                <button
                    type="submit"
                    disabled={!can_submit}
                    class="w-full px-4 py-2 rounded-md text-sm font-medium bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {if *is_submitting { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
