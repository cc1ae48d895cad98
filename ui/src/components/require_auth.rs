use payloads::responses::UserProfile;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_require_auth;
use crate::{AuthState, Route, State};

/// Component that only renders its children when the user is
/// authenticated.
///
/// This ensures child components and their data hooks only run once the
/// startup session probe has confirmed a login, avoiding conditional hook
/// violations and fetches that would just 401.
///
/// Supports two modes:
/// 1. Simple children mode: wraps content that doesn't need the profile
/// 2. Render prop mode: provides the `UserProfile` to children that do
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub render: Option<Callback<UserProfile, Html>>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (state, _dispatch) = use_store::<State>();
    let profile = use_require_auth();

    if let Some(profile) = profile {
        if let Some(render) = &props.render {
            return render.emit(profile);
        }
        return html! {
            <>
                {for props.children.iter()}
            </>
        };
    }

    match state.auth_state {
        AuthState::Unknown => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Checking session..."}
                </p>
            </div>
        },
        _ => html! {
            <div class="text-center py-12 space-y-4">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"You need to log in to view this page."}
                </p>
                <Link<Route>
                    to={Route::Login}
                    classes="inline-block bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Go to login"}
                </Link<Route>>
            </div>
        },
    }
}
