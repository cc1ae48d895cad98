use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{AuthState, Route, State};

fn nav_link(to: Route, label: &str) -> Html {
    html! {
        <Link<Route>
            {to}
            classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100 transition-colors"
        >
            {label}
        </Link<Route>>
    }
}

#[function_component]
pub fn Header() -> Html {
    let (state, _dispatch) = use_store::<State>();
    let logout = use_logout();

    let on_logout = logout.reform(|_: MouseEvent| ());

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <div class="flex items-center space-x-8">
                    <Link<Route>
                        to={Route::Home}
                        classes="text-lg font-bold text-neutral-900 dark:text-neutral-100"
                    >
                        {"Praxis"}
                    </Link<Route>>
                    if state.is_authenticated() {
                        <nav class="flex items-center space-x-6">
                            {nav_link(Route::Companies, "Clients")}
                            {nav_link(Route::Projects, "Projects")}
                            {nav_link(Route::Tasks, "Tasks")}
                            {nav_link(Route::Employees, "Employees")}
                            {nav_link(Route::Expenses, "Expenses")}
                        </nav>
                    }
                </div>
                <div class="flex items-center space-x-4">
                    {match &state.auth_state {
                        AuthState::LoggedIn(profile) => html! {
                            <>
                                <span class="text-sm text-neutral-600 dark:text-neutral-400">
                                    {profile.shown_name()}
                                </span>
                                <button
                                    onclick={on_logout}
                                    class="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100 transition-colors"
                                >
                                    {"Log out"}
                                </button>
                            </>
                        },
                        AuthState::LoggedOut => html! {
                            {nav_link(Route::Login, "Log in")}
                        },
                        AuthState::Unknown => html! {},
                    }}
                </div>
            </div>
        </header>
    }
}
