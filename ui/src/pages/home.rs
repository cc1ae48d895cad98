use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_title;
use crate::{AuthState, Route, State};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Home");
    let (state, _dispatch) = use_store::<State>();

    match &state.auth_state {
        AuthState::LoggedIn(profile) => html! {
            <LoggedInHome name={profile.shown_name().to_string()} />
        },
        AuthState::LoggedOut => html! { <LoggedOutHome /> },
        AuthState::Unknown => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Checking session..."}
                </p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct LoggedInHomeProps {
    name: String,
}

#[function_component]
fn LoggedInHome(props: &LoggedInHomeProps) -> Html {
    let sections = [
        (
            Route::Companies,
            "Clients",
            "Companies you work for, with contacts and notes.",
        ),
        (
            Route::Projects,
            "Projects",
            "Engagements per client, with rates and budgets.",
        ),
        (
            Route::Tasks,
            "Tasks",
            "Work items across projects, filterable by status.",
        ),
        (
            Route::Employees,
            "Employees",
            "The roster, with roles and hourly costs.",
        ),
        (
            Route::Expenses,
            "Expenses",
            "Draft, submit, and track expense reports.",
        ),
    ];

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {format!("Welcome back, {}", props.name)}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Pick up where you left off."}
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {sections.iter().map(|(route, title, blurb)| html! {
                    <Link<Route>
                        to={route.clone()}
                        classes="block bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 hover:shadow-lg transition-shadow"
                    >
                        <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                            {*title}
                        </h3>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-2">
                            {*blurb}
                        </p>
                    </Link<Route>>
                }).collect::<Html>()}
            </div>
        </div>
    }
}

#[function_component]
fn LoggedOutHome() -> Html {
    html! {
        <div class="text-center py-20 space-y-6">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Praxis"}
            </h1>
            <p class="text-lg text-neutral-600 dark:text-neutral-400 max-w-xl mx-auto">
                {"Clients, projects, tasks, and expenses for your firm, in one place."}
            </p>
            <Link<Route>
                to={Route::Login}
                classes="inline-block bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-6 py-3 rounded-md text-sm font-medium transition-colors"
            >
                {"Log in"}
            </Link<Route>>
        </div>
    }
}
