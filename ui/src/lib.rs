use payloads::{
    ApiClient, CompanyId, ExpenseReportId, ProjectId, SessionStore,
};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod session;
pub mod state;
pub mod utils;

pub use state::{AuthState, State};

use components::layout::MainLayout;
use contexts::toast::ToastProvider;

thread_local! {
    static SESSION: SessionStore = session::restore();
}

/// The app-wide session store, shared by every API client instance.
pub fn session_store() -> SessionStore {
    SESSION.with(|store| store.clone())
}

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> ApiClient {
    // Try environment variable first (set at build time)
    let address = option_env!("API_BASE_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            window.location().origin().unwrap()
        });

    ApiClient::new(address, session_store())
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/companies")]
    Companies,
    #[at("/companies/:id")]
    CompanyDetail { id: CompanyId },
    #[at("/projects")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: ProjectId },
    #[at("/tasks")]
    Tasks,
    #[at("/employees")]
    Employees,
    #[at("/expenses")]
    Expenses,
    #[at("/expenses/:id")]
    ExpenseDetail { id: ExpenseReportId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Login => html! { <pages::LoginPage /> },
        Route::Companies => html! { <pages::CompaniesPage /> },
        Route::CompanyDetail { id } => {
            html! { <pages::CompanyDetailPage company_id={id} /> }
        }
        Route::Projects => html! { <pages::ProjectsPage /> },
        Route::ProjectDetail { id } => {
            html! { <pages::ProjectDetailPage project_id={id} /> }
        }
        Route::Tasks => html! { <pages::TasksPage /> },
        Route::Employees => html! { <pages::EmployeesPage /> },
        Route::Expenses => html! { <pages::ExpensesPage /> },
        Route::ExpenseDetail { id } => {
            html! { <pages::ExpenseDetailPage report_id={id} /> }
        }
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
