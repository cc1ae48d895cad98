pub mod use_authentication;
pub mod use_companies;
pub mod use_company;
pub mod use_company_projects;
pub mod use_employees;
pub mod use_expense_report;
pub mod use_expense_reports;
pub mod use_fetch;
pub mod use_logout;
pub mod use_project;
pub mod use_projects;
pub mod use_push_route;
pub mod use_request;
pub mod use_require_auth;
pub mod use_tasks;
pub mod use_title;

pub use use_authentication::use_authentication;
pub use use_companies::use_companies;
pub use use_company::use_company;
pub use use_company_projects::use_company_projects;
pub use use_employees::use_employees;
pub use use_expense_report::use_expense_report;
pub use use_expense_reports::use_expense_reports;
pub use use_fetch::{use_fetch, use_fetch_with_cache};
pub use use_logout::use_logout;
pub use use_project::use_project;
pub use use_projects::use_projects;
pub use use_push_route::use_push_route;
pub use use_request::{
    RequestHandle, RequestSequencer, RequestState, use_request,
};
pub use use_require_auth::use_require_auth;
pub use use_tasks::use_tasks;
pub use use_title::use_title;
