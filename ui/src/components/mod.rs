pub mod company_form;
pub mod employee_form;
pub mod expense_editor;
pub mod layout;
pub mod modal;
pub mod project_form;
pub mod require_auth;
pub mod status_badge;
pub mod task_form;
pub mod toast;

pub use company_form::CompanyForm;
pub use employee_form::EmployeeForm;
pub use expense_editor::ExpenseEditor;
pub use modal::Modal;
pub use project_form::ProjectForm;
pub use require_auth::RequireAuth;
pub use status_badge::{
    ExpenseStatusBadge, ProjectStatusBadge, TaskStatusBadge,
};
pub use task_form::TaskForm;
pub use toast::ToastContainer;
