pub mod companies;
pub mod company_detail;
pub mod employees;
pub mod expense_detail;
pub mod expenses;
pub mod home;
pub mod login;
pub mod not_found;
pub mod project_detail;
pub mod projects;
pub mod tasks;

pub use companies::CompaniesPage;
pub use company_detail::CompanyDetailPage;
pub use employees::EmployeesPage;
pub use expense_detail::ExpenseDetailPage;
pub use expenses::ExpensesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use tasks::TasksPage;
