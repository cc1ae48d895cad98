use crate::{
    CompanyId, EmployeeId, ExpenseItemId, ExpenseReportId, ExpenseStatus,
    ProjectId, TaskId, UserId,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured error payload the API returns alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

/// Access/refresh token pair, returned by login and by the refresh
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

impl UserProfile {
    /// Name to show in the header: display name when set, else the email.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub tokens: SessionTokens,
    pub profile: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: CompanyId,
    pub company_details: crate::Company,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: ProjectId,
    pub project_details: crate::Project,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: TaskId,
    pub task_details: crate::Task,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub employee_details: crate::Employee,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One stored line of an expense report, with its server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub item_id: ExpenseItemId,
    pub item_details: crate::ExpenseItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseReport {
    pub report_id: ExpenseReportId,
    pub employee_id: EmployeeId,
    pub project_id: Option<ProjectId>,
    pub status: ExpenseStatus,
    pub items: Vec<ExpenseLine>,
    /// Sum of line amounts, computed server-side.
    pub total: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
