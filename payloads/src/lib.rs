use derive_more::{Display, FromStr};
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{ApiClient, ClientError, Session, SessionStore};

/// Id type wrapper helps ensure we don't mix up ids for different resources.
#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct CompanyId(pub Uuid);

#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct ProjectId(pub Uuid);

#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct TaskId(pub Uuid);

#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct EmployeeId(pub Uuid);

#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct ExpenseReportId(pub Uuid);

#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct ExpenseItemId(pub Uuid);

#[derive(
    Debug,
    Display,
    FromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct UserId(pub Uuid);

/// Workflow state of a task. The API uses SCREAMING_SNAKE strings on the
/// wire (`NOT_STARTED` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] =
        [Self::NotStarted, Self::InProgress, Self::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Proposed,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] =
        [Self::Proposed, Self::Active, Self::OnHold, Self::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Proposed => "Proposed",
            Self::Active => "Active",
            Self::OnHold => "On hold",
            Self::Completed => "Completed",
        }
    }
}

/// Lifecycle of an expense report. Reports are editable while in `Draft`;
/// submission hands them to an approver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 4] =
        [Self::Draft, Self::Submitted, Self::Approved, Self::Rejected];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Travel,
    Meals,
    Lodging,
    Supplies,
    Software,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Travel,
        Self::Meals,
        Self::Lodging,
        Self::Supplies,
        Self::Software,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Meals => "Meals",
            Self::Lodging => "Lodging",
            Self::Supplies => "Supplies",
            Self::Software => "Software",
            Self::Other => "Other",
        }
    }
}

/// A client company of the firm. User-settable fields only; server-assigned
/// fields (id, timestamps) live on the response wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub company_id: CompanyId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// Rate billed to the client per hour of work on this project.
    pub hourly_rate: Decimal,
    pub budget: Option<Decimal>,
    pub start_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub project_id: ProjectId,
    pub assignee_id: Option<EmployeeId>,
    pub title: String,
    pub details: Option<String>,
    pub status: TaskStatus,
    pub due_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub email: String,
    /// Job title, e.g. "Senior Consultant".
    pub title: String,
    pub hourly_cost: Decimal,
    pub is_active: bool,
}

/// One line of an expense report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub incurred_on: Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_format_is_screaming_snake() {
        let json = serde_json::to_string(&TaskStatus::NotStarted).unwrap();
        assert_eq!(json, r#""NOT_STARTED""#);
        let back: TaskStatus = serde_json::from_str(r#""IN_PROGRESS""#).unwrap();
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn expense_status_editability() {
        assert!(ExpenseStatus::Draft.is_editable());
        assert!(ExpenseStatus::Rejected.is_editable());
        assert!(!ExpenseStatus::Submitted.is_editable());
        assert!(!ExpenseStatus::Approved.is_editable());
    }
}
