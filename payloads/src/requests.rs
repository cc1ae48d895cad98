use crate::{
    CompanyId, EmployeeId, ExpenseStatus, ProjectId, ProjectStatus, TaskStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const NAME_MAX_LEN: usize = 255;
pub const EMAIL_MAX_LEN: usize = 255;
pub const NOTES_MAX_LEN: usize = 2000;

/// Validation result for required display names (companies, projects,
/// tasks, employees).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Empty,
    TooLong,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("This field is required"),
            Self::TooLong => Some("Must be at most 255 characters"),
        }
    }
}

pub fn validate_name(name: &str) -> NameValidation {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return NameValidation::Empty;
    }
    if trimmed.len() > NAME_MAX_LEN {
        return NameValidation::TooLong;
    }
    NameValidation::Valid
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    TooLong,
    Malformed,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Email is required"),
            Self::TooLong => Some("Email must be at most 255 characters"),
            Self::Malformed => Some("Enter a valid email address"),
        }
    }
}

/// Validate an email address.
///
/// Deliberately shallow: the server does the authoritative check, this only
/// catches obvious typos before a round trip.
pub fn validate_email(email: &str) -> EmailValidation {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return EmailValidation::Empty;
    }
    if trimmed.len() > EMAIL_MAX_LEN {
        return EmailValidation::TooLong;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return EmailValidation::Malformed;
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return EmailValidation::Malformed;
    }
    EmailValidation::Valid
}

/// Validation result for monetary amount inputs (rates, budgets, expense
/// amounts), parsed from free text.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountValidation {
    Valid(Decimal),
    Empty,
    NotANumber,
    NotPositive,
}

impl AmountValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid(_) => None,
            Self::Empty => Some("Amount is required"),
            Self::NotANumber => Some("Invalid amount"),
            Self::NotPositive => Some("Amount must be greater than 0"),
        }
    }
}

pub fn validate_amount(input: &str) -> AmountValidation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return AmountValidation::Empty;
    }
    match Decimal::from_str(trimmed) {
        Ok(amount) if amount > Decimal::ZERO => AmountValidation::Valid(amount),
        Ok(_) => AmountValidation::NotPositive,
        Err(_) => AmountValidation::NotANumber,
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshSession {
    pub refresh_token: String,
}

/// Query filter for listing projects. `None` fields are omitted from the
/// query string.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<EmployeeId>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateExpenseReport {
    pub employee_id: EmployeeId,
    pub project_id: Option<ProjectId>,
    pub items: Vec<crate::ExpenseItem>,
}

/// Replaces the draft's line items wholesale; only valid while the report
/// is editable.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateExpenseReport {
    pub project_id: Option<ProjectId>,
    pub items: Vec<crate::ExpenseItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation() {
        assert!(validate_name("Acme Consulting").is_valid());
        assert_eq!(validate_name("   "), NameValidation::Empty);
        assert_eq!(validate_name(&"x".repeat(256)), NameValidation::TooLong);
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("ops@acme.example").is_valid());
        assert_eq!(validate_email(""), EmailValidation::Empty);
        assert_eq!(validate_email("no-at-sign"), EmailValidation::Malformed);
        assert_eq!(validate_email("a@b"), EmailValidation::Malformed);
    }

    #[test]
    fn amount_validation() {
        assert_eq!(
            validate_amount("12.50"),
            AmountValidation::Valid(Decimal::new(1250, 2))
        );
        assert_eq!(validate_amount(""), AmountValidation::Empty);
        assert_eq!(validate_amount("abc"), AmountValidation::NotANumber);
        assert_eq!(validate_amount("-3"), AmountValidation::NotPositive);
        assert_eq!(validate_amount("0"), AmountValidation::NotPositive);
    }

    #[test]
    fn filters_skip_empty_fields_in_query() {
        let filter = TaskFilter {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        let query = serde_json::to_value(&filter).unwrap();
        assert_eq!(query.as_object().unwrap().len(), 1);
        assert_eq!(query["status"], "COMPLETED");
    }
}
