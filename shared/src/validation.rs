//! Todo draft validation
//!
//! Field rules for a [`NewTodo`] and the messages shown for each violation.
//! Lengths are counted in characters, not bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{NewTodo, TodoStatus};

pub const OWNER_MIN_LEN: usize = 2;
pub const OWNER_MAX_LEN: usize = 50;
pub const BODY_MIN_LEN: usize = 5;
pub const BODY_MAX_LEN: usize = 200;
pub const CATEGORY_MIN_LEN: usize = 3;
pub const CATEGORY_MAX_LEN: usize = 30;

/// Draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoField {
    Owner,
    Body,
    Status,
    Category,
}

impl TodoField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Body => "body",
            Self::Status => "status",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for TodoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Violated rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Required,
    MinLength,
    MaxLength,
    /// Status token is not `complete` / `incomplete`
    Status,
}

/// One field-level violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: TodoField,
    pub rule: Rule,
    pub message: String,
}

impl FieldViolation {
    fn new(field: TodoField, rule: Rule) -> Self {
        Self {
            field,
            rule,
            message: message_for(field, rule).to_string(),
        }
    }
}

/// Message for a field/rule pair that no validation produces
pub const INVALID_VALUE_MESSAGE: &str = "Invalid value";

/// User-facing message for a violated rule
pub fn message_for(field: TodoField, rule: Rule) -> &'static str {
    match (field, rule) {
        (TodoField::Owner, Rule::Required) => "Owner is required",
        (TodoField::Owner, Rule::MinLength) => "Owner must be at least 2 characters long",
        (TodoField::Owner, Rule::MaxLength) => "Owner cannot be more than 50 characters long",

        (TodoField::Body, Rule::Required) => "Body is required",
        (TodoField::Body, Rule::MinLength) => "Body must be at least 5 characters long",
        (TodoField::Body, Rule::MaxLength) => "Body may not be more than 200 characters long",

        (TodoField::Status, Rule::Required) => "Status is required",
        (TodoField::Status, Rule::Status) => "Status must be either complete or incomplete",

        (TodoField::Category, Rule::Required) => "Category is required",
        (TodoField::Category, Rule::MinLength) => "Category must be at least 3 characters long",
        (TodoField::Category, Rule::MaxLength) => {
            "Category may not be more than 30 characters long"
        }

        // No field checks a rule outside its own vocabulary
        (TodoField::Owner | TodoField::Body | TodoField::Category, Rule::Status)
        | (TodoField::Status, Rule::MinLength | Rule::MaxLength) => INVALID_VALUE_MESSAGE,
    }
}

/// All violations found in a draft, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violations for one field
    pub fn for_field(&self, field: TodoField) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Messages for one field
    pub fn messages(&self, field: TodoField) -> Vec<&str> {
        self.for_field(field).map(|v| v.message.as_str()).collect()
    }

    pub fn has(&self, field: TodoField, rule: Rule) -> bool {
        self.for_field(field).any(|v| v.rule == rule)
    }

    fn push(&mut self, field: TodoField, rule: Rule) {
        self.violations.push(FieldViolation::new(field, rule));
    }

    fn check_length(&mut self, field: TodoField, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len == 0 {
            self.push(field, Rule::Required);
        } else if len < min {
            self.push(field, Rule::MinLength);
        } else if len > max {
            self.push(field, Rule::MaxLength);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .violations
            .first()
            .map(|v| v.message.clone())
            .unwrap_or_else(|| "Validation failed".to_string());
        let fields: Vec<&str> = errors.violations.iter().map(|v| v.field.name()).collect();
        AppError::validation(message).with_detail("fields", fields)
    }
}

/// Validate a draft before it is submitted.
pub fn validate_new_todo(draft: &NewTodo) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    errors.check_length(TodoField::Owner, &draft.owner, OWNER_MIN_LEN, OWNER_MAX_LEN);
    errors.check_length(TodoField::Body, &draft.body, BODY_MIN_LEN, BODY_MAX_LEN);

    if draft.status.is_empty() {
        errors.push(TodoField::Status, Rule::Required);
    } else if TodoStatus::from_token(&draft.status).is_none() {
        errors.push(TodoField::Status, Rule::Status);
    }

    errors.check_length(
        TodoField::Category,
        &draft.category,
        CATEGORY_MIN_LEN,
        CATEGORY_MAX_LEN,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn valid() -> NewTodo {
        NewTodo::new("chris", "Finish the report", "incomplete", "Homework")
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_new_todo(&valid()).is_ok());
    }

    #[test]
    fn test_empty_draft_reports_required_only() {
        let errors = validate_new_todo(&NewTodo::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.violations.iter().all(|v| v.rule == Rule::Required));
        assert_eq!(errors.messages(TodoField::Owner), vec!["Owner is required"]);
        assert_eq!(errors.messages(TodoField::Status), vec!["Status is required"]);
    }

    #[test]
    fn test_owner_bounds() {
        let mut draft = valid();
        draft.owner = "a".into();
        let errors = validate_new_todo(&draft).unwrap_err();
        assert!(errors.has(TodoField::Owner, Rule::MinLength));

        draft.owner = "ab".into();
        assert!(validate_new_todo(&draft).is_ok());

        draft.owner = "x".repeat(50);
        assert!(validate_new_todo(&draft).is_ok());

        draft.owner = "x".repeat(51);
        let errors = validate_new_todo(&draft).unwrap_err();
        assert_eq!(
            errors.messages(TodoField::Owner),
            vec!["Owner cannot be more than 50 characters long"]
        );
    }

    #[test]
    fn test_body_bounds() {
        let mut draft = valid();
        draft.body = "abcd".into();
        assert!(validate_new_todo(&draft).unwrap_err().has(TodoField::Body, Rule::MinLength));

        draft.body = "y".repeat(200);
        assert!(validate_new_todo(&draft).is_ok());

        draft.body = "y".repeat(201);
        assert!(validate_new_todo(&draft).unwrap_err().has(TodoField::Body, Rule::MaxLength));
    }

    #[test]
    fn test_category_bounds() {
        let mut draft = valid();
        draft.category = "ab".into();
        assert_eq!(
            validate_new_todo(&draft).unwrap_err().messages(TodoField::Category),
            vec!["Category must be at least 3 characters long"]
        );

        draft.category = "z".repeat(31);
        assert!(validate_new_todo(&draft)
            .unwrap_err()
            .has(TodoField::Category, Rule::MaxLength));
    }

    #[test]
    fn test_length_counts_characters() {
        let mut draft = valid();
        // two characters, four bytes
        draft.owner = "éé".into();
        assert!(validate_new_todo(&draft).is_ok());
    }

    #[test]
    fn test_status_must_be_known_token() {
        let mut draft = valid();
        draft.status = "done".into();
        let errors = validate_new_todo(&draft).unwrap_err();
        assert_eq!(
            errors.messages(TodoField::Status),
            vec!["Status must be either complete or incomplete"]
        );

        draft.status = "Complete".into();
        assert!(validate_new_todo(&draft).is_err());

        draft.status = "complete".into();
        assert!(validate_new_todo(&draft).is_ok());
    }

    #[test]
    fn test_inapplicable_rule_has_no_field_message() {
        for field in [TodoField::Owner, TodoField::Body, TodoField::Category] {
            assert_eq!(message_for(field, Rule::Status), INVALID_VALUE_MESSAGE);
        }
        assert_eq!(message_for(TodoField::Status, Rule::MaxLength), INVALID_VALUE_MESSAGE);
        assert_eq!(
            message_for(TodoField::Owner, Rule::MaxLength),
            "Owner cannot be more than 50 characters long"
        );
        assert_eq!(
            message_for(TodoField::Status, Rule::Status),
            "Status must be either complete or incomplete"
        );
    }

    #[test]
    fn test_into_app_error() {
        let errors = validate_new_todo(&NewTodo {
            owner: "a".into(),
            ..valid()
        })
        .unwrap_err();
        let err: AppError = errors.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Owner must be at least 2 characters long");
    }

    #[test]
    fn test_display_joins_messages() {
        let errors = validate_new_todo(&NewTodo {
            owner: "a".into(),
            category: "b".into(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Owner must be at least 2 characters long; Category must be at least 3 characters long"
        );
    }
}
