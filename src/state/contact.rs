//! Contact form validation rules and submission flow.
//!
//! DESIGN
//! ======
//! Rules are a static, ordered table. Validation is pure: it returns a
//! report and never touches the DOM, so the page controller decides how to
//! render errors and which field to focus. Table order defines which invalid
//! field is "first".

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SubmitError;
use crate::net::api::ContactTransport;
use crate::net::types::{ContactRequest, ContactResponse};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Message length above which the counter warns.
pub const MESSAGE_WARN_LENGTH: usize = 800;
/// Message length above which the counter shows an error.
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// Constraints for a single form field.
#[derive(Clone, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub message: &'static str,
}

/// Outcome of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl FieldValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// The message shown inline next to the field.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Ordered rule table keyed by field name.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: Vec<(&'static str, ValidationRule)>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: &'static str, rule: ValidationRule) -> Self {
        self.rules.push((field, rule));
        self
    }

    /// Rules for the portfolio contact form.
    pub fn contact() -> Self {
        Self::new()
            .with(
                "firstName",
                ValidationRule {
                    required: true,
                    min_length: Some(2),
                    pattern: Some(NAME_RE.clone()),
                    message: "First name must be at least 2 characters and contain only letters",
                    ..ValidationRule::default()
                },
            )
            .with(
                "lastName",
                ValidationRule {
                    required: true,
                    min_length: Some(2),
                    pattern: Some(NAME_RE.clone()),
                    message: "Last name must be at least 2 characters and contain only letters",
                    ..ValidationRule::default()
                },
            )
            .with(
                "email",
                ValidationRule {
                    required: true,
                    pattern: Some(EMAIL_RE.clone()),
                    message: "Please enter a valid email address",
                    ..ValidationRule::default()
                },
            )
            .with(
                "projectType",
                ValidationRule {
                    required: true,
                    message: "Please select a project type",
                    ..ValidationRule::default()
                },
            )
            .with(
                "message",
                ValidationRule {
                    required: true,
                    min_length: Some(20),
                    max_length: Some(MESSAGE_MAX_LENGTH),
                    message: "Message must be between 20 and 1000 characters",
                    ..ValidationRule::default()
                },
            )
    }

    pub fn get(&self, field: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|(name, _)| *name == field).map(|(_, rule)| rule)
    }

    /// Declared field names in table order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// Validate a single field value against its rule.
    ///
    /// Unknown fields are always valid. An empty value only fails the
    /// required check; length and pattern checks each append their own error.
    pub fn validate_field(&self, field: &str, value: &str) -> FieldValidation {
        let Some(rule) = self.get(field) else {
            return FieldValidation::from_errors(Vec::new());
        };

        let mut errors = Vec::new();
        let blank = value.trim().is_empty();

        if rule.required && blank {
            errors.push(format!("{} is required", capitalize(field)));
        }
        if blank {
            return FieldValidation::from_errors(errors);
        }

        let length = value.chars().count();
        if let Some(min) = rule.min_length {
            if length < min {
                errors.push(format!("Minimum {min} characters required"));
            }
        }
        if let Some(max) = rule.max_length {
            if length > max {
                errors.push(format!("Maximum {max} characters allowed"));
            }
        }
        if let Some(pattern) = &rule.pattern {
            if !pattern.is_match(value) {
                let message = if rule.message.is_empty() { "Invalid format" } else { rule.message };
                errors.push(message.to_owned());
            }
        }

        FieldValidation::from_errors(errors)
    }

    /// Validate every declared field. Missing values count as empty.
    pub fn validate_form(&self, values: &HashMap<String, String>) -> FormReport {
        let fields = self
            .rules
            .iter()
            .map(|(name, _)| {
                let value = values.get(*name).map_or("", String::as_str);
                (*name, self.validate_field(name, value))
            })
            .collect();
        FormReport { fields }
    }
}

/// Per-field results for a whole-form validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReport {
    pub fields: Vec<(&'static str, FieldValidation)>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_valid)
    }

    /// First invalid field in table order.
    pub fn first_invalid(&self) -> Option<&'static str> {
        self.fields.iter().find(|(_, v)| !v.is_valid).map(|(name, _)| *name)
    }
}

/// Result of a submit attempt.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid { first_field: &'static str, report: FormReport },
    Sent(ContactResponse),
    Failed(SubmitError),
}

/// Validate `values` and, if everything passes, deliver them via `transport`.
pub async fn submit_contact<T>(rules: &RuleTable, values: HashMap<String, String>, transport: &T) -> SubmitOutcome
where
    T: ContactTransport + ?Sized,
{
    let report = rules.validate_form(&values);
    if let Some(first_field) = report.first_invalid() {
        return SubmitOutcome::Invalid { first_field, report };
    }

    let request = ContactRequest::from(values);
    match transport.send(&request).await {
        Ok(response) => {
            log::info!(
                "contact form submitted: project_type={:?} message_length={}",
                request.get("projectType"),
                request.get("message").map_or(0, |m| m.chars().count())
            );
            SubmitOutcome::Sent(response)
        }
        Err(e) => {
            log::error!("form submission error: {e}");
            SubmitOutcome::Failed(e)
        }
    }
}

/// Severity of the message length counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Error,
}

impl CounterLevel {
    pub fn for_length(length: usize) -> Self {
        if length > MESSAGE_MAX_LENGTH {
            Self::Error
        } else if length > MESSAGE_WARN_LENGTH {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// CSS classes on the counter's container. Errors keep the warning class.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Normal => &[],
            Self::Warning => &["warning"],
            Self::Error => &["warning", "error"],
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
