use super::*;
use std::cell::Cell;

use futures::executor::block_on;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn valid_values() -> HashMap<String, String> {
    values(&[
        ("firstName", "Ada"),
        ("lastName", "Lovelace"),
        ("email", "ada@example.com"),
        ("projectType", "backend"),
        ("message", "I would like to talk about an API."),
        ("company", "Analytical Engines"),
    ])
}

struct FakeTransport {
    result: Result<ContactResponse, SubmitError>,
    calls: Cell<usize>,
}

impl FakeTransport {
    fn ok() -> Self {
        Self {
            result: Ok(ContactResponse {
                success: true,
                message: Some("Message sent successfully!".to_owned()),
            }),
            calls: Cell::new(0),
        }
    }

    fn failing(err: SubmitError) -> Self {
        Self {
            result: Err(err),
            calls: Cell::new(0),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for FakeTransport {
    async fn send(&self, _request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

// =============================================================
// validate_field
// =============================================================

#[test]
fn unknown_field_is_always_valid() {
    let rules = RuleTable::contact();
    let result = rules.validate_field("budget", "");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn required_blank_value_reports_capitalized_field_only() {
    let rules = RuleTable::contact();
    let result = rules.validate_field("firstName", "   ");
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["FirstName is required".to_owned()]);
}

#[test]
fn optional_blank_value_is_valid() {
    let rules = RuleTable::new().with(
        "company",
        ValidationRule {
            min_length: Some(3),
            ..ValidationRule::default()
        },
    );
    assert!(rules.validate_field("company", "").is_valid);
    assert!(rules.validate_field("company", "  ").is_valid);
    assert!(!rules.validate_field("company", "ab").is_valid);
}

#[test]
fn min_length_boundary_is_inclusive() {
    let rules = RuleTable::contact();
    let short = rules.validate_field("firstName", "A");
    assert!(!short.is_valid);
    assert_eq!(short.first_error(), Some("Minimum 2 characters required"));
    assert!(rules.validate_field("firstName", "Al").is_valid);
}

#[test]
fn message_of_nineteen_chars_fails_and_twenty_passes() {
    let rules = RuleTable::contact();
    let nineteen = "a".repeat(19);
    let twenty = "a".repeat(20);

    let result = rules.validate_field("message", &nineteen);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Minimum 20 characters required".to_owned()]);

    assert!(rules.validate_field("message", &twenty).is_valid);
}

#[test]
fn message_over_max_length_fails() {
    let rules = RuleTable::contact();
    assert!(rules.validate_field("message", &"x".repeat(1000)).is_valid);
    let result = rules.validate_field("message", &"x".repeat(1001));
    assert_eq!(result.errors, vec!["Maximum 1000 characters allowed".to_owned()]);
}

#[test]
fn length_counts_characters_not_bytes() {
    let rules = RuleTable::contact();
    assert!(rules.validate_field("message", &"é".repeat(20)).is_valid);
}

#[test]
fn length_and_pattern_errors_accumulate() {
    let rules = RuleTable::contact();
    let result = rules.validate_field("lastName", "7");
    assert_eq!(
        result.errors,
        vec![
            "Minimum 2 characters required".to_owned(),
            "Last name must be at least 2 characters and contain only letters".to_owned(),
        ]
    );
}

#[test]
fn email_pattern_accepts_plain_addresses_only() {
    let rules = RuleTable::contact();
    assert!(rules.validate_field("email", "me@site.dev").is_valid);
    for bad in ["me@site", "me site@x.io", "@x.io", "me@@x.io"] {
        let result = rules.validate_field("email", bad);
        assert_eq!(result.first_error(), Some("Please enter a valid email address"), "{bad}");
    }
}

#[test]
fn pattern_without_message_uses_generic_text() {
    let rules = RuleTable::new().with(
        "zip",
        ValidationRule {
            pattern: Some(Regex::new(r"^\d{5}$").expect("regex")),
            ..ValidationRule::default()
        },
    );
    assert_eq!(rules.validate_field("zip", "abc").first_error(), Some("Invalid format"));
}

// =============================================================
// validate_form / submit
// =============================================================

#[test]
fn validate_form_reports_first_invalid_in_table_order() {
    let rules = RuleTable::contact();
    let mut form = valid_values();
    form.insert("message".to_owned(), "too short".to_owned());
    form.remove("email");
    let report = rules.validate_form(&form);
    assert!(!report.is_valid());
    assert_eq!(report.first_invalid(), Some("email"));
    assert_eq!(report.fields.len(), 5);
}

#[test]
fn submit_with_invalid_form_never_calls_transport() {
    let transport = FakeTransport::ok();
    let mut form = valid_values();
    form.insert("firstName".to_owned(), String::new());
    let outcome = block_on(submit_contact(&RuleTable::contact(), form, &transport));
    match outcome {
        SubmitOutcome::Invalid { first_field, .. } => assert_eq!(first_field, "firstName"),
        other => panic!("expected invalid outcome, got {other:?}"),
    }
    assert_eq!(transport.calls.get(), 0);
}

#[test]
fn submit_with_valid_form_sends_once() {
    let transport = FakeTransport::ok();
    let outcome = block_on(submit_contact(&RuleTable::contact(), valid_values(), &transport));
    assert!(matches!(outcome, SubmitOutcome::Sent(ref r) if r.success));
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn submit_surfaces_transport_failure() {
    let transport = FakeTransport::failing(SubmitError::Status(502));
    let outcome = block_on(submit_contact(&RuleTable::contact(), valid_values(), &transport));
    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Status(502)));
}

// =============================================================
// Counter
// =============================================================

#[test]
fn counter_level_thresholds() {
    assert_eq!(CounterLevel::for_length(0), CounterLevel::Normal);
    assert_eq!(CounterLevel::for_length(800), CounterLevel::Normal);
    assert_eq!(CounterLevel::for_length(801), CounterLevel::Warning);
    assert_eq!(CounterLevel::for_length(1000), CounterLevel::Warning);
    assert_eq!(CounterLevel::for_length(1001), CounterLevel::Error);
    assert_eq!(CounterLevel::Error.classes(), &["warning", "error"]);
}
