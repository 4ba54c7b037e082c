use super::*;
use futures::executor::block_on;

fn request() -> ContactRequest {
    let mut values = std::collections::HashMap::new();
    values.insert("email".to_owned(), "a@b.co".to_owned());
    ContactRequest::from(values)
}

#[test]
fn transport_for_live_mode_uses_configured_endpoint() {
    let config = SiteConfig {
        contact_endpoint: "/api/v2/contact".to_owned(),
        ..SiteConfig::default()
    };
    // Only the HTTP transport is unavailable natively.
    let result = block_on(transport_for(&config).send(&request()));
    assert_eq!(result, Err(SubmitError::Unavailable));
    assert_eq!(HttpTransport::new("/x").endpoint(), "/x");
}

#[test]
fn simulated_transport_succeeds_above_failure_rate() {
    let transport = SimulatedTransport::default().with_delay_ms(0).with_roll(|| 0.5);
    let response = block_on(transport.send(&request())).expect("simulated success");
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Message sent successfully!"));
}

#[test]
fn simulated_transport_fails_below_failure_rate() {
    let transport = SimulatedTransport::default().with_delay_ms(0).with_roll(|| 0.05);
    let result = block_on(transport.send(&request()));
    assert_eq!(result, Err(SubmitError::Network("Network error".to_owned())));
}

#[test]
fn simulate_mode_selects_simulated_transport() {
    let config = SiteConfig {
        submission_mode: SubmissionMode::Simulate,
        ..SiteConfig::default()
    };
    // Native random source always rolls 1.0, so the simulation succeeds.
    let result = block_on(transport_for(&config).send(&request()));
    assert!(result.is_ok());
}

#[test]
fn status_error_message_matches_alert_log_format() {
    assert_eq!(SubmitError::Status(404).to_string(), "HTTP error! status: 404");
}

#[test]
fn contact_request_serializes_as_flat_object() {
    let json = serde_json::to_value(request()).expect("serialize");
    assert_eq!(json, serde_json::json!({ "email": "a@b.co" }));
}

#[test]
fn contact_response_tolerates_missing_fields() {
    let parsed: ContactResponse = serde_json::from_str("{}").expect("parse");
    assert!(!parsed.success);
    assert_eq!(parsed.message, None);
}
