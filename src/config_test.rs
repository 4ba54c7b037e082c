use super::*;

#[test]
fn defaults_point_at_live_contact_endpoint() {
    let config = SiteConfig::default();
    assert_eq!(config.contact_endpoint, "/api/contact");
    assert_eq!(config.submission_mode, SubmissionMode::Live);
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn from_pairs_reads_known_keys() {
    let config = SiteConfig::from_pairs([
        ("folio:contact-endpoint", " https://example.com/contact "),
        ("folio:contact-mode", "simulate"),
        ("folio:log-level", "debug"),
    ]);
    assert_eq!(config.contact_endpoint, "https://example.com/contact");
    assert_eq!(config.submission_mode, SubmissionMode::Simulate);
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn from_pairs_ignores_unknown_and_unprefixed_names() {
    let config = SiteConfig::from_pairs([
        ("contact-endpoint", "/elsewhere"),
        ("folio:unknown", "x"),
        ("description", "portfolio"),
    ]);
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_pairs_keeps_defaults_for_invalid_values() {
    let config = SiteConfig::from_pairs([
        ("folio:contact-endpoint", "   "),
        ("folio:contact-mode", "sometimes"),
        ("folio:log-level", "loud"),
    ]);
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn submission_mode_parses_aliases_case_insensitively() {
    assert_eq!("LIVE".parse::<SubmissionMode>(), Ok(SubmissionMode::Live));
    assert_eq!("Demo".parse::<SubmissionMode>(), Ok(SubmissionMode::Simulate));
    assert!("".parse::<SubmissionMode>().is_err());
}

#[test]
fn from_document_falls_back_to_defaults_without_browser() {
    assert_eq!(SiteConfig::from_document(), SiteConfig::default());
}
