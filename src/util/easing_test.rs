use super::*;

#[test]
fn ease_out_quart_endpoints_and_clamping() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert_eq!(ease_out_quart(-3.0), 0.0);
    assert_eq!(ease_out_quart(7.0), 1.0);
    assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
}

#[test]
fn ease_in_out_quad_hits_midpoint_and_end() {
    assert_eq!(ease_in_out_quad(0.0, 100.0, 400.0, 1000.0), 100.0);
    assert!((ease_in_out_quad(500.0, 100.0, 400.0, 1000.0) - 300.0).abs() < 1e-9);
    assert!((ease_in_out_quad(1000.0, 100.0, 400.0, 1000.0) - 500.0).abs() < 1e-9);
    assert!((ease_in_out_quad(5000.0, 100.0, 400.0, 1000.0) - 500.0).abs() < 1e-9);
    assert_eq!(ease_in_out_quad(10.0, 0.0, 50.0, 0.0), 50.0);
}

#[test]
fn parse_counter_target_follows_parse_int() {
    assert_eq!(parse_counter_target("150"), Some(150));
    assert_eq!(parse_counter_target(" 98% "), Some(98));
    assert_eq!(parse_counter_target("50+"), Some(50));
    assert_eq!(parse_counter_target("-7"), Some(-7));
    assert_eq!(parse_counter_target("abc"), None);
    assert_eq!(parse_counter_target(""), None);
    assert_eq!(parse_counter_target("+"), None);
}

#[test]
fn counter_starts_at_zero_and_ends_exactly_on_target() {
    let counter = CounterAnimation::new(1234);
    assert_eq!(counter.value_at(0.0), 0);
    assert_eq!(counter.value_at(2000.0), 1234);
    assert_eq!(counter.value_at(9999.0), 1234);
    assert!(counter.is_done(2000.0));
    assert!(!counter.is_done(1999.0));
}

#[test]
fn counter_is_monotonic_and_front_loaded() {
    let counter = CounterAnimation::new(100);
    let mut last = 0;
    for step in 0..=40 {
        let value = counter.value_at(f64::from(step) * 50.0);
        assert!(value >= last);
        last = value;
    }
    assert_eq!(counter.value_at(1000.0), 93);
}

#[test]
fn zero_duration_counter_jumps_to_target() {
    let counter = CounterAnimation {
        target: 5,
        duration_ms: 0.0,
    };
    assert_eq!(counter.value_at(0.0), 5);
}

#[test]
fn format_grouped_inserts_separators() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1000), "1,000");
    assert_eq!(format_grouped(1_234_567), "1,234,567");
    assert_eq!(format_grouped(-45_000), "-45,000");
}
