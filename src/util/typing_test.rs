use super::*;

#[test]
fn from_text_splits_lines_and_drops_single_trailing_newline() {
    let script = TypingScript::from_text("a\r\n\nb\n");
    assert_eq!(script.line_count(), 3);
    assert_eq!(script.line_numbers(), "1\n2\n3\n");
    assert_eq!(TypingScript::from_text("").line_count(), 0);
    assert_eq!(TypingScript::from_text("").line_numbers(), "");
}

#[test]
fn events_type_each_char_then_end_line() {
    let script = TypingScript::from_text("ab\n// c");
    let events: Vec<TypeEvent> = script.events().collect();
    assert_eq!(
        events,
        vec![
            TypeEvent::Char { ch: 'a', comment: false },
            TypeEvent::Char { ch: 'b', comment: false },
            TypeEvent::LineEnd,
            TypeEvent::Char { ch: '/', comment: true },
            TypeEvent::Char { ch: '/', comment: true },
            TypeEvent::Char { ch: ' ', comment: true },
            TypeEvent::Char { ch: 'c', comment: true },
            TypeEvent::LineEnd,
        ]
    );
}

#[test]
fn indented_comment_lines_are_detected() {
    let script = TypingScript::from_text("    // note");
    assert!(script.events().all(|e| match e {
        TypeEvent::Char { comment, .. } => comment,
        TypeEvent::LineEnd => true,
    }));
}

#[test]
fn delays_depend_on_line_kind_and_jitter() {
    let code = TypeEvent::Char { ch: 'x', comment: false };
    let comment = TypeEvent::Char { ch: 'x', comment: true };
    assert_eq!(code.delay_ms(0.0), 30);
    assert_eq!(code.delay_ms(1.0), 50);
    assert_eq!(comment.delay_ms(0.0), 20);
    assert_eq!(comment.delay_ms(0.5), 30);
    assert_eq!(comment.delay_ms(9.0), 40);
    assert_eq!(TypeEvent::LineEnd.delay_ms(0.7), LINE_PAUSE_MS);
}

#[test]
fn empty_code_window_falls_back_to_built_in_listing() {
    let script = TypingScript::for_code_window("  \n");
    assert_eq!(script.line_count(), 46);
    assert_eq!(script.line_count(), CODE_LINES.len());
    assert!(script.line_numbers().ends_with("45\n46\n"));
}

#[test]
fn code_window_markup_overrides_built_in_listing() {
    let script = TypingScript::for_code_window("fn main() {}\n");
    assert_eq!(script.line_count(), 1);
}

#[test]
fn built_in_listing_types_only_full_comment_lines_at_comment_speed() {
    let script = TypingScript::from_lines(CODE_LINES);
    let comment_chars: Vec<TypeEvent> = script
        .events()
        .filter(|e| matches!(e, TypeEvent::Char { comment: true, .. }))
        .collect();
    // "// Security middleware", "// Rate limiting", "// Routes"
    assert_eq!(comment_chars.len(), 47);
    assert!(comment_chars.iter().all(|e| e.delay_ms(0.0) == 20));

    let line_ends = script.events().filter(|e| *e == TypeEvent::LineEnd).count();
    assert_eq!(line_ends, 46);

    let trailing = TypingScript::from_lines(&["  windowMs: 15 * 60 * 1000, // 15 minutes"]);
    assert!(trailing.events().all(|e| e.delay_ms(0.0) != 20));
}
