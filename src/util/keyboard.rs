//! Keyboard navigation rules.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Layout of a group navigated with arrow keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RovingAxis {
    /// Left/Right plus Home/End (filter button rows).
    Horizontal,
    /// All four arrows wrap around (card grids).
    Grid,
}

/// Index that should receive focus after `key`, or `None` if the key is not
/// a navigation key for `axis`.
pub fn roving_target(axis: RovingAxis, key: &str, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let current = current.min(last);
    let prev = if current == 0 { last } else { current - 1 };
    let next = if current == last { 0 } else { current + 1 };
    match (axis, key) {
        (_, "ArrowLeft") => Some(prev),
        (_, "ArrowRight") => Some(next),
        (RovingAxis::Grid, "ArrowUp") => Some(prev),
        (RovingAxis::Grid, "ArrowDown") => Some(next),
        (RovingAxis::Horizontal, "Home") => Some(0),
        (RovingAxis::Horizontal, "End") => Some(last),
        _ => None,
    }
}

/// Page reached by an `Alt+<key>` shortcut.
pub fn alt_shortcut_target(key: &str) -> Option<&'static str> {
    match key {
        "h" => Some("./index.html"),
        "c" => Some("./contact.html"),
        "p" => Some("./projects.html"),
        _ => None,
    }
}

/// `Ctrl/Cmd + Shift + D` toggles the theme.
pub fn is_theme_shortcut(ctrl_or_meta: bool, shift: bool, key: &str) -> bool {
    ctrl_or_meta && shift && key == "D"
}

/// Enter and Space activate buttons rendered as non-button elements.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
