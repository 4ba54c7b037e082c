//! Pure rules for shared page chrome: navbar, anchors, skill meters.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

/// Navbar gets the `scrolled` class past this offset.
pub const SCROLLED_OFFSET: f64 = 50.0;
/// Navbar never auto-hides above this offset; the scroll hint hides past it.
pub const AUTO_HIDE_OFFSET: f64 = 100.0;
/// Auto-hide only applies to viewports wider than this.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Fixed header height kept clear when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 80.0;

const SCROLL_JITTER: f64 = 5.0;

/// What the navbar should look like after a scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarFrame {
    pub scrolled: bool,
    /// `Some(true)` to slide the bar away, `Some(false)` to bring it back,
    /// `None` to leave it as is.
    pub hidden: Option<bool>,
}

/// Tracks scroll direction for the auto-hiding navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarState {
    last_scroll_y: f64,
}

impl NavbarState {
    pub fn new(scroll_y: f64) -> Self {
        Self { last_scroll_y: scroll_y }
    }

    pub fn update(&mut self, scroll_y: f64, viewport_width: f64) -> NavbarFrame {
        let delta = scroll_y - self.last_scroll_y;
        self.last_scroll_y = scroll_y;

        let hidden = if viewport_width <= MOBILE_BREAKPOINT {
            None
        } else if delta > SCROLL_JITTER && scroll_y > AUTO_HIDE_OFFSET {
            Some(true)
        } else if delta < -SCROLL_JITTER || scroll_y < AUTO_HIDE_OFFSET {
            Some(false)
        } else {
            None
        };

        NavbarFrame {
            scrolled: scroll_y > SCROLLED_OFFSET,
            hidden,
        }
    }
}

pub fn scroll_hint_visible(scroll_y: f64) -> bool {
    scroll_y <= AUTO_HIDE_OFFSET
}

/// Document offset to scroll to so an anchor clears the fixed header.
pub fn anchor_scroll_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// Fraction of the page scrolled, `0.0..=1.0`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Whether a nav link points at the section currently in view.
pub fn nav_link_is_active(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id) || (section_id == "hero" && href == "./index.html")
}

fn parse_percent(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().trim_end_matches('%').parse().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

/// Width for a skill bar's `data-level`.
pub fn level_width(raw: &str) -> Option<String> {
    parse_percent(raw).map(|v| format!("{v}%"))
}

/// Background for a progress ring's `data-progress`.
pub fn progress_gradient(raw: &str) -> Option<String> {
    let degrees = parse_percent(raw)? / 100.0 * 360.0;
    Some(format!(
        "conic-gradient(var(--primary-color) {degrees}deg, var(--border-color) {degrees}deg)"
    ))
}

/// Whether a skill card tagged `data-skill="{skill}"` stays highlighted under
/// `category`. `"all"` keeps every card.
pub fn skill_in_category(category: &str, skill: Option<&str>) -> bool {
    category == "all" || skill == Some(category)
}
