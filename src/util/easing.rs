//! Easing curves and count-up counter math.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Default count-up duration.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// `1 - (1 - t)^4`, with `t` clamped to `0..=1`.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Quadratic ease-in-out over `duration`: position at `elapsed` when moving
/// from `start` by `distance`.
pub fn ease_in_out_quad(elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + distance;
    }
    let mut t = (elapsed / (duration / 2.0)).clamp(0.0, 2.0);
    if t < 1.0 {
        return distance / 2.0 * t * t + start;
    }
    t -= 1.0;
    -distance / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// Parse a counter target the way `parseInt` would: optional sign, then
/// leading digits; trailing text such as `+` or `%` is ignored.
pub fn parse_counter_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

/// Count-up from zero to `target` with an ease-out-quart curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: i64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Displayed value after `elapsed_ms`; exactly `target` once done.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.target;
        }
        (self.target as f64 * ease_out_quart(progress)).floor() as i64
    }
}

/// Format with `,` thousands separators (`12345` -> `12,345`).
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
