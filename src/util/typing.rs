//! Typewriter effect scheduling.
//!
//! Turns a listing into a sequence of typing events and per-event delays. The
//! home code window ships with a built-in listing; markup text, when present,
//! replaces it.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay before typing starts once the snippet is visible.
pub const START_DELAY_MS: u32 = 500;
/// Per-character delay for plain snippets.
pub const PLAIN_CHAR_DELAY_MS: u32 = 30;
/// Pause after each line of a code window.
pub const LINE_PAUSE_MS: u32 = 100;
/// Pause before a code window starts over.
pub const RESTART_DELAY_MS: u32 = 5000;

/// Listing typed by the home code window when its markup is empty.
pub const CODE_LINES: &[&str] = &[
    "const express = require('express');",
    "const helmet = require('helmet');",
    "const rateLimit = require('express-rate-limit');",
    "",
    "const app = express();",
    "",
    "// Security middleware",
    "app.use(helmet());",
    "app.use(express.json({ limit: '10mb' }));",
    "",
    "// Rate limiting",
    "const limiter = rateLimit({",
    "  windowMs: 15 * 60 * 1000, // 15 minutes",
    "  max: 100 // limit each IP to 100 requests",
    "});",
    "app.use('/api/', limiter);",
    "",
    "// Routes",
    "app.get('/api/health', (req, res) => {",
    "  res.json({ status: 'OK', timestamp: Date.now() });",
    "});",
    "",
    "app.get('/api/users', async (req, res) => {",
    "  try {",
    "    const users = await User.findAll({",
    "      attributes: ['id', 'name', 'email'],",
    "      where: { active: true }",
    "    });",
    "    ",
    "    res.json({ ",
    "      success: true, ",
    "      data: users,",
    "      count: users.length",
    "    });",
    "  } catch (error) {",
    "    console.error('Database error:', error);",
    "    res.status(500).json({ ",
    "      error: 'Internal server error' ",
    "    });",
    "  }",
    "});",
    "",
    "const PORT = process.env.PORT || 3000;",
    "app.listen(PORT, () => {",
    "  console.log(`🚀 Server running on port ${PORT}`);",
    "});",
];

const CODE_CHAR_DELAY_MS: f64 = 30.0;
const COMMENT_CHAR_DELAY_MS: f64 = 20.0;
const JITTER_MS: f64 = 20.0;

/// One step of a code-window animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeEvent {
    /// Append a character typed on a comment (`//`) line or not.
    Char { ch: char, comment: bool },
    /// Append a newline and pause.
    LineEnd,
}

impl TypeEvent {
    /// Delay after this event. `jitter` in `0.0..1.0` adds up to 20 ms to
    /// character delays.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn delay_ms(self, jitter: f64) -> u32 {
        match self {
            Self::Char { comment, .. } => {
                let base = if comment { COMMENT_CHAR_DELAY_MS } else { CODE_CHAR_DELAY_MS };
                (base + jitter.clamp(0.0, 1.0) * JITTER_MS).round() as u32
            }
            Self::LineEnd => LINE_PAUSE_MS,
        }
    }
}

/// Lines of a code window to be typed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingScript {
    lines: Vec<String>,
}

impl TypingScript {
    /// Split `text` into lines, dropping one trailing newline.
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Self::default();
        }
        Self {
            lines: text.split('\n').map(|l| l.trim_end_matches('\r').to_owned()).collect(),
        }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| (*l).to_owned()).collect(),
        }
    }

    /// Script for a code window: its own `markup` text when it has any,
    /// otherwise [`CODE_LINES`].
    pub fn for_code_window(markup: &str) -> Self {
        if markup.trim().is_empty() {
            Self::from_lines(CODE_LINES)
        } else {
            Self::from_text(markup)
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Gutter text: `1\n2\n...N\n`.
    pub fn line_numbers(&self) -> String {
        (1..=self.lines.len()).map(|n| format!("{n}\n")).collect()
    }

    pub fn events(&self) -> impl Iterator<Item = TypeEvent> + '_ {
        self.lines.iter().flat_map(|line| {
            let comment = line.trim_start().starts_with("//");
            line.chars()
                .map(move |ch| TypeEvent::Char { ch, comment })
                .chain(std::iter::once(TypeEvent::LineEnd))
        })
    }
}
