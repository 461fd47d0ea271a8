// ── ANSI escape codes ───────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";

/// Cancels every active color and style.
pub const RESET: &str = "\x1b[0m";

// ── Typed names ─────────────────────────────────────────────────────────────

/// One of the eight standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorName {
    pub const ALL: [ColorName; 8] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
    ];

    /// Foreground escape code.
    pub const fn fg(self) -> &'static str {
        match self {
            ColorName::Black => BLACK,
            ColorName::Red => RED,
            ColorName::Green => GREEN,
            ColorName::Yellow => YELLOW,
            ColorName::Blue => BLUE,
            ColorName::Magenta => MAGENTA,
            ColorName::Cyan => CYAN,
            ColorName::White => WHITE,
        }
    }

    /// Background escape code.
    pub const fn bg(self) -> &'static str {
        match self {
            ColorName::Black => BG_BLACK,
            ColorName::Red => BG_RED,
            ColorName::Green => BG_GREEN,
            ColorName::Yellow => BG_YELLOW,
            ColorName::Blue => BG_BLUE,
            ColorName::Magenta => BG_MAGENTA,
            ColorName::Cyan => BG_CYAN,
            ColorName::White => BG_WHITE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
        }
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Text attributes that combine with any color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Dim,
    Underline,
    Blink,
    Reverse,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Bold,
        Style::Dim,
        Style::Underline,
        Style::Blink,
        Style::Reverse,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Style::Bold => BOLD,
            Style::Dim => DIM,
            Style::Underline => UNDERLINE,
            Style::Blink => BLINK,
            Style::Reverse => REVERSE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Underline => "underline",
            Style::Blink => "blink",
            Style::Reverse => "reverse",
        }
    }
}

// ── String helpers ──────────────────────────────────────────────────────────

/// Wrap `s` in `code` and a trailing reset.
pub fn paint(code: &str, s: &str) -> String {
    format!("{code}{s}{RESET}")
}

pub fn bold(s: &str) -> String {
    paint(BOLD, s)
}

pub fn dim(s: &str) -> String {
    paint(DIM, s)
}

pub fn green(s: &str) -> String {
    paint(GREEN, s)
}

pub fn cyan(s: &str) -> String {
    paint(CYAN, s)
}

pub fn red(s: &str) -> String {
    paint(RED, s)
}
