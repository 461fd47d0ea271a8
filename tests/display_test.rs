//! Tests for display utilities: escape codes, ANSI-aware lengths, padding, escaping.

use termtint::colors::{
    BG_BLACK, BG_WHITE, BLACK, BLINK, BOLD, ColorName, DIM, RESET, REVERSE, Style, UNDERLINE,
    WHITE, bold, cyan, dim, green, paint, red,
};
use termtint::util::{escape_visible, pad_left, pad_right, strip_ansi, unescape, visible_len};

// ── Escape codes ────────────────────────────────────────────────────────────

#[test]
fn foreground_codes_are_30_to_37() {
    for (i, color) in ColorName::ALL.iter().enumerate() {
        assert_eq!(color.fg(), format!("\x1b[{}m", 30 + i));
    }
    assert_eq!(BLACK, "\x1b[30m");
    assert_eq!(WHITE, "\x1b[37m");
}

#[test]
fn background_codes_are_40_to_47() {
    for (i, color) in ColorName::ALL.iter().enumerate() {
        assert_eq!(color.bg(), format!("\x1b[{}m", 40 + i));
    }
    assert_eq!(BG_BLACK, "\x1b[40m");
    assert_eq!(BG_WHITE, "\x1b[47m");
}

#[test]
fn style_codes() {
    assert_eq!(RESET, "\x1b[0m");
    assert_eq!(BOLD, "\x1b[1m");
    assert_eq!(DIM, "\x1b[2m");
    assert_eq!(UNDERLINE, "\x1b[4m");
    assert_eq!(BLINK, "\x1b[5m");
    assert_eq!(REVERSE, "\x1b[7m");
    assert_eq!(Style::Reverse.code(), REVERSE);
    assert_eq!(Style::ALL.len(), 5);
}

#[test]
fn color_names() {
    assert_eq!(ColorName::Magenta.to_string(), "magenta");
    assert_eq!(ColorName::ALL.map(ColorName::name).join(","), "black,red,green,yellow,blue,magenta,cyan,white");
}

#[test]
fn paint_wraps_in_reset() {
    assert_eq!(paint(REVERSE, "x"), "\x1b[7mx\x1b[0m");
    assert_eq!(red("e"), "\x1b[31me\x1b[0m");
    assert_eq!(bold("b"), "\x1b[1mb\x1b[0m");
}

// ── visible_len ─────────────────────────────────────────────────────────────

#[test]
fn visible_len_plain_text() {
    assert_eq!(visible_len("hello"), 5);
    assert_eq!(visible_len(""), 0);
    assert_eq!(visible_len("abc def"), 7);
}

#[test]
fn visible_len_with_ansi() {
    assert_eq!(visible_len(&bold("hi")), 2);
    assert_eq!(visible_len(&cyan("Rust")), 4);
    assert_eq!(visible_len(&dim("faded")), 5);
    assert_eq!(visible_len(&format!("hello {}", cyan("world"))), 11);
}

#[test]
fn visible_len_counts_chars_not_bytes() {
    assert_eq!(visible_len(&green("✓")), 1);
}

// ── strip_ansi ──────────────────────────────────────────────────────────────

#[test]
fn strip_ansi_removes_sequences() {
    assert_eq!(strip_ansi("plain"), "plain");
    assert_eq!(strip_ansi(&format!("{} {}", red("a"), green("b"))), "a b");
    assert_eq!(
        strip_ansi("\x1b[1m\x1b[32m[SUCCESS]\x1b[0mProcessed 10 items.\n"),
        "[SUCCESS]Processed 10 items.\n"
    );
}

#[test]
fn strip_ansi_drops_unterminated_escape() {
    assert_eq!(strip_ansi("ok\x1b[31"), "ok");
}

// ── Padding ─────────────────────────────────────────────────────────────────

#[test]
fn pad_right_adds_spaces() {
    assert_eq!(pad_right("hi", 5), "hi   ");
    assert_eq!(pad_right("hello", 5), "hello");
    assert_eq!(pad_right("toolong", 3), "toolong");
}

#[test]
fn pad_right_ignores_ansi() {
    let padded = pad_right(&cyan("ab"), 4);
    assert_eq!(visible_len(&padded), 4);
    assert!(padded.ends_with("\x1b[0m  "));
}

#[test]
fn pad_left_adds_spaces() {
    assert_eq!(pad_left("42", 5), "   42");
    assert_eq!(pad_left("12345", 3), "12345");
    let padded = pad_left(&red("x"), 3);
    assert!(padded.starts_with("  \x1b[31m"));
}

// ── Escaping ────────────────────────────────────────────────────────────────

#[test]
fn escape_visible_shows_escape_byte() {
    assert_eq!(escape_visible(RESET), "\\x1b[0m");
    assert_eq!(escape_visible("plain"), "plain");
}

#[test]
fn unescape_shell_sequences() {
    assert_eq!(unescape(r"line\n"), "line\n");
    assert_eq!(unescape(r"a\tb"), "a\tb");
    assert_eq!(unescape(r"\e[1mbold"), "\x1b[1mbold");
    assert_eq!(unescape(r"back\\slash"), "back\\slash");
    assert_eq!(unescape(r"keep \q"), "keep \\q");
    assert_eq!(unescape("trailing\\"), "trailing\\");
    assert_eq!(unescape("100%"), "100%");
}
