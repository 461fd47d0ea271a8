//! Tests for the printer: exact bytes for tags, raw colors, the
//! reset-before-newline rule, safe printing, and error behavior.

use std::io::{self, Write};
use std::sync::Mutex;

use termtint::colors::{BG_WHITE, BLUE, BOLD, CYAN, GREEN, MAGENTA, RED, RESET, YELLOW};
use termtint::config::TintConfig;
use termtint::tui::printer::{TEMPLATE_LIMIT, render_colored, render_tagged};
use termtint::{
    Arg, FormatError, PrintError, Printer, Stream, Tag, write_safe, write_safe_colored,
};

type Capture = Printer<Vec<u8>, Vec<u8>>;
type Helper = fn(&mut Capture, &str, &[Arg]) -> Result<(), PrintError>;

fn capture() -> Capture {
    Printer::new(Vec::new(), Vec::new())
}

fn outputs(printer: Capture) -> (String, String) {
    let (out, err) = printer.into_inner();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

// ── Semantic tags ───────────────────────────────────────────────────────────

#[test]
fn success_substitutes_and_colors_only_the_tag() {
    let mut p = capture();
    p.success("Processed %d items.\n", &[Arg::from(10)]).unwrap();
    let (out, err) = outputs(p);
    assert_eq!(out, "\x1b[1m\x1b[32m[SUCCESS]\x1b[0mProcessed 10 items.\n");
    assert!(err.is_empty());
}

#[test]
fn error_goes_to_stderr() {
    let mut p = capture();
    p.error("Failed to open file: %s\n", &[Arg::from("data.txt")])
        .unwrap();
    let (out, err) = outputs(p);
    assert!(out.is_empty());
    assert_eq!(
        err,
        format!("{BOLD}{RED}[ERROR]{RESET}Failed to open file: data.txt\n")
    );
}

#[test]
fn debug_goes_to_stderr() {
    let mut p = capture();
    p.debug("Variable x = %d\n", &[Arg::from(42)]).unwrap();
    let (out, err) = outputs(p);
    assert!(out.is_empty());
    assert_eq!(err, format!("{BOLD}{YELLOW}[DEBUG]{RESET}Variable x = 42\n"));
}

#[test]
fn warning_goes_to_stderr() {
    let mut p = capture();
    p.warning("ffmpeg not found\n", &[]).unwrap();
    let (out, err) = outputs(p);
    assert!(out.is_empty());
    assert_eq!(err, format!("{BOLD}{MAGENTA}[WARNING]{RESET}ffmpeg not found\n"));
}

#[test]
fn tag_body_gets_no_trailing_reset() {
    let mut p = capture();
    p.success("done", &[]).unwrap();
    let (out, _) = outputs(p);
    assert!(out.ends_with("[SUCCESS]\x1b[0mdone"));
    assert_eq!(out.matches(RESET).count(), 1);
}

#[test]
fn every_tag_is_followed_by_reset() {
    for tag in [Tag::Success, Tag::Error, Tag::Debug, Tag::Warning] {
        let rendered = render_tagged(tag, "", "body %s", &[Arg::from("x")]).unwrap();
        let head = format!("{}{}{RESET}", tag.style(), tag.label());
        assert!(rendered.starts_with(&head), "{tag:?}: {rendered:?}");
        assert_eq!(&rendered[head.len()..], "body x");
    }
}

#[test]
fn tag_streams() {
    assert_eq!(Tag::Success.stream(), Stream::Stdout);
    assert_eq!(Tag::Error.stream(), Stream::Stderr);
    assert_eq!(Tag::Debug.stream(), Stream::Stderr);
    assert_eq!(Tag::Warning.stream(), Stream::Stderr);
}

#[test]
fn tag_separator_sits_between_reset_and_body() {
    let mut p = capture().with_tag_separator(" ");
    p.success("ok\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{BOLD}{GREEN}[SUCCESS]{RESET} ok\n"));
}

// ── Raw colors ──────────────────────────────────────────────────────────────

#[test]
fn red_puts_reset_before_newline() {
    let mut p = capture();
    p.red("Critical error detected!\n", &[]).unwrap();
    let (out, err) = outputs(p);
    assert_eq!(out, "\x1b[1m\x1b[31mCritical error detected!\x1b[0m\n");
    assert!(err.is_empty());
}

#[test]
fn every_helper_uses_bold_and_its_color() {
    let helpers: [(Helper, &str); 6] = [
        (Capture::yellow, YELLOW),
        (Capture::red, RED),
        (Capture::green, GREEN),
        (Capture::blue, BLUE),
        (Capture::cyan, CYAN),
        (Capture::magenta, MAGENTA),
    ];

    for (helper, color) in helpers {
        let mut p = capture();
        helper(&mut p, "Information: %s\n", &[Arg::from("System started")]).unwrap();
        helper(&mut p, "count=%d", &[Arg::from(3)]).unwrap();
        let (out, err) = outputs(p);
        assert_eq!(
            out,
            format!(
                "{BOLD}{color}Information: System started{RESET}\n{BOLD}{color}count=3{RESET}"
            )
        );
        assert!(err.is_empty());
    }
}

#[test]
fn without_terminator_reset_goes_last() {
    let mut p = capture();
    p.blue("Status: %s", &[Arg::from("ok")]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{BOLD}{BLUE}Status: ok{RESET}"));
}

#[test]
fn newline_from_an_argument_does_not_move_reset() {
    let mut p = capture();
    p.green("%s", &[Arg::from("line\n")]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{BOLD}{GREEN}line\n{RESET}"));
}

#[test]
fn bare_newline_template() {
    let mut p = capture();
    p.cyan("\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{BOLD}{CYAN}{RESET}\n"));
}

#[test]
fn only_the_last_newline_is_moved() {
    let mut p = capture();
    p.magenta("a\n\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{BOLD}{MAGENTA}a\n{RESET}\n"));
}

#[test]
fn crlf_keeps_carriage_return_inside_color() {
    let mut p = capture();
    p.red("done\r\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{BOLD}{RED}done\r{RESET}\n"));
}

#[test]
fn style_codes_inside_template_pass_through() {
    let mut p = capture();
    p.yellow(&format!("{BOLD}This is a bold yellow message.\n"), &[])
        .unwrap();
    p.red(&format!("{BG_WHITE}Red text on a white background.\n"), &[])
        .unwrap();
    let (out, _) = outputs(p);
    assert_eq!(
        out,
        format!(
            "{BOLD}{YELLOW}{BOLD}This is a bold yellow message.{RESET}\n\
             {BOLD}{RED}{BG_WHITE}Red text on a white background.{RESET}\n"
        )
    );
}

#[test]
fn colored_accepts_any_prefix() {
    let mut p = capture();
    p.colored(GREEN, "plain %d%%\n", &[Arg::from(50)]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, format!("{GREEN}plain 50%{RESET}\n"));
}

// ── Template limit ──────────────────────────────────────────────────────────

#[test]
fn oversized_template_skips_the_newline_rule() {
    let mut p = capture().with_template_limit(4);
    p.red("abcd\n", &[]).unwrap();
    p.red("abc\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(
        out,
        format!("{BOLD}{RED}abcd\n{RESET}{BOLD}{RED}abc{RESET}\n")
    );
}

#[test]
fn bare_newline_ignores_zero_limit() {
    let mut p = capture().with_template_limit(0);
    p.green("\n", &[]).unwrap();
    p.green("x\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(
        out,
        format!("{BOLD}{GREEN}{RESET}\n{BOLD}{GREEN}x\n{RESET}")
    );
}

#[test]
fn default_limit_is_8192() {
    assert_eq!(TEMPLATE_LIMIT, 8192);
    assert_eq!(capture().template_limit(), 8192);

    let under = format!("{}\n", "x".repeat(8191));
    let rendered = render_colored(RED, &under, &[], TEMPLATE_LIMIT).unwrap();
    assert!(rendered.ends_with(&format!("x{RESET}\n")));

    let over = format!("{}\n", "x".repeat(8192));
    let rendered = render_colored(RED, &over, &[], TEMPLATE_LIMIT).unwrap();
    assert!(rendered.ends_with(&format!("x\n{RESET}")));
    assert_eq!(rendered.len(), RED.len() + 8193 + RESET.len());
}

#[test]
fn configured_applies_saved_settings() {
    let config = TintConfig {
        template_limit: 2,
        default_color: None,
        tag_separator: " ".to_string(),
    };
    let mut p = capture().configured(&config);
    assert_eq!(p.template_limit(), 2);

    p.success("hi\n", &[]).unwrap();
    p.green("hi\n", &[]).unwrap();
    let (out, _) = outputs(p);
    assert_eq!(
        out,
        format!("{BOLD}{GREEN}[SUCCESS]{RESET} hi\n{BOLD}{GREEN}hi\n{RESET}")
    );
}

// ── Template errors ─────────────────────────────────────────────────────────

#[test]
fn bad_template_writes_nothing() {
    let mut p = capture();
    let err = p.red("%d items\n", &[]).unwrap_err();
    assert!(matches!(
        err,
        PrintError::Format(FormatError::MissingArgument { index: 0 })
    ));

    let err = p.success("%d", &[Arg::from("ten")]).unwrap_err();
    assert!(matches!(
        err,
        PrintError::Format(FormatError::Mismatch { conversion: 'd', .. })
    ));

    let (out, err) = outputs(p);
    assert!(out.is_empty());
    assert!(err.is_empty());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_reported() {
    let mut p = Printer::new(BrokenPipe, Vec::new());
    let err = p.green("hello\n", &[]).unwrap_err();
    assert!(matches!(err, PrintError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(err.to_string().starts_with("IO error"));

    assert!(p.safe("text").is_err());
}

// ── Safe printing ───────────────────────────────────────────────────────────

#[test]
fn safe_colored_never_interprets_percent() {
    let mut p = capture();
    p.safe_colored(Stream::Stdout, GREEN, "50% off").unwrap();
    let (out, _) = outputs(p);
    assert_eq!(out, "\x1b[32m50% off\x1b[0m");
}

#[test]
fn safe_colored_honors_stream() {
    let mut p = capture();
    p.safe_colored(Stream::Stderr, RED, "%s %d %n").unwrap();
    let (out, err) = outputs(p);
    assert!(out.is_empty());
    assert_eq!(err, format!("{RED}%s %d %n{RESET}"));
}

#[test]
fn safe_is_verbatim_and_uncolored() {
    let mut p = capture();
    p.safe("100% done %s %d\n").unwrap();
    let (out, err) = outputs(p);
    assert_eq!(out, "100% done %s %d\n");
    assert!(err.is_empty());
}

#[test]
fn absent_arguments_write_nothing() {
    let mut buf: Vec<u8> = Vec::new();
    write_safe_colored(Some(&mut buf), None, Some("x")).unwrap();
    write_safe_colored(Some(&mut buf), Some(RED), None).unwrap();
    write_safe_colored(None::<&mut Vec<u8>>, Some(RED), Some("x")).unwrap();
    write_safe(Some(&mut buf), None).unwrap();
    write_safe(None::<&mut Vec<u8>>, Some("x")).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn present_arguments_write() {
    let mut buf: Vec<u8> = Vec::new();
    write_safe_colored(Some(&mut buf), Some(CYAN), Some("a%%b")).unwrap();
    write_safe(Some(&mut buf), Some(" 5%")).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), format!("{CYAN}a%%b{RESET} 5%"));
}

// ── Shared use ──────────────────────────────────────────────────────────────

#[test]
fn mutex_keeps_lines_whole() {
    let printer = Mutex::new(capture());

    std::thread::scope(|s| {
        for worker in 0..4 {
            let printer = &printer;
            s.spawn(move || {
                for i in 0..25 {
                    printer
                        .lock()
                        .unwrap()
                        .green("worker %d line %d\n", &[Arg::from(worker), Arg::from(i)])
                        .unwrap();
                }
            });
        }
    });

    let (out, _) = outputs(printer.into_inner().unwrap());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 100);
    for line in lines {
        assert!(line.starts_with(&format!("{BOLD}{GREEN}worker ")), "{line:?}");
        assert!(line.ends_with(RESET), "{line:?}");
    }
}

// ── Process stdio ───────────────────────────────────────────────────────────

#[test]
fn stdio_shortcuts_do_not_panic() {
    termtint::print_success!("macro %d %s\n", 1, "two");
    termtint::print_debug!("debug %.1f\n", 0.5);
    termtint::print_warning!("warn\n");
    termtint::print_cyan!("cyan %c\n", 'x');
    // Bad templates are dropped silently.
    termtint::print_error!("%d\n");
    termtint::print_red!("%s %s\n", "only one");
    termtint::print_safe("100% safe\n");
    termtint::print_safe_colored(Stream::Stdout, GREEN, "50% off\n");
}
