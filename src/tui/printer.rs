use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

use crate::config::TintConfig;
use crate::template::{self, Arg, FormatError};

use super::colors::RESET;

/// Templates at least this long (minus their terminator) skip the
/// reset-before-newline rule.
pub const TEMPLATE_LIMIT: usize = 8192;

const BOLD_GREEN: &str = "\x1b[1m\x1b[32m";
const BOLD_RED: &str = "\x1b[1m\x1b[31m";
const BOLD_YELLOW: &str = "\x1b[1m\x1b[33m";
const BOLD_BLUE: &str = "\x1b[1m\x1b[34m";
const BOLD_MAGENTA: &str = "\x1b[1m\x1b[35m";
const BOLD_CYAN: &str = "\x1b[1m\x1b[36m";

/// Which process stream a call writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Semantic message kinds, each with a fixed tag, style, and stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Success,
    Error,
    Debug,
    Warning,
}

impl Tag {
    pub const fn label(self) -> &'static str {
        match self {
            Tag::Success => "[SUCCESS]",
            Tag::Error => "[ERROR]",
            Tag::Debug => "[DEBUG]",
            Tag::Warning => "[WARNING]",
        }
    }

    pub const fn style(self) -> &'static str {
        match self {
            Tag::Success => BOLD_GREEN,
            Tag::Error => BOLD_RED,
            Tag::Debug => BOLD_YELLOW,
            Tag::Warning => BOLD_MAGENTA,
        }
    }

    pub const fn stream(self) -> Stream {
        match self {
            Tag::Success => Stream::Stdout,
            Tag::Error | Tag::Debug | Tag::Warning => Stream::Stderr,
        }
    }
}

// ── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum PrintError {
    Format(FormatError),
    Io(io::Error),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::Format(err) => write!(f, "Bad template: {}", err),
            PrintError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrintError::Format(err) => Some(err),
            PrintError::Io(err) => Some(err),
        }
    }
}

impl From<FormatError> for PrintError {
    fn from(err: FormatError) -> Self {
        PrintError::Format(err)
    }
}

impl From<io::Error> for PrintError {
    fn from(err: io::Error) -> Self {
        PrintError::Io(err)
    }
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// `<style>[TAG]<reset><separator><expanded template>`.
///
/// Only the tag is colored; the message body gets no reset of its own.
pub fn render_tagged(
    tag: Tag,
    separator: &str,
    template: &str,
    args: &[Arg],
) -> Result<String, FormatError> {
    let body = template::expand(template, args)?;
    Ok(format!("{}{}{RESET}{separator}{body}", tag.style(), tag.label()))
}

/// `<prefix><expanded template><reset>`, with the reset moved in front of a
/// single trailing `\n` in the template.
///
/// The terminator is detected on the literal template, before expansion, so
/// a newline produced by an argument never moves the reset. Templates whose
/// body is not shorter than `limit` bytes are expanded whole; a bare `"\n"`
/// always gets its reset first.
pub fn render_colored(
    prefix: &str,
    template: &str,
    args: &[Arg],
    limit: usize,
) -> Result<String, FormatError> {
    let mut out = String::from(prefix);

    match template.strip_suffix('\n') {
        Some(body) if body.is_empty() || body.len() < limit => {
            out.push_str(&template::expand(body, args)?);
            out.push_str(RESET);
            out.push('\n');
        }
        _ => {
            out.push_str(&template::expand(template, args)?);
            out.push_str(RESET);
        }
    }

    Ok(out)
}

/// `<color><text><reset>` with no `%` interpretation.
pub fn render_safe_colored(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

// ── Printer ─────────────────────────────────────────────────────────────────

/// Colored output over two injected sinks standing in for stdout and stderr.
///
/// Every call renders its whole output first and then issues a single write,
/// so a template error leaves the sink untouched. Concurrent callers sharing
/// a stream still need their own lock around the printer.
#[derive(Debug)]
pub struct Printer<O: Write, E: Write> {
    out: O,
    err: E,
    template_limit: usize,
    tag_separator: String,
}

impl Printer<Stdout, Stderr> {
    /// A printer bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Printer<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            template_limit: TEMPLATE_LIMIT,
            tag_separator: String::new(),
        }
    }

    pub fn with_template_limit(mut self, limit: usize) -> Self {
        self.template_limit = limit;
        self
    }

    /// Text written between a tag's reset and the message body.
    pub fn with_tag_separator(mut self, separator: impl Into<String>) -> Self {
        self.tag_separator = separator.into();
        self
    }

    /// Apply the user's saved settings.
    pub fn configured(self, config: &TintConfig) -> Self {
        self.with_template_limit(config.template_limit)
            .with_tag_separator(config.tag_separator.clone())
    }

    pub fn template_limit(&self) -> usize {
        self.template_limit
    }

    fn sink(&mut self, stream: Stream) -> &mut dyn Write {
        match stream {
            Stream::Stdout => &mut self.out,
            Stream::Stderr => &mut self.err,
        }
    }

    // ── Semantic tags ───────────────────────────────────────────────────────

    pub fn tagged(&mut self, tag: Tag, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        let rendered = render_tagged(tag, &self.tag_separator, template, args)?;
        self.sink(tag.stream()).write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Bold-green `[SUCCESS]` to stdout.
    pub fn success(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.tagged(Tag::Success, template, args)
    }

    /// Bold-red `[ERROR]` to stderr.
    pub fn error(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.tagged(Tag::Error, template, args)
    }

    /// Bold-yellow `[DEBUG]` to stderr.
    pub fn debug(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.tagged(Tag::Debug, template, args)
    }

    /// Bold-magenta `[WARNING]` to stderr.
    pub fn warning(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.tagged(Tag::Warning, template, args)
    }

    // ── Raw colors ──────────────────────────────────────────────────────────

    /// Write `prefix`, the expanded template, and a reset to stdout.
    pub fn colored(&mut self, prefix: &str, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        let rendered = render_colored(prefix, template, args, self.template_limit)?;
        self.out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    pub fn yellow(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.colored(BOLD_YELLOW, template, args)
    }

    pub fn red(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.colored(BOLD_RED, template, args)
    }

    pub fn green(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.colored(BOLD_GREEN, template, args)
    }

    pub fn blue(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.colored(BOLD_BLUE, template, args)
    }

    pub fn cyan(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.colored(BOLD_CYAN, template, args)
    }

    pub fn magenta(&mut self, template: &str, args: &[Arg]) -> Result<(), PrintError> {
        self.colored(BOLD_MAGENTA, template, args)
    }

    // ── Untrusted text ──────────────────────────────────────────────────────

    /// `color + text + reset` to `stream`. `%` in `text` is printed as is.
    pub fn safe_colored(&mut self, stream: Stream, color: &str, text: &str) -> io::Result<()> {
        self.sink(stream)
            .write_all(render_safe_colored(color, text).as_bytes())
    }

    /// `text` verbatim to stdout.
    pub fn safe(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

// ── Optional-argument writers ───────────────────────────────────────────────

/// Like [`Printer::safe_colored`] for callers whose stream, color, or text may
/// be absent. Writes nothing unless all three are present.
pub fn write_safe_colored<W: Write + ?Sized>(
    stream: Option<&mut W>,
    color: Option<&str>,
    text: Option<&str>,
) -> io::Result<()> {
    match (stream, color, text) {
        (Some(stream), Some(color), Some(text)) => {
            stream.write_all(render_safe_colored(color, text).as_bytes())
        }
        _ => Ok(()),
    }
}

/// Writes `text` verbatim, or nothing if either argument is absent.
pub fn write_safe<W: Write + ?Sized>(stream: Option<&mut W>, text: Option<&str>) -> io::Result<()> {
    match (stream, text) {
        (Some(stream), Some(text)) => stream.write_all(text.as_bytes()),
        _ => Ok(()),
    }
}

// ── Process stdio shortcuts ─────────────────────────────────────────────────
//
// These never report failure: a bad template or a closed stream drops the
// output silently.

pub fn print_success(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().success(template, args);
}

pub fn print_error(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().error(template, args);
}

pub fn print_debug(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().debug(template, args);
}

pub fn print_warning(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().warning(template, args);
}

pub fn print_yellow(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().yellow(template, args);
}

pub fn print_red(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().red(template, args);
}

pub fn print_green(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().green(template, args);
}

pub fn print_blue(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().blue(template, args);
}

pub fn print_cyan(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().cyan(template, args);
}

pub fn print_magenta(template: &str, args: &[Arg]) {
    let _ = Printer::stdio().magenta(template, args);
}

pub fn print_safe_colored(stream: Stream, color: &str, text: &str) {
    let _ = Printer::stdio().safe_colored(stream, color, text);
}

pub fn print_safe(text: &str) {
    let _ = Printer::stdio().safe(text);
}
