//! printf-style template expansion.
//!
//! Templates are trusted, caller-controlled strings. Arguments travel as a
//! typed slice of [`Arg`], so a directive that does not match its argument is
//! reported as a [`FormatError`] instead of reading garbage.

mod directive;

use std::fmt;

use directive::Directive;

// ── Arguments ───────────────────────────────────────────────────────────────

/// A single value substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl Arg<'_> {
    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "integer",
            Arg::UInt(_) => "unsigned integer",
            Arg::Float(_) => "float",
            Arg::Char(_) => "char",
            Arg::Str(_) => "string",
        }
    }
}

/// Natural text of the argument, as `%s` renders it.
impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(v) => write!(f, "{v}"),
            Arg::UInt(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Char(c) => write!(f, "{c}"),
            Arg::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(v: $t) -> Self {
                    Arg::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Str(s.as_str())
    }
}

// ── Errors ──────────────────────────────────────────────────────────────────

/// Why a template could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A directive needed argument number `index` (zero-based) but the list ran out.
    MissingArgument { index: usize },
    /// The argument at `index` cannot be rendered by `conversion`.
    Mismatch {
        index: usize,
        conversion: char,
        found: &'static str,
    },
    UnknownConversion(char),
    /// The template ends in the middle of a directive.
    DanglingPercent,
    /// A width or precision is above `i32::MAX`.
    Overflow,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingArgument { index } => {
                write!(f, "missing argument #{} for template directive", index + 1)
            }
            FormatError::Mismatch {
                index,
                conversion,
                found,
            } => write!(
                f,
                "argument #{} is a {found}, which '%{conversion}' cannot print",
                index + 1
            ),
            FormatError::UnknownConversion(c) => write!(f, "unknown conversion '%{c}'"),
            FormatError::DanglingPercent => write!(f, "template ends with an incomplete '%' directive"),
            FormatError::Overflow => write!(f, "width or precision is too large"),
        }
    }
}

impl std::error::Error for FormatError {}

// ── Expansion ───────────────────────────────────────────────────────────────

/// Walks the argument list left to right as directives consume it.
pub(crate) struct ArgCursor<'s, 'a> {
    args: &'s [Arg<'a>],
    next: usize,
}

impl<'s, 'a> ArgCursor<'s, 'a> {
    fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    pub(crate) fn next(&mut self) -> Result<(usize, &'s Arg<'a>), FormatError> {
        let index = self.next;
        let arg = self
            .args
            .get(index)
            .ok_or(FormatError::MissingArgument { index })?;
        self.next += 1;
        Ok((index, arg))
    }

    /// Next argument as an integer, for `*` width and precision.
    pub(crate) fn next_int(&mut self) -> Result<i64, FormatError> {
        match self.next()? {
            (_, Arg::Int(v)) => Ok(*v),
            (_, Arg::UInt(v)) => Ok(i64::try_from(*v).unwrap_or(i64::MAX)),
            (index, other) => Err(FormatError::Mismatch {
                index,
                conversion: '*',
                found: other.kind(),
            }),
        }
    }
}

/// Expand `template`, substituting `args` for its `%` directives.
///
/// Supports `%%`, flags `-+ 0#`, width and precision (literal or `*`),
/// ignored length modifiers, and the conversions `d i u x X o c s f F e E g G`.
/// Arguments left over after the last directive are ignored.
///
/// Widths count bytes, as printf does. A `%s` precision counts chars so a
/// multi-byte character is never cut in half. Widths and precisions above
/// `i32::MAX` fail with [`FormatError::Overflow`].
pub fn expand(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut cursor = ArgCursor::new(args);
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        if let Some(after) = rest.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let (directive, remaining) = Directive::parse(rest, &mut cursor)?;
        directive.render(&mut cursor, &mut out)?;
        rest = remaining;
    }

    out.push_str(rest);
    Ok(out)
}
