use super::{Arg, ArgCursor, FormatError};

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alt: bool,
}

/// One parsed `%[flags][width][.precision][length]conversion` directive.
#[derive(Debug)]
pub(crate) struct Directive {
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl Directive {
    /// Parse the directive at the start of `spec` (the text right after `%`).
    ///
    /// `*` width and precision consume integer arguments from `args`.
    /// Returns the directive and the unparsed remainder of the template.
    pub(crate) fn parse<'t>(
        spec: &'t str,
        args: &mut ArgCursor,
    ) -> Result<(Directive, &'t str), FormatError> {
        let bytes = spec.as_bytes();
        let mut i = 0;
        let mut flags = Flags::default();

        while let Some(b) = bytes.get(i) {
            match b {
                b'-' => flags.left = true,
                b'+' => flags.plus = true,
                b' ' => flags.space = true,
                b'0' => flags.zero = true,
                b'#' => flags.alt = true,
                _ => break,
            }
            i += 1;
        }

        let width = if bytes.get(i) == Some(&b'*') {
            i += 1;
            let w = args.next_int()?;
            if w < 0 {
                flags.left = true;
            }
            Some(bounded(w.unsigned_abs())?)
        } else {
            let (w, len) = digits(&spec[i..])?;
            i += len;
            w
        };

        let precision = if bytes.get(i) == Some(&b'.') {
            i += 1;
            if bytes.get(i) == Some(&b'*') {
                i += 1;
                let p = args.next_int()?;
                // A negative precision behaves as if none was given.
                if p < 0 {
                    None
                } else {
                    Some(bounded(p.unsigned_abs())?)
                }
            } else {
                let (p, len) = digits(&spec[i..])?;
                i += len;
                Some(p.unwrap_or(0))
            }
        } else {
            None
        };

        while matches!(
            bytes.get(i),
            Some(b'h' | b'l' | b'L' | b'q' | b'j' | b'z' | b't')
        ) {
            i += 1;
        }

        let conversion = spec[i..]
            .chars()
            .next()
            .ok_or(FormatError::DanglingPercent)?;
        i += conversion.len_utf8();

        let directive = Directive {
            flags,
            width,
            precision,
            conversion,
        };
        Ok((directive, &spec[i..]))
    }

    /// Consume the directive's argument and append its rendering to `out`.
    pub(crate) fn render(&self, args: &mut ArgCursor, out: &mut String) -> Result<(), FormatError> {
        if !matches!(
            self.conversion,
            'd' | 'i' | 'u' | 'x' | 'X' | 'o' | 'c' | 's' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G'
        ) {
            return Err(FormatError::UnknownConversion(self.conversion));
        }

        let (index, arg) = args.next()?;
        let mismatch = || FormatError::Mismatch {
            index,
            conversion: self.conversion,
            found: arg.kind(),
        };

        match self.conversion {
            'd' | 'i' => {
                let v = match *arg {
                    Arg::Int(v) => v,
                    Arg::UInt(v) => v as i64,
                    Arg::Char(c) => i64::from(u32::from(c)),
                    _ => return Err(mismatch()),
                };
                self.render_signed(v, out);
            }
            'u' | 'x' | 'X' | 'o' => {
                let v = match *arg {
                    Arg::Int(v) => v as u64,
                    Arg::UInt(v) => v,
                    Arg::Char(c) => u64::from(u32::from(c)),
                    _ => return Err(mismatch()),
                };
                self.render_unsigned(v, out);
            }
            'c' => {
                let c = match *arg {
                    Arg::Char(c) => c,
                    Arg::Int(v) => u32::try_from(v)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(mismatch)?,
                    Arg::UInt(v) => u32::try_from(v)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(mismatch)?,
                    _ => return Err(mismatch()),
                };
                self.pad(out, "", "", &c.to_string(), false);
            }
            's' => {
                let text = arg.to_string();
                let text = match self.precision {
                    Some(p) => text.chars().take(p).collect(),
                    None => text,
                };
                self.pad(out, "", "", &text, false);
            }
            _ => {
                let v = match *arg {
                    Arg::Float(v) => v,
                    Arg::Int(v) => v as f64,
                    Arg::UInt(v) => v as f64,
                    _ => return Err(mismatch()),
                };
                self.render_float(v, out);
            }
        }

        Ok(())
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        }
    }

    /// Apply integer precision: minimum digit count, and `.0` prints zero as nothing.
    fn int_digits(&self, digits: String, is_zero: bool) -> String {
        match self.precision {
            Some(0) if is_zero => String::new(),
            Some(p) if digits.len() < p => format!("{}{digits}", "0".repeat(p - digits.len())),
            _ => digits,
        }
    }

    fn render_signed(&self, v: i64, out: &mut String) {
        let digits = self.int_digits(v.unsigned_abs().to_string(), v == 0);
        let zero_ok = self.precision.is_none();
        self.pad(out, self.sign(v < 0), "", &digits, zero_ok);
    }

    fn render_unsigned(&self, v: u64, out: &mut String) {
        let raw = match self.conversion {
            'x' => format!("{v:x}"),
            'X' => format!("{v:X}"),
            'o' => format!("{v:o}"),
            _ => v.to_string(),
        };
        let mut digits = self.int_digits(raw, v == 0);

        let prefix = match self.conversion {
            'x' if self.flags.alt && v != 0 => "0x",
            'X' if self.flags.alt && v != 0 => "0X",
            'o' if self.flags.alt && !digits.starts_with('0') => {
                digits.insert(0, '0');
                ""
            }
            _ => "",
        };

        let zero_ok = self.precision.is_none();
        self.pad(out, "", prefix, &digits, zero_ok);
    }

    fn render_float(&self, v: f64, out: &mut String) {
        let upper = self.conversion.is_ascii_uppercase();
        let negative = v.is_sign_negative() && !v.is_nan();
        let abs = v.abs();

        let body = if abs.is_nan() {
            "nan".to_string()
        } else if abs.is_infinite() {
            "inf".to_string()
        } else {
            let precision = self.precision.unwrap_or(6);
            match self.conversion.to_ascii_lowercase() {
                'f' => {
                    let mut s = format!("{abs:.precision$}");
                    if self.flags.alt && precision == 0 {
                        s.push('.');
                    }
                    s
                }
                'e' => {
                    let (mantissa, exp) = scientific(abs, precision);
                    let mantissa = if self.flags.alt && precision == 0 {
                        format!("{mantissa}.")
                    } else {
                        mantissa
                    };
                    join_exponent(&mantissa, exp)
                }
                _ => general(abs, self.precision, self.flags.alt),
            }
        };

        let body = if upper { body.to_ascii_uppercase() } else { body };
        self.pad(out, self.sign(negative), "", &body, abs.is_finite());
    }

    /// Pad `sign + prefix + body` to the directive width, counted in bytes.
    fn pad(&self, out: &mut String, sign: &str, prefix: &str, body: &str, zero_ok: bool) {
        let len = sign.len() + prefix.len() + body.len();
        let fill = self.width.map_or(0, |w| w.saturating_sub(len));

        if self.flags.left {
            out.push_str(sign);
            out.push_str(prefix);
            out.push_str(body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if self.flags.zero && zero_ok {
            out.push_str(sign);
            out.push_str(prefix);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(sign);
            out.push_str(prefix);
            out.push_str(body);
        }
    }
}

/// Leading decimal digits of `s`: their value (if any) and their byte length.
fn digits(s: &str) -> Result<(Option<usize>, usize), FormatError> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return Ok((None, 0));
    }
    let value: u64 = s[..len].parse().map_err(|_| FormatError::Overflow)?;
    Ok((Some(bounded(value)?), len))
}

/// Widths and precisions above `i32::MAX` are rejected, as printf does.
fn bounded(v: u64) -> Result<usize, FormatError> {
    if v > i32::MAX as u64 {
        return Err(FormatError::Overflow);
    }
    usize::try_from(v).map_err(|_| FormatError::Overflow)
}

/// Mantissa and decimal exponent of a finite, non-negative `v`.
fn scientific(v: f64, precision: usize) -> (String, i32) {
    let s = format!("{v:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// `1.5` and `2` become `1.5e+02`: signed, at least two exponent digits.
fn join_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

/// `%g`: shortest of `%f` and `%e` at `precision` significant digits.
fn general(v: f64, precision: Option<usize>, alt: bool) -> String {
    let p = match precision {
        None => 6,
        Some(0) => 1,
        Some(p) => p,
    };

    let (mantissa, exp) = scientific(v, p - 1);
    let fixed = exp >= -4 && i64::from(exp) < p as i64;

    let s = if fixed {
        let decimals = (p as i64 - 1 - i64::from(exp)).max(0) as usize;
        format!("{v:.decimals$}")
    } else {
        join_exponent(&mantissa, exp)
    };

    if alt {
        return s;
    }

    match s.split_once('e') {
        Some((m, e)) => format!("{}e{e}", trim_fraction(m)),
        None => trim_fraction(&s).to_string(),
    }
}

/// Drop trailing fractional zeros and a bare decimal point.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
