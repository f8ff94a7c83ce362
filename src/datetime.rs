//! Translation of moment-style timestamp patterns to chrono format strings.
//!
//! Settings keep the token grammar users already know (`YYYY-MM-DD[T]HHmm`);
//! this module compiles the supported token set to strftime specifiers and
//! rejects anything it does not recognize, so a bad pattern is caught at
//! input time instead of mid-render.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ChangelogError, Result};

// Alternatives are ordered longest-first per letter so e.g. "MM" is not
// consumed as two "M" tokens. The trailing `.` captures any other single
// character for literal passthrough.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\[([^\]]*)\]|YYYY|YY|MMMM|MMM|MM|M|dddd|ddd|DD|D|HH|H|hh|h|mm|m|ss|s|A|a|.",
    )
    .expect("token pattern is valid")
});

/// Compiles a moment-style pattern into a chrono strftime string.
///
/// Bracketed segments are emitted literally; an alphabetic character outside
/// brackets that is not a recognized token is an error.
pub fn compile(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    for caps in TOKEN_RE.captures_iter(pattern) {
        if let Some(literal) = caps.get(1) {
            push_literal(&mut out, literal.as_str());
            continue;
        }
        let token = match caps.get(0) {
            Some(m) => m.as_str(),
            None => continue,
        };
        match token {
            "YYYY" => out.push_str("%Y"),
            "YY" => out.push_str("%y"),
            "MMMM" => out.push_str("%B"),
            "MMM" => out.push_str("%b"),
            "MM" => out.push_str("%m"),
            "M" => out.push_str("%-m"),
            "dddd" => out.push_str("%A"),
            "ddd" => out.push_str("%a"),
            "DD" => out.push_str("%d"),
            "D" => out.push_str("%-d"),
            "HH" => out.push_str("%H"),
            "H" => out.push_str("%-H"),
            "hh" => out.push_str("%I"),
            "h" => out.push_str("%-I"),
            "mm" => out.push_str("%M"),
            "m" => out.push_str("%-M"),
            "ss" => out.push_str("%S"),
            "s" => out.push_str("%-S"),
            "A" => out.push_str("%p"),
            "a" => out.push_str("%P"),
            other => {
                if other.chars().any(|c| c.is_ascii_alphabetic()) {
                    return Err(ChangelogError::InvalidFormat(pattern.to_string()));
                }
                push_literal(&mut out, other);
            }
        }
    }
    Ok(out)
}

/// Formats a timestamp through a moment-style pattern.
pub fn format_timestamp(timestamp: DateTime<Local>, pattern: &str) -> Result<String> {
    let fmt = compile(pattern)?;
    Ok(timestamp.format(&fmt).to_string())
}

/// Checks that a pattern can format a sample timestamp.
pub fn validate(pattern: &str) -> Result<()> {
    format_timestamp(Local::now(), pattern).map(|_| ())
}

fn push_literal(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}
