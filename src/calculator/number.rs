//! Number parsing and stringification for calculator operands.
//!
//! Operands are kept as strings in the calculator state. These helpers turn
//! them into `f64` values for arithmetic and turn results back into the
//! canonical shortest decimal form shown on the display.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches the longest numeric prefix of an operand.
    /// Allows: optional sign, `Infinity`, digits with an optional fraction,
    /// a bare fraction, and an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)"
    ).unwrap();

    /// Matches an operand that is numeric in its entirety.
    static ref NUMERIC_WHOLE: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$"
    ).unwrap();
}

/// Parse the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped. Trailing garbage is ignored, so `"12abc"`
/// parses as `12`. Returns `None` when no numeric prefix exists.
pub fn parse_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let matched = NUMERIC_PREFIX.find(trimmed)?.as_str();
    parse_literal(matched)
}

/// Convert a whole string to a number.
///
/// Surrounding whitespace is ignored and an empty string is zero. Anything
/// that is not entirely numeric is NaN.
pub fn to_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if !NUMERIC_WHOLE.is_match(trimmed) {
        return f64::NAN;
    }
    parse_literal(trimmed).unwrap_or(f64::NAN)
}

/// Parse a string already known to match the numeric grammar.
fn parse_literal(literal: &str) -> Option<f64> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Format a number in its canonical shortest decimal form.
///
/// Integers print without a fraction (`7`), fractions use the fewest digits
/// that round-trip (`2.5`, `0.30000000000000004`). Very large or very small
/// magnitudes switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "2.5e0" or "1e21"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // Position of the decimal point relative to the first digit
    let point = exponent + 1;
    let len = digits.len() as i32;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
        }
    };

    format!("{}{}", sign, body)
}
