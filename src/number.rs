//! Conversion between currency display strings and numeric amounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Currency inputs hold display text such as `$1,234.56`. The binder in
//! [`crate::currency_field`] round-trips that text through a number on every
//! change, so parsing is deliberately lenient (browser `Number(..)` coercion)
//! and formatting matches the browser's en-US currency formatter.
//!
//! TRADE-OFFS
//! ==========
//! Malformed input is not an error: it parses to NaN and formats as `$NaN`.
//! Callers that need to detect it check [`f64::is_nan`].

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

use crate::options::{CurrencyOptions, SeparatorMode};

/// Remove the first `$` and the first `,` from `raw`.
///
/// Only one grouping separator is removed: `"$1,234,567"` becomes
/// `"1234,567"`. Use [`strip_currency_with`] with [`SeparatorMode::All`] to
/// remove every separator.
#[must_use]
pub fn strip_currency(raw: &str) -> String {
    strip_currency_with(raw, &CurrencyOptions::default())
}

/// Remove the currency symbol and grouping separators according to `options`.
#[must_use]
pub fn strip_currency_with(raw: &str, options: &CurrencyOptions) -> String {
    let without_symbol = raw.replacen(options.currency.symbol(), "", 1);
    match options.separators {
        SeparatorMode::First => without_symbol.replacen(',', "", 1),
        SeparatorMode::All => without_symbol.replace(',', ""),
    }
}

/// Parse a currency display string into an amount. NaN when not numeric.
#[must_use]
pub fn currency_to_number(raw: &str) -> f64 {
    currency_to_number_with(raw, &CurrencyOptions::default())
}

/// [`currency_to_number`] with explicit options.
#[must_use]
pub fn currency_to_number_with(raw: &str, options: &CurrencyOptions) -> f64 {
    parse_number(&strip_currency_with(raw, options))
}

/// Format an amount as en-US dollars with two fraction digits: `$1,234.50`.
#[must_use]
pub fn format_number(amount: f64) -> String {
    format_number_with(amount, &CurrencyOptions::default())
}

/// [`format_number`] with explicit options.
#[must_use]
pub fn format_number_with(amount: f64, options: &CurrencyOptions) -> String {
    let symbol = options.currency.symbol();
    if amount.is_nan() {
        return format!("{symbol}NaN");
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{symbol}∞");
    }
    let (whole, cents) = split_cents(amount.abs());
    format!("{sign}{symbol}{}.{cents}", group_thousands(&whole))
}

/// Coerce a string to a number the way a browser's `Number(string)` does.
fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    // Rust also accepts "inf" and "nan"; the browser does not.
    let decimal_only = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_only {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Whitespace and line terminators trimmed by `Number(string)`.
///
/// Narrower than [`char::is_whitespace`], which also accepts U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Parse `0x`, `0o` and `0b` integer literals. `None` when `s` has no such prefix.
///
/// Digits accumulate exactly and round to `f64` once; past `u128` the rest
/// accumulates in floating point.
#[allow(clippy::cast_precision_loss)]
fn parse_radix_literal(s: &str) -> Option<f64> {
    let mut chars = s.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    let digits = chars.as_str();
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut exact: Option<u128> = Some(0);
    let mut approx = 0.0_f64;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        match exact.and_then(|v| v.checked_mul(u128::from(radix))?.checked_add(u128::from(d))) {
            Some(v) => exact = Some(v),
            None => {
                if let Some(v) = exact.take() {
                    approx = v as f64;
                }
                approx = approx * f64::from(radix) + f64::from(d);
            }
        }
    }
    Some(exact.map_or(approx, |v| v as f64))
}

/// Round a non-negative amount to cents, returning whole and fractional digits.
///
/// Rounds half up on the shortest decimal that round-trips to `abs`, as the
/// browser's currency formatter does: `1.005` becomes `1.01` even though the
/// stored binary value is slightly below it.
fn split_cents(abs: f64) -> (String, String) {
    // `Display` for f64 prints the shortest round-trip decimal without an exponent.
    let shortest = abs.to_string();
    let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole.bytes().chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2)).collect();
    if frac.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let cents = String::from_utf8_lossy(&digits[split..]).into_owned();
    let whole = String::from_utf8_lossy(&digits[..split]).into_owned();
    (whole, cents)
}

/// Add one to a string of ASCII decimal digits, growing it on carry out.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Insert `,` between groups of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
