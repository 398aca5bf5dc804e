//! Format checks applied to raw form input

use once_cell::sync::Lazy;
use regex::Regex;

// Something, an at sign, something, a dot, something
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("Failed to compile email regex")
});

// Regex for portfolio links, only http and https are accepted
static PORTFOLIO_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://.+\..+$").expect("Failed to compile portfolio URL regex")
});

/// Integer literal prefixes understood by browser number inputs
const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// Checks that the email looks like `text@text.text`.
/// The pattern may match anywhere in the input.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks that the portfolio link looks like `http(s)://host.tld...`
pub fn is_valid_portfolio_url(url: &str) -> bool {
    PORTFOLIO_URL_REGEX.is_match(url)
}

/// Checks whether the input converts to a number the way a browser
/// number field does.
///
/// Surrounding whitespace is ignored and blank input reads as zero.
/// Decimal and exponent forms, a leading sign, `Infinity` and prefixed
/// integer literals (`0x1f`, `0o17`, `0b101`) are numbers. `NaN` is not.
pub fn is_numeric(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return true;
    }

    // Prefixed literals take no sign
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);

    if unsigned == "Infinity" {
        return true;
    }

    // f64 parsing also accepts "inf" and "nan", which browsers reject
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return false;
    }

    trimmed.parse::<f64>().is_ok()
}
