//! Form field predicates.
//!
//! These are shape checks for immediate user feedback, not authoritative
//! validation: the email rule in particular only looks for
//! `something@something.something`.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("decimal pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Non-empty after trimming surrounding whitespace.
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    !value.is_empty() && value.chars().count() >= min
}

/// Empty input always passes; pair with [`is_required`] when needed.
pub fn has_max_length(value: &str, max: usize) -> bool {
    value.is_empty() || value.chars().count() <= max
}

/// Numeric literal check with browser number-coercion rules: signed
/// decimals with optional exponent, the exact spelling `Infinity`, and
/// unsigned `0x`/`0o`/`0b` integers. Surrounding whitespace is ignored but
/// blank input is rejected.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    if matches!(trimmed, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some(radix) = radix_of(trimmed) {
        let digits = &trimmed[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    DECIMAL_RE.is_match(trimmed)
}

fn radix_of(literal: &str) -> Option<u32> {
    match literal.get(..2)? {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email("a@b.co"));
        assert!(is_email("ops.team@calendario.pt"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.d"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_required() {
        assert!(!is_required("  "));
        assert!(!is_required(""));
        assert!(is_required("x"));
        assert!(is_required(" x "));
    }

    #[test]
    fn test_min_length() {
        assert!(has_min_length("abcd", 4));
        assert!(!has_min_length("abc", 4));
        assert!(!has_min_length("", 0));
        assert!(has_min_length("ção", 3));
    }

    #[test]
    fn test_max_length() {
        assert!(has_max_length("", 0));
        assert!(has_max_length("abc", 3));
        assert!(!has_max_length("abcd", 3));
    }

    #[test]
    fn test_numeric() {
        assert!(is_numeric("10"));
        assert!(is_numeric("-2.5"));
        assert!(is_numeric(" 42 "));
        assert!(is_numeric("1e3"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("   "));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("NaN"));
        assert!(is_numeric("1."));
        assert!(is_numeric(".5"));
        assert!(!is_numeric("."));
    }

    #[test]
    fn test_numeric_infinity_spelling() {
        assert!(is_numeric("Infinity"));
        assert!(is_numeric("-Infinity"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("INFINITY"));
        assert!(!is_numeric("infinity"));
    }

    #[test]
    fn test_numeric_radix_prefixes() {
        assert!(is_numeric("0x10"));
        assert!(is_numeric("0XfF"));
        assert!(is_numeric("0o17"));
        assert!(is_numeric("0b101"));
        assert!(!is_numeric("0x"));
        assert!(!is_numeric("0b102"));
        assert!(!is_numeric("-0x10"));
    }
}
