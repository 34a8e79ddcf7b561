//! Free-text numeric parsing with the calculator's fallback rules.
//!
//! Input fields never produce user-facing errors: an unparsable sum is 0,
//! an unparsable rate falls back to its documented default. Comma is
//! accepted as decimal separator.

/// Parses the assessment-sum field; anything non-finite becomes `0.0`.
#[must_use]
pub fn parse_sum(text: &str) -> f64 {
    parse_or(text, 0.0)
}

/// Parses a rate field, falling back to `default` when the text is not a
/// finite number.
#[must_use]
pub fn parse_rate(text: &str, default: f64) -> f64 {
    parse_or(text, default)
}

fn parse_or(text: &str, fallback: f64) -> f64 {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_accepts_dot_or_comma() {
        assert_eq!(parse_sum("12500"), 12500.0);
        assert_eq!(parse_sum("12500,5"), 12500.5);
        assert_eq!(parse_sum(" 12500.5 "), 12500.5);
    }

    #[test]
    fn unparsable_sum_is_zero() {
        assert_eq!(parse_sum(""), 0.0);
        assert_eq!(parse_sum("abc"), 0.0);
        assert_eq!(parse_sum("inf"), 0.0);
        assert_eq!(parse_sum("NaN"), 0.0);
    }

    #[test]
    fn rate_falls_back_to_default() {
        assert_eq!(parse_rate("22,5", 44.0), 22.5);
        assert_eq!(parse_rate("", 44.0), 44.0);
        assert_eq!(parse_rate("x", 0.3), 0.3);
    }
}
