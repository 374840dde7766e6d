//! Lenient numeric parsing shared by validation and coercion.

/// Lenient integer parse: optional sign followed by leading digits.
///
/// Leading whitespace is skipped and text after the digits is ignored
/// (`"4 high"` is 4, `"2.9"` is 2). Values too large for an `i64`
/// saturate at `i64::MAX` / `i64::MIN`. Returns `None` when there are no
/// leading digits.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut digits = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .peekable();
    digits.peek()?;
    let sign = if negative { -1 } else { 1 };
    Some(digits.fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(sign * digit)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_digits() {
        assert_eq!(parse_leading_int("4"), Some(4));
        assert_eq!(parse_leading_int(" 3 "), Some(3));
        assert_eq!(parse_leading_int("2.9"), Some(2));
        assert_eq!(parse_leading_int("5abc"), Some(5));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("+2"), Some(2));
        assert_eq!(parse_leading_int("high"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn oversized_values_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
    }
}
