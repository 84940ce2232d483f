/// Manufacture years are told apart from ages by this threshold.
pub const MANUFACTURE_YEAR_THRESHOLD: f64 = 1900.0;

/// Parses a number the way people type it into a chat: `8 500`, `8500,5`,
/// `1 998` with a narrow no-break space.
///
/// Spaces of any kind are thousands separators and a comma is a decimal
/// separator. Non-finite values are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Turns the age answer into whole years.
///
/// Values above [`MANUFACTURE_YEAR_THRESHOLD`] are manufacture years, anything
/// else is already an age. Returns `None` when the derived age is negative.
pub fn derive_age(value: f64, current_year: i32) -> Option<u32> {
    let whole = value.trunc();
    let age = if value > MANUFACTURE_YEAR_THRESHOLD {
        f64::from(current_year) - whole
    } else {
        whole
    };
    if age < 0.0 {
        None
    } else {
        Some(age as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators() {
        assert_eq!(parse_number("8500"), Some(8500.0));
        assert_eq!(parse_number(" 8 500 "), Some(8500.0));
        assert_eq!(parse_number("8\u{202f}500"), Some(8500.0));
        assert_eq!(parse_number("8\u{a0}500"), Some(8500.0));
        assert_eq!(parse_number("1,5"), Some(1.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1.234,5"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn ages_and_years() {
        assert_eq!(derive_age(2019.0, 2025), Some(6));
        assert_eq!(derive_age(5.0, 2025), Some(5));
        assert_eq!(derive_age(5.9, 2025), Some(5));
        assert_eq!(derive_age(2025.0, 2025), Some(0));
        assert_eq!(derive_age(2026.0, 2025), None);
        assert_eq!(derive_age(-1.0, 2025), None);
        assert_eq!(derive_age(1900.0, 2025), Some(1900));
    }
}
