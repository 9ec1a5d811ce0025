//! Number formatting utilities for human-readable display.
//!
//! `display` follows the dashboard's `toLocaleString()` rendering: comma
//! separators and at most three fraction digits. Percentages always carry two
//! decimals. No currency symbols are added here.

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let body = match fraction {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    };
    if body == "0" {
        // "-0" after rounding
        body
    } else {
        format!("{sign}{body}")
    }
}

/// Format like `Number.prototype.toLocaleString("en-US")`.
pub fn display(amount: &f64) -> String {
    display_with_decimals(amount, 3)
}

/// Format with at most `decimals` fraction digits.
pub fn display_with_decimals(amount: &f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(formatted)
}

/// Axis/tooltip percentage: `"12.35%"`, `"-4.00%"`.
pub fn display_percent(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    format!("{:.2}%", value)
}

/// Table 24h change: explicit `+` for gains, `"N/A"` when missing.
pub fn display_change(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => format!("+{}", display_percent(v)),
        Some(v) if v.is_finite() => display_percent(v),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatted_string_thousands_separator() {
        assert_eq!(display_formatted_string("0".to_string()), "0");
        assert_eq!(display_formatted_string("123".to_string()), "123");
        assert_eq!(display_formatted_string("1000".to_string()), "1,000");
        assert_eq!(display_formatted_string("123456".to_string()), "123,456");
        assert_eq!(
            display_formatted_string("1234567890".to_string()),
            "1,234,567,890"
        );
    }

    #[test]
    fn test_display_formatted_string_negative() {
        assert_eq!(display_formatted_string("-1000".to_string()), "-1,000");
        assert_eq!(display_formatted_string("-123".to_string()), "-123");
        assert_eq!(display_formatted_string("-0.000".to_string()), "0");
    }

    #[test]
    fn test_display_matches_locale_string() {
        assert_eq!(display(&67234.12), "67,234.12");
        assert_eq!(display(&1_300_000_000_000.0), "1,300,000,000,000");
        assert_eq!(display(&0.123456), "0.123");
        assert_eq!(display(&1.5), "1.5");
        assert_eq!(display(&0.0), "0");
    }

    #[test]
    fn test_display_non_finite() {
        assert_eq!(display(&f64::NAN), "N/A");
    }

    #[test]
    fn test_display_percent() {
        assert_eq!(display_percent(12.346), "12.35%");
        assert_eq!(display_percent(-4.0), "-4.00%");
        assert_eq!(display_percent(0.0), "0.00%");
    }

    #[test]
    fn test_display_change_signs() {
        assert_eq!(display_change(Some(2.5)), "+2.50%");
        assert_eq!(display_change(Some(-1.25)), "-1.25%");
        assert_eq!(display_change(Some(0.0)), "0.00%");
        assert_eq!(display_change(None), "N/A");
    }
}
