// Display formatting for dashboard values

pub const CURRENCY_SUFFIX: &str = "RWF";

// en-RW renders at most three fraction digits.
const MAX_FRACTION_DIGITS: usize = 3;
const GROUP_SIZE: usize = 3;
const GROUP_SEPARATOR: char = ',';

/// Format a revenue amount as `"1,234,567 RWF"`.
pub fn format_revenue(amount: f64) -> String {
    format!("{} {}", group_thousands(amount), CURRENCY_SUFFIX)
}

/// Render a number with en-RW grouping: comma every three integer digits,
/// `.` as decimal separator, trailing fraction zeros dropped. A negative
/// amount that rounds to zero renders as `-0`.
pub fn group_thousands(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / GROUP_SIZE + 5);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    // Negative amounts keep their sign even when they round to zero.
    if amount.is_sign_negative() {
        grouped.insert(0, '-');
    }
    grouped
}

/// Convert minutes into `"{hours}h {minutes}m"`.
///
/// Hours use floor division; minutes keep the sign of the input, so invalid
/// negative durations still render (`-5` becomes `"-1h -5m"`).
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let remainder = minutes % 60;
    format!("{}h {}m", hours, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_revenue() {
        assert_eq!(format_revenue(0.0), "0 RWF");
        assert_eq!(format_revenue(1000.0), "1,000 RWF");
        assert_eq!(format_revenue(1234567.0), "1,234,567 RWF");
    }

    #[test]
    fn test_group_thousands_boundaries() {
        assert_eq!(group_thousands(7.0), "7");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(100000.0), "100,000");
        assert_eq!(group_thousands(1000000000.0), "1,000,000,000");
    }

    #[test]
    fn test_group_thousands_fraction() {
        assert_eq!(group_thousands(1500.5), "1,500.5");
        assert_eq!(group_thousands(2500.25), "2,500.25");
        assert_eq!(group_thousands(0.1234), "0.123");
        assert_eq!(group_thousands(999.9999), "1,000");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-1234.0), "-1,234");
        assert_eq!(group_thousands(-0.0001), "-0");
        assert_eq!(group_thousands(-0.0), "-0");
        assert_eq!(group_thousands(0.0), "0");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(59), "0h 59m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(125), "2h 5m");
        assert_eq!(format_duration(1440), "24h 0m");
    }

    #[test]
    fn test_format_duration_negative_does_not_panic() {
        assert_eq!(format_duration(-5), "-1h -5m");
        assert_eq!(format_duration(-60), "-1h 0m");
        assert!(format_duration(i64::MIN).ends_with('m'));
    }
}
