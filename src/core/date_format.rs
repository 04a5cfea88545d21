use once_cell::sync::Lazy;
use regex::Regex;

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})\s+([0-9]{1,2}):([0-9]{2}):([0-9]{2})$")
        .expect("date-time pattern is valid")
});

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is valid"));

/// Display label for a report date.
///
/// `2025-05-01 14:30:00` becomes `01/05/2025 - 2:30 p. m.`, `2025-05-01`
/// becomes `01/05/2025`. Any other string is returned unchanged.
pub fn format_report_date(date: &str) -> String {
    if let Some(caps) = DATE_TIME_RE.captures(date) {
        // one or two ASCII digits
        let hour: u32 = caps[4].parse().unwrap_or(0);
        let meridiem = if hour >= 12 { "p. m." } else { "a. m." };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        return format!(
            "{}/{}/{} - {}:{} {}",
            &caps[3], &caps[2], &caps[1], hour12, &caps[5], meridiem
        );
    }

    if let Some(caps) = DATE_RE.captures(date) {
        return format!("{}/{}/{}", &caps[3], &caps[2], &caps[1]);
    }

    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(format_report_date("2025-03-15"), "15/03/2025");
    }

    #[test]
    fn test_afternoon_time() {
        assert_eq!(
            format_report_date("2025-05-01 14:30:00"),
            "01/05/2025 - 2:30 p. m."
        );
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(
            format_report_date("2025-05-01 0:05:59"),
            "01/05/2025 - 12:05 a. m."
        );
        assert_eq!(
            format_report_date("2025-05-01 12:00:00"),
            "01/05/2025 - 12:00 p. m."
        );
    }

    #[test]
    fn test_non_ascii_digits_passthrough() {
        assert_eq!(
            format_report_date("2025-05-01 \u{0661}\u{0664}:30:00"),
            "2025-05-01 \u{0661}\u{0664}:30:00"
        );
        assert_eq!(
            format_report_date("\u{0662}\u{0660}\u{0662}\u{0665}-05-01"),
            "\u{0662}\u{0660}\u{0662}\u{0665}-05-01"
        );
    }

    #[test]
    fn test_unrecognized_passthrough() {
        assert_eq!(format_report_date("15/03/2025"), "15/03/2025");
        assert_eq!(format_report_date(""), "");
        assert_eq!(format_report_date("2025-03-15T10:00:00"), "2025-03-15T10:00:00");
    }
}
