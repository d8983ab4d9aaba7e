//! Presentation helpers shared by the list and detail pages.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Averages and grade values are shown with one decimal.
pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

fn spanish_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Shown for values the backend left empty or `null`.
pub const NOT_AVAILABLE: &str = "N/A";

/// `raw`, or [`NOT_AVAILABLE`] when it is blank.
pub fn or_not_available(raw: &str) -> String {
    if raw.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        raw.to_string()
    }
}

/// "15 de marzo de 2024", plus ", 10:30" when the input carries a time.
///
/// Blank input gives [`NOT_AVAILABLE`]; anything else the parser does not
/// understand comes back unchanged.
pub fn long_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let trimmed = raw.trim_end_matches('Z');
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return format!(
                "{}, {:02}:{:02}",
                spanish_date(dt.date()),
                dt.hour(),
                dt.minute()
            );
        }
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => spanish_date(date),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(long_date("2024-03-15"), "15 de marzo de 2024");
        assert_eq!(long_date("2024-12-01T08:05:00"), "1 de diciembre de 2024, 08:05");
        assert_eq!(long_date("2024-12-01T08:05:00.123Z"), "1 de diciembre de 2024, 08:05");
        assert_eq!(long_date("ayer"), "ayer");
    }

    #[test]
    fn blank_values_show_not_available() {
        assert_eq!(long_date(""), "N/A");
        assert_eq!(or_not_available("  "), "N/A");
        assert_eq!(or_not_available("ana@example.com"), "ana@example.com");
    }

    #[test]
    fn one_decimal_rounds_for_display() {
        assert_eq!(one_decimal(8.0), "8.0");
        assert_eq!(one_decimal(3.46), "3.5");
    }
}
