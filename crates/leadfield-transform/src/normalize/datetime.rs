//! Strict ISO date detection.

use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// True when the value is exactly an ISO `YYYY-MM-DD` calendar date.
///
/// Round-trips through the parsed date: the reformatted ISO literal must
/// equal the input, which rejects bare years, year-months, and non-padded
/// spellings that a lenient parser would otherwise accept.
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .map(|date| date.format(ISO_DATE_FORMAT).to_string() == value)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_iso_dates() {
        assert!(is_iso_date("2020-01-01"));
        assert!(is_iso_date("1999-12-31"));
    }

    #[test]
    fn rejects_partial_and_ambiguous_dates() {
        assert!(!is_iso_date("2020"));
        assert!(!is_iso_date("2020-01"));
        assert!(!is_iso_date("2020-1-1"));
        assert!(!is_iso_date("01/15/2024"));
        assert!(!is_iso_date("2020-01-01T10:30"));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(!is_iso_date("2020-13-01"));
        assert!(!is_iso_date("2021-02-29"));
    }
}
