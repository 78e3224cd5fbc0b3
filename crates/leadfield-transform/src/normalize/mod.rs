//! Field value normalization: kind inference and display reformatting.
//!
//! - **phone**: international `00` dialing prefixes rewritten to `+`
//! - **numeric**: finite-number detection and display formatting
//! - **datetime**: strict ISO `YYYY-MM-DD` date detection

pub mod datetime;
pub mod numeric;
pub mod phone;

pub use datetime::is_iso_date;
pub use numeric::{format_numeric, parse_finite};
pub use phone::reformat_international;

use leadfield_model::{FieldKind, RawValue};

/// Infer the semantic kind of one raw value and produce its display form.
///
/// Total and deterministic: every input maps to some kind, unparseable
/// content falls through to text. Classification order is fixed: the phone
/// rewrite runs first and pins the result to text, then finite numbers,
/// then strict ISO dates.
pub fn normalize_value(raw: &RawValue) -> (FieldKind, String) {
    match raw {
        RawValue::Null => (FieldKind::Text, String::new()),
        RawValue::Number(number) => (FieldKind::Number, format_numeric(*number)),
        RawValue::Text(text) => normalize_text(text),
    }
}

fn normalize_text(text: &str) -> (FieldKind, String) {
    if let Some(reformatted) = reformat_international(text) {
        // Phone numbers must never render as numbers or dates.
        return (FieldKind::Text, reformatted);
    }
    if parse_finite(text).is_some() {
        return (FieldKind::Number, text.to_string());
    }
    if is_iso_date(text) {
        return (FieldKind::Date, text.to_string());
    }
    (FieldKind::Text, text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_values_become_text_with_plus_prefix() {
        let (kind, value) = normalize_value(&RawValue::Text("0049123456789".to_string()));
        assert_eq!(kind, FieldKind::Text);
        assert_eq!(value, "+49123456789");
    }

    #[test]
    fn iso_dates_round_trip_exactly() {
        let (kind, value) = normalize_value(&RawValue::Text("2020-01-01".to_string()));
        assert_eq!(kind, FieldKind::Date);
        assert_eq!(value, "2020-01-01");

        // A bare year parses as a number, never as a date.
        let (kind, _) = normalize_value(&RawValue::Text("2020".to_string()));
        assert_ne!(kind, FieldKind::Date);
    }

    #[test]
    fn numeric_strings_keep_their_spelling() {
        let (kind, value) = normalize_value(&RawValue::Text("2023".to_string()));
        assert_eq!(kind, FieldKind::Number);
        assert_eq!(value, "2023");
    }

    #[test]
    fn raw_numbers_format_for_display() {
        let (kind, value) = normalize_value(&RawValue::Number(2.0));
        assert_eq!(kind, FieldKind::Number);
        assert_eq!(value, "2");
    }

    #[test]
    fn null_renders_empty_text() {
        let (kind, value) = normalize_value(&RawValue::Null);
        assert_eq!(kind, FieldKind::Text);
        assert_eq!(value, "");
    }

    #[test]
    fn garbage_falls_through_to_text() {
        let (kind, value) = normalize_value(&RawValue::Text("Berlin Mitte".to_string()));
        assert_eq!(kind, FieldKind::Text);
        assert_eq!(value, "Berlin Mitte");
    }
}
