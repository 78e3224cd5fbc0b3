use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a partner field value, decided once during
/// normalization. Exactly one kind holds per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Number,
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Number => "Number",
            FieldKind::Date => "Date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scalar shapes the upstream payload may carry in a descriptor's `value`.
///
/// An absent `value` key is modeled as the descriptor's `Option<RawValue>`
/// being `None`; an explicit JSON `null` deserializes to `RawValue::Null`.
/// The two are not interchangeable: absent means the entry is skipped,
/// `null` means the field exists with an empty display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Number(f64),
    Text(String),
}

/// One entry of the externally supplied partner-field mapping, keyed by an
/// opaque identifier. Constructed only by deserialization; immutable once
/// delivered. A new fetch replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDescriptor {
    pub label: String,
    pub value: Option<RawValue>,
    /// Name of another field whose value gates this field's visibility.
    pub dependent_field: String,
    /// Value of `dependent_field` required to activate this field.
    pub dependent_value: String,
}

/// A normalized, render-ready partner field derived from one descriptor.
/// Never mutated after creation; the categorizer and display layer only
/// read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerField {
    /// Key of the source mapping entry.
    pub key: String,
    pub label: String,
    /// Display value; empty when the raw value was null.
    pub value: String,
    pub kind: FieldKind,
    pub dependent_field: String,
    pub dependent_value: String,
}

impl PartnerField {
    /// True when both dependency attributes are non-empty.
    pub fn is_dependent(&self) -> bool {
        !self.dependent_field.is_empty() && !self.dependent_value.is_empty()
    }

    /// Whether the field carries a value worth rendering on its own.
    ///
    /// Empty strings never render. Number-kind fields follow the upstream
    /// convention that an exact zero means "not provided" and is dropped
    /// from the visible/extra split.
    pub fn has_display_value(&self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        match self.kind {
            FieldKind::Number => self
                .value
                .trim()
                .parse::<f64>()
                .map(|number| number != 0.0)
                .unwrap_or(false),
            FieldKind::Text | FieldKind::Date => true,
        }
    }
}
