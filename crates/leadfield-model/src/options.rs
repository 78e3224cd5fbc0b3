use std::collections::BTreeSet;

/// Behavior switches for the field transformer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Labels whose values always render as text, bypassing kind inference.
    /// Contact identifiers lose leading zeros and grouping when rendered as
    /// plain numbers, so they must stay textual even when fully numeric.
    /// Matched case-insensitively against the descriptor label.
    pub force_text_labels: BTreeSet<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            force_text_labels: ["telefon", "plz", "mobilnummer_ansprechpartner"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl TransformOptions {
    /// True when values of this label must keep their textual form.
    pub fn forces_text(&self, label: &str) -> bool {
        let trimmed = label.trim();
        self.force_text_labels
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(trimmed))
    }
}
