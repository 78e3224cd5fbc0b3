//! Field Transformer: raw descriptors to render-ready partner fields.

use tracing::{debug, info};

use leadfield_model::{FieldDescriptor, FieldKind, PartnerField, RawValue, TransformOptions};

use crate::normalize::{format_numeric, normalize_value, reformat_international};

/// Outcome of one transform run, including the skip count for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct TransformReport {
    pub fields: Vec<PartnerField>,
    pub skipped: usize,
}

/// Map ordered `(key, descriptor)` pairs into normalized partner fields.
///
/// An entry is skipped when its label is empty or its `value` key is absent
/// altogether; an explicit null value is kept and rendered empty. Labels in
/// the force-text set bypass kind inference. Output order matches input
/// order. Never fails; malformed entries only reduce the output.
pub fn transform_fields(
    entries: &[(String, FieldDescriptor)],
    options: &TransformOptions,
) -> Vec<PartnerField> {
    transform_fields_with_report(entries, options).fields
}

/// Same as [`transform_fields`], also reporting how many entries were
/// skipped.
pub fn transform_fields_with_report(
    entries: &[(String, FieldDescriptor)],
    options: &TransformOptions,
) -> TransformReport {
    let mut report = TransformReport::default();
    for (key, descriptor) in entries {
        let label = descriptor.label.trim();
        if label.is_empty() {
            debug!(key = %key, "skipping field without label");
            report.skipped += 1;
            continue;
        }
        let Some(raw) = &descriptor.value else {
            debug!(key = %key, label = %label, "skipping field without value entry");
            report.skipped += 1;
            continue;
        };
        let (kind, value) = if options.forces_text(label) {
            debug!(key = %key, label = %label, "contact label forces text kind");
            (FieldKind::Text, forced_text_value(raw))
        } else {
            normalize_value(raw)
        };
        report.fields.push(PartnerField {
            key: key.clone(),
            label: descriptor.label.clone(),
            value,
            kind,
            dependent_field: descriptor.dependent_field.clone(),
            dependent_value: descriptor.dependent_value.clone(),
        });
    }
    info!(
        field_count = report.fields.len(),
        skipped = report.skipped,
        "partner fields transformed"
    );
    report
}

/// Display value for a force-text label: kind inference is bypassed, but
/// the phone rewrite still applies so dialing prefixes render uniformly.
fn forced_text_value(raw: &RawValue) -> String {
    match raw {
        RawValue::Null => String::new(),
        RawValue::Number(number) => format_numeric(*number),
        RawValue::Text(text) => reformat_international(text).unwrap_or_else(|| text.clone()),
    }
}
