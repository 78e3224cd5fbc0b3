//! Field Categorizer: partition normalized fields into display buckets.

use tracing::debug;

use leadfield_model::{DependencyGroup, FieldPartition, PartnerField, VISIBLE_FIELD_LIMIT};

/// Partition fields into the four display buckets in one ordered pass.
///
/// Dependent fields route by exact sentinel match; an unrecognized sentinel
/// lands in no bucket (observable only in the log). Non-dependent fields
/// without a display value are dropped. The first four qualifying
/// non-dependent fields form the visible head, the rest the overflow tail,
/// original order preserved throughout. Buckets are freshly allocated on
/// every call; a new run fully replaces the previous partition.
pub fn categorize_fields(fields: &[PartnerField]) -> FieldPartition {
    let mut partition = FieldPartition::default();
    for field in fields {
        if field.is_dependent() {
            match DependencyGroup::from_sentinel(&field.dependent_field) {
                Some(DependencyGroup::Installation) => partition.installation.push(field.clone()),
                Some(DependencyGroup::Appointment) => partition.appointment.push(field.clone()),
                None => {
                    debug!(
                        key = %field.key,
                        dependent_field = %field.dependent_field,
                        "dropping field with unrecognized dependency group"
                    );
                }
            }
            continue;
        }
        if !field.has_display_value() {
            debug!(key = %field.key, "dropping field without display value");
            continue;
        }
        if partition.visible.len() < VISIBLE_FIELD_LIMIT {
            partition.visible.push(field.clone());
        } else {
            partition.extra.push(field.clone());
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadfield_model::FieldKind;

    fn field(key: &str, value: &str) -> PartnerField {
        PartnerField {
            key: key.to_string(),
            label: key.to_string(),
            value: value.to_string(),
            kind: FieldKind::Text,
            dependent_field: String::new(),
            dependent_value: String::new(),
        }
    }

    fn dependent(key: &str, sentinel: &str) -> PartnerField {
        PartnerField {
            dependent_field: sentinel.to_string(),
            dependent_value: "true".to_string(),
            ..field(key, "v")
        }
    }

    #[test]
    fn fifth_qualifying_field_overflows() {
        let fields: Vec<PartnerField> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|key| field(key, "v"))
            .collect();
        let partition = categorize_fields(&fields);
        assert_eq!(partition.visible.len(), 4);
        assert_eq!(partition.extra.len(), 1);
        assert_eq!(partition.extra[0].key, "e");
    }

    #[test]
    fn dependent_fields_route_by_sentinel_only() {
        let fields = vec![
            dependent("inst", "installation_ah"),
            dependent("appt", "appointment_ah"),
            dependent("lost", "somewhere_else"),
        ];
        let partition = categorize_fields(&fields);
        assert!(partition.visible.is_empty());
        assert!(partition.extra.is_empty());
        assert_eq!(partition.installation.len(), 1);
        assert_eq!(partition.installation[0].key, "inst");
        assert_eq!(partition.appointment.len(), 1);
        assert_eq!(partition.appointment[0].key, "appt");
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn dependent_fields_keep_empty_values() {
        let mut gated = dependent("inst", "installation_ah");
        gated.value = String::new();
        let partition = categorize_fields(&[gated]);
        assert_eq!(partition.installation.len(), 1);
    }

    #[test]
    fn empty_valued_fields_are_dropped_entirely() {
        let fields = vec![field("a", ""), field("b", "kept")];
        let partition = categorize_fields(&fields);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.visible[0].key, "b");
    }

    #[test]
    fn each_run_rebuilds_from_scratch() {
        let first = categorize_fields(&[field("a", "v")]);
        let second = categorize_fields(&[field("b", "v")]);
        assert_eq!(first.visible.len(), 1);
        assert_eq!(second.visible.len(), 1);
        assert_eq!(second.visible[0].key, "b");
    }
}
