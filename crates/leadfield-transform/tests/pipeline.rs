//! End-to-end scenarios: raw payload in, display partition out.

use serde_json::json;

use leadfield_ingest::parse_payload;
use leadfield_model::{FieldKind, FieldPartition, TransformOptions};
use leadfield_transform::{categorize_fields, transform_fields};

fn run(payload: serde_json::Value) -> FieldPartition {
    let entries = parse_payload(&payload);
    let fields = transform_fields(&entries, &TransformOptions::default());
    categorize_fields(&fields)
}

#[test]
fn numeric_fields_land_in_visible() {
    let partition = run(json!({
        "a": { "label": "baujahr", "value": "2023" },
        "b": { "label": "personenzahl", "value": "2" },
    }));
    assert_eq!(partition.visible.len(), 2);
    assert!(
        partition
            .visible
            .iter()
            .all(|field| field.kind == FieldKind::Number)
    );
    assert!(partition.extra.is_empty());
    assert!(partition.installation.is_empty());
    assert!(partition.appointment.is_empty());
}

#[test]
fn overflow_starts_at_the_fifth_field() {
    let partition = run(json!({
        "f1": { "label": "baujahr", "value": "2023" },
        "f2": { "label": "ort", "value": "Berlin" },
        "f3": { "label": "personenzahl", "value": "2" },
        "f4": { "label": "heizung", "value": "Gas" },
        "f5": { "label": "dachform", "value": "Satteldach" },
    }));
    let visible: Vec<&str> = partition
        .visible
        .iter()
        .map(|field| field.key.as_str())
        .collect();
    assert_eq!(visible, vec!["f1", "f2", "f3", "f4"]);
    assert_eq!(partition.extra.len(), 1);
    assert_eq!(partition.extra[0].key, "f5");
    assert!(partition.has_overflow());
}

#[test]
fn installation_gated_field_appears_only_in_its_group() {
    let partition = run(json!({
        "a": { "label": "ort", "value": "Berlin" },
        "b": {
            "label": "montagetermin",
            "value": "2024-05-01",
            "dependentField": "installation_ah",
            "dependentValue": "true",
        },
    }));
    assert_eq!(partition.installation.len(), 1);
    assert_eq!(partition.installation[0].key, "b");
    assert_eq!(partition.visible.len(), 1);
    assert_eq!(partition.visible[0].key, "a");
    assert!(partition.extra.is_empty());
    assert!(partition.appointment.is_empty());
}

#[test]
fn empty_value_without_dependency_disappears() {
    let partition = run(json!({
        "a": { "label": "anmerkung", "value": "" },
    }));
    assert!(partition.is_empty());
}

#[test]
fn phone_number_is_reformatted_end_to_end() {
    let partition = run(json!({
        "a": { "label": "rueckrufnummer", "value": "0049123456789" },
    }));
    assert_eq!(partition.visible.len(), 1);
    assert_eq!(partition.visible[0].value, "+49123456789");
    assert_eq!(partition.visible[0].kind, FieldKind::Text);
}

#[test]
fn malformed_payload_yields_an_empty_partition() {
    assert!(run(json!([1, 2, 3])).is_empty());
    assert!(run(json!(null)).is_empty());
    assert!(run(json!("fields")).is_empty());
}
