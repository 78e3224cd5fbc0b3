use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::{debug, info, info_span};

use leadfield_cli::logging::redact_value;
use leadfield_ingest::{FieldSource, JsonFileSource, parse_payload};
use leadfield_model::{FieldPartition, TransformOptions};
use leadfield_transform::{categorize_fields, transform_fields_with_report};

use crate::cli::FieldsArgs;
use crate::summary::{apply_table_style, header_cell};

/// Partner fields for one lead, ready for rendering.
#[derive(Debug)]
pub struct FieldsResult {
    pub lead_id: String,
    pub partition: FieldPartition,
    pub skipped: usize,
}

pub fn run_fields(args: &FieldsArgs) -> Result<FieldsResult> {
    let lead_id = args
        .lead_id
        .clone()
        .unwrap_or_else(|| derive_lead_id(&args.payload));
    let source = JsonFileSource::new(&args.payload);
    Ok(fetch_and_partition(&source, &lead_id)?)
}

/// Fetch, transform, and categorize in one pass.
///
/// On an upstream failure no computation happens and the error message is
/// propagated verbatim for the caller to render in place of field content.
pub fn fetch_and_partition(
    source: &dyn FieldSource,
    lead_id: &str,
) -> leadfield_model::Result<FieldsResult> {
    let span = info_span!("partner_fields", lead_id = %lead_id);
    let _guard = span.enter();

    let response = source.fetch_partner_fields(lead_id)?;
    let entries = parse_payload(&response.fields);
    let report = transform_fields_with_report(&entries, &TransformOptions::default());
    for field in &report.fields {
        debug!(
            key = %field.key,
            label = %field.label,
            value = %redact_value(&field.value),
            kind = %field.kind,
            "field normalized"
        );
    }
    let partition = categorize_fields(&report.fields);
    info!(
        visible = partition.visible.len(),
        extra = partition.extra.len(),
        installation = partition.installation.len(),
        appointment = partition.appointment.len(),
        skipped = report.skipped,
        "partner fields categorized"
    );
    Ok(FieldsResult {
        lead_id: lead_id.to_string(),
        partition,
        skipped: report.skipped,
    })
}

pub fn run_labels() {
    let options = TransformOptions::default();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label")]);
    apply_table_style(&mut table);
    for label in &options.force_text_labels {
        table.add_row(vec![Cell::new(label)]);
    }
    println!("{table}");
}

fn derive_lead_id(payload: &Path) -> String {
    payload
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("lead")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadfield_ingest::{PartnerFieldsResponse, StaticSource};
    use leadfield_model::FieldError;

    struct FailingSource;

    impl FieldSource for FailingSource {
        fn fetch_partner_fields(
            &self,
            _lead_id: &str,
        ) -> leadfield_model::Result<PartnerFieldsResponse> {
            Err(FieldError::Fetch(
                "An error occurred while fetching partner fields.".to_string(),
            ))
        }
    }

    #[test]
    fn fetch_failure_propagates_the_message_verbatim() {
        let error = fetch_and_partition(&FailingSource, "lead-1").expect_err("fetch must fail");
        assert_eq!(
            error.to_string(),
            "An error occurred while fetching partner fields."
        );
    }

    #[test]
    fn static_source_produces_a_partition() {
        let response: PartnerFieldsResponse = serde_json::from_str(
            r#"{"fields":{"a":{"label":"baujahr","value":"2023"},"b":{"label":"leer"}}}"#,
        )
        .expect("parse envelope");
        let result = fetch_and_partition(&StaticSource::new(response), "lead-1")
            .expect("partition fields");
        assert_eq!(result.partition.visible.len(), 1);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn lead_id_falls_back_to_the_file_stem() {
        assert_eq!(derive_lead_id(Path::new("/tmp/lead-0042.json")), "lead-0042");
        assert_eq!(derive_lead_id(Path::new("")), "lead");
    }
}
