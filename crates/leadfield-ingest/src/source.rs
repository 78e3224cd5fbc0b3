//! Boundary to the external partner-field service.

use std::path::PathBuf;

use tracing::debug;

use leadfield_model::{FieldError, Result};

use crate::payload::PartnerFieldsResponse;

/// A service able to deliver the partner-field mapping for one lead.
///
/// Implementations may fail; on failure the caller renders the error
/// message in place of any field content and performs no computation.
pub trait FieldSource {
    fn fetch_partner_fields(&self, lead_id: &str) -> Result<PartnerFieldsResponse>;
}

/// Reads the response envelope from a JSON file on disk. Stand-in for the
/// remote service when running from the command line.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FieldSource for JsonFileSource {
    fn fetch_partner_fields(&self, lead_id: &str) -> Result<PartnerFieldsResponse> {
        debug!(lead_id = %lead_id, path = %self.path.display(), "loading partner fields");
        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|error| FieldError::Fetch(format!("invalid partner field response: {error}")))
    }
}

/// In-memory source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    response: PartnerFieldsResponse,
}

impl StaticSource {
    pub fn new(response: PartnerFieldsResponse) -> Self {
        Self { response }
    }
}

impl FieldSource for StaticSource {
    fn fetch_partner_fields(&self, _lead_id: &str) -> Result<PartnerFieldsResponse> {
        Ok(self.response.clone())
    }
}
