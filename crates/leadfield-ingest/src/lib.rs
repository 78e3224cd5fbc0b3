pub mod payload;
pub mod source;

pub use payload::{PartnerFieldsResponse, parse_payload};
pub use source::{FieldSource, JsonFileSource, StaticSource};
