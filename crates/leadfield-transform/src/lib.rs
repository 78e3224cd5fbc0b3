//! Partner field transformation engine.
//!
//! This crate carries the pipeline's logic, in order:
//!
//! - **normalize**: value kind inference and reformatting
//! - **transform**: descriptor-to-field mapping with skip rules
//! - **categorize**: the four-bucket display partition

pub mod categorize;
pub mod normalize;
pub mod transform;

pub use categorize::categorize_fields;
pub use normalize::normalize_value;
pub use transform::{TransformReport, transform_fields, transform_fields_with_report};
