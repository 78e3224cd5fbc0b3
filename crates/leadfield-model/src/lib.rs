pub mod display;
pub mod error;
pub mod field;
pub mod options;
pub mod partition;

pub use display::rendered_fields;
pub use error::{FieldError, Result};
pub use field::{FieldDescriptor, FieldKind, PartnerField, RawValue};
pub use options::TransformOptions;
pub use partition::{
    APPOINTMENT_SENTINEL, DependencyGroup, FieldPartition, INSTALLATION_SENTINEL,
    VISIBLE_FIELD_LIMIT,
};
