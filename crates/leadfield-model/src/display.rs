//! Read-side helpers for the display layer.
//!
//! The expand/collapse flag is owned by the presentation layer; expansion
//! only widens what is rendered, it never re-categorizes.

use crate::field::PartnerField;
use crate::partition::FieldPartition;

/// Fields to render for the non-dependent section given the expand state:
/// the visible head alone, or the head followed by the overflow tail.
pub fn rendered_fields(partition: &FieldPartition, expanded: bool) -> Vec<&PartnerField> {
    let mut fields: Vec<&PartnerField> = partition.visible.iter().collect();
    if expanded {
        fields.extend(partition.extra.iter());
    }
    fields
}
