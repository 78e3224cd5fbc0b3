use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::PartnerField;

/// Routing key for fields gated on the installation section.
pub const INSTALLATION_SENTINEL: &str = "installation_ah";

/// Routing key for fields gated on the appointment section.
pub const APPOINTMENT_SENTINEL: &str = "appointment_ah";

/// Maximum number of non-dependent fields shown before the overflow split.
pub const VISIBLE_FIELD_LIMIT: usize = 4;

/// Conditional display group a dependent field is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyGroup {
    Installation,
    Appointment,
}

impl DependencyGroup {
    /// Match a `dependent_field` routing key against the known sentinels.
    /// Exact match only; any other key has no group.
    pub fn from_sentinel(value: &str) -> Option<Self> {
        match value {
            INSTALLATION_SENTINEL => Some(DependencyGroup::Installation),
            APPOINTMENT_SENTINEL => Some(DependencyGroup::Appointment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyGroup::Installation => "installation",
            DependencyGroup::Appointment => "appointment",
        }
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The categorizer's output: four disjoint, order-preserving buckets of
/// normalized fields. Rebuilt in full on every run; never updated
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPartition {
    /// Always-shown head, at most [`VISIBLE_FIELD_LIMIT`] entries.
    pub visible: Vec<PartnerField>,
    /// Overflow beyond the visible cap, shown only when expanded.
    pub extra: Vec<PartnerField>,
    /// Fields gated on [`INSTALLATION_SENTINEL`].
    pub installation: Vec<PartnerField>,
    /// Fields gated on [`APPOINTMENT_SENTINEL`].
    pub appointment: Vec<PartnerField>,
}

impl FieldPartition {
    /// Total number of fields across all four buckets.
    pub fn len(&self) -> usize {
        self.visible.len() + self.extra.len() + self.installation.len() + self.appointment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the overflow section has content to expand into.
    pub fn has_overflow(&self) -> bool {
        !self.extra.is_empty()
    }

    pub fn group(&self, group: DependencyGroup) -> &[PartnerField] {
        match group {
            DependencyGroup::Installation => &self.installation,
            DependencyGroup::Appointment => &self.appointment,
        }
    }
}
