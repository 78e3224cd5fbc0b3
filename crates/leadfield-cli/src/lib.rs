//! CLI library components for the partner field viewer.

pub mod logging;
