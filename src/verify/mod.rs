//! Validation performed before a transform starts.

pub mod preflight;
pub mod rules;

pub use preflight::preflight_checks;
pub use rules::{template_group_references, unknown_group_references, validate_root_path};
