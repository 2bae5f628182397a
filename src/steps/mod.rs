//! Top-level orchestration of a run.

pub mod transform;
