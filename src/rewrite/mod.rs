//! Pattern matching and substitution applied to names and file contents.

pub mod pattern;

pub use pattern::Pattern;
