//! File system side of a transform: filtering, renaming and the tree walk.

pub mod filter;
pub mod rename;
pub mod walker;

pub use filter::FileFilter;
pub use walker::{TransformRequest, Walker};
