#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod report;
pub mod rewrite;
pub mod steps;
pub mod verify;

pub use error::*;
pub use fs::{FileFilter, TransformRequest, Walker};
pub use report::{AffectedCounts, Report, Reporter};
pub use rewrite::Pattern;
pub use steps::transform::{TransformSummary, run_transform};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let args = cli::TransformArgs::parse();
    steps::transform::execute(args)?;
    Ok(())
}
