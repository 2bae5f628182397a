//! Orchestration of a transform run.
//!
//! ## Phases
//!
//! 1. Print the banner
//! 2. Pre-flight checks (root path, pattern, filter)
//! 3. Walk the tree once, collecting counts
//! 4. Print the summary with the elapsed time
//!
//! Configuration errors stop the run in phase 2, before anything on disk is
//! touched. Per-item errors during the walk are reported inline and never
//! reach this level.

use crate::VERSION;
use crate::cli::TransformArgs;
use crate::error::Result;
use crate::fs::{TransformRequest, Walker};
use crate::report::{AffectedCounts, ConsoleReporter, Report, Reporter};
use crate::verify::{preflight_checks, validate_root_path};

use std::time::{Duration, Instant};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    pub counts: AffectedCounts,
    pub elapsed: Duration,
}

/// Executes a transform from parsed command-line arguments, printing to
/// the console.
pub fn execute(args: TransformArgs) -> Result<TransformSummary> {
    let mut reporter = ConsoleReporter::new();
    reporter.emit(&Report::Banner {
        version: VERSION.to_string(),
    });

    let request = preflight_checks(&args)?;
    run_transform(&request, &mut reporter)
}

/// Runs one transform over `request.root`.
///
/// Creates the only [`AffectedCounts`] and the only timer of the run, and
/// emits the summary once the walk is done.
pub fn run_transform<R: Reporter>(
    request: &TransformRequest,
    mut reporter: R,
) -> Result<TransformSummary> {
    validate_root_path(&request.root)?;

    if request.simulate {
        reporter.emit(&Report::WhatIf);
    }

    let started = Instant::now();
    let mut counts = AffectedCounts::new();

    let mut walker = Walker::new(request, &mut reporter);
    walker.transform(&request.root, &mut counts);

    let elapsed = started.elapsed();
    log::debug!("Transform of {} finished in {:?}", request.root.display(), elapsed);

    reporter.emit(&Report::Summary { elapsed, counts });

    Ok(TransformSummary { counts, elapsed })
}
