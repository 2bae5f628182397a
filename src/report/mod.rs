//! Reporting of transform actions, per-item errors and the final summary.
//!
//! The walker never prints. It emits [`Report`] events to a [`Reporter`],
//! which decides how to render them: [`ConsoleReporter`] writes colored
//! lines to stdout, [`MemoryReporter`] keeps them for inspection.

mod console;
mod counts;

pub use console::ConsoleReporter;
pub use counts::AffectedCounts;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// A single line of output produced during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Tool name and version, printed once before traversal.
    Banner { version: String },
    /// What-if mode notice.
    WhatIf,
    DirectoryRenamed { from: PathBuf, to: PathBuf },
    ContentReplaced {
        path: PathBuf,
        occurrences: usize,
        pattern: String,
        replacement: String,
    },
    FileRenamed { from: PathBuf, to: PathBuf },
    /// A per-item failure. Traversal continues after it.
    Failed { path: PathBuf, message: String },
    Summary {
        elapsed: Duration,
        counts: AffectedCounts,
    },
}

impl Report {
    /// Returns true for lines describing a (possibly simulated) mutation.
    pub fn is_action(&self) -> bool {
        matches!(
            self,
            Report::DirectoryRenamed { .. }
                | Report::ContentReplaced { .. }
                | Report::FileRenamed { .. }
        )
    }

    /// Builds a `Failed` line, flattening the error's source chain.
    pub fn failed(path: impl Into<PathBuf>, error: &dyn std::error::Error) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }

        Report::Failed {
            path: path.into(),
            message,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Banner { version } => write!(f, "deepren {}", version),
            Report::WhatIf => write!(f, "WhatIf option applied. No changes will be made."),
            Report::DirectoryRenamed { from, to } => write!(
                f,
                "Renamed directory \"{}\" to \"{}\"",
                from.display(),
                to.display()
            ),
            Report::ContentReplaced {
                path,
                occurrences,
                pattern,
                replacement,
            } => write!(
                f,
                "Replaced {} occurrences of \"{}\" in contents of \"{}\" with \"{}\"",
                occurrences,
                pattern,
                path.display(),
                replacement
            ),
            Report::FileRenamed { from, to } => write!(
                f,
                "Renamed file \"{}\" to \"{}\"",
                from.display(),
                to.display()
            ),
            Report::Failed { message, .. } => write!(f, "Error: {}", message),
            Report::Summary { elapsed, counts } => {
                writeln!(f, "Done in {:.2?}", elapsed)?;
                writeln!(f, "\t{} directories renamed", counts.directories_renamed)?;
                writeln!(
                    f,
                    "\t{} replacements made in {} files",
                    counts.replacements_made, counts.files_replaced
                )?;
                write!(f, "\t{} files renamed", counts.files_renamed)
            }
        }
    }
}

/// Sink for report lines.
pub trait Reporter {
    fn emit(&mut self, report: &Report);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn emit(&mut self, report: &Report) {
        (**self).emit(report);
    }
}

/// Collects reports in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Vec<Report>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Action lines only, rendered as plain text.
    pub fn action_lines(&self) -> Vec<String> {
        self.reports
            .iter()
            .filter(|r| r.is_action())
            .map(ToString::to_string)
            .collect()
    }

    pub fn failures(&self) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|r| matches!(r, Report::Failed { .. }))
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn emit(&mut self, report: &Report) {
        self.reports.push(report.clone());
    }
}
