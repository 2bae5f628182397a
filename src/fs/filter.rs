//! File-name filter applied before content and name processing.

use crate::error::{DeepRenError, Result};
use glob::MatchOptions;

/// Filter matching every file, including names without an extension.
pub const MATCH_ALL: &str = "*.*";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Glob over bare file names.
///
/// `*.*` keeps its DOS meaning and accepts any name, so `Makefile` passes
/// the default filter. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct FileFilter {
    glob: Option<glob::Pattern>,
}

impl FileFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern == MATCH_ALL || pattern == "*" {
            return Ok(Self::all());
        }

        let glob = glob::Pattern::new(pattern)
            .map_err(|e| DeepRenError::InvalidFilter(pattern.to_string(), e))?;

        Ok(Self { glob: Some(glob) })
    }

    pub fn all() -> Self {
        Self { glob: None }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match &self.glob {
            Some(glob) => glob.matches_with(file_name, MATCH_OPTIONS),
            None => true,
        }
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::all()
    }
}
