//! Depth-first tree transform.
//!
//! ## Order
//!
//! For every directory:
//!
//! 1. Snapshot the subdirectory names (sorted).
//! 2. For each subdirectory, recurse into it, then rename it.
//! 3. Snapshot the file names that pass the filter (sorted) and, for each,
//!    rewrite its contents and then rename it.
//!
//! A subdirectory is renamed only after its whole subtree is done, so paths
//! computed from its old name stay valid during recursion. The child lists
//! are read before anything is mutated. Symlinked directories are renamed
//! but never entered.
//!
//! ## Failures
//!
//! Each directory rename and each file is handled in its own `Result`. An
//! error becomes a [`Report::Failed`] line and the walk moves on to the next
//! sibling. Failed items never bump a counter.

use crate::error::Result;
use crate::fs::filter::FileFilter;
use crate::fs::rename;
use crate::report::{AffectedCounts, Report, Reporter};
use crate::rewrite::Pattern;

use anyhow::Context;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    pub root: PathBuf,
    pub pattern: Pattern,
    pub filter: FileFilter,
    /// When set, nothing on disk is touched but everything is still
    /// matched, counted and reported.
    pub simulate: bool,
}

/// Walks a tree and applies a [`TransformRequest`] to it.
pub struct Walker<'a, R: Reporter> {
    request: &'a TransformRequest,
    reporter: R,
}

impl<'a, R: Reporter> Walker<'a, R> {
    pub fn new(request: &'a TransformRequest, reporter: R) -> Self {
        Self { request, reporter }
    }

    /// Transforms everything below `directory`. The directory itself is
    /// never renamed.
    pub fn transform(&mut self, directory: &Path, counts: &mut AffectedCounts) {
        log::debug!("Entering {}", directory.display());

        let subdirectories = match list_entries(directory, EntryKind::Directory) {
            Ok(entries) => entries,
            Err(e) => {
                self.reporter.emit(&Report::failed(directory, &e));
                return;
            }
        };

        for entry in subdirectories {
            let path = directory.join(&entry.name);
            if !entry.is_symlink {
                self.transform(&path, counts);
            }

            let Some(name) = utf8_name(&entry.name, &path) else {
                continue;
            };
            if let Err(e) = self.rename_subdirectory(directory, name, counts) {
                self.reporter.emit(&Report::failed(path, &e));
            }
        }

        let files = match list_entries(directory, EntryKind::File) {
            Ok(entries) => entries,
            Err(e) => {
                self.reporter.emit(&Report::failed(directory, &e));
                return;
            }
        };

        for entry in files {
            let path = directory.join(&entry.name);
            let Some(name) = utf8_name(&entry.name, &path) else {
                continue;
            };
            if self.request.filter.matches(name) {
                self.visit_file(directory, name, counts);
            }
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn rename_subdirectory(
        &mut self,
        parent: &Path,
        name: &str,
        counts: &mut AffectedCounts,
    ) -> Result<()> {
        let pattern = &self.request.pattern;
        if !pattern.is_match(name) {
            return Ok(());
        }

        let plan = rename::plan_directory_rename(parent, name, &pattern.replace_all(name))?;
        if !self.request.simulate {
            plan.apply()?;
        }

        self.reporter.emit(&Report::DirectoryRenamed {
            from: plan.from().to_path_buf(),
            to: plan.to().to_path_buf(),
        });
        counts.record_directory_renamed();
        Ok(())
    }

    /// Processes one file, turning any error into a `Failed` line.
    fn visit_file(&mut self, parent: &Path, name: &str, counts: &mut AffectedCounts) {
        if let Err(e) = self.process_file(parent, name, counts) {
            self.reporter.emit(&Report::failed(parent.join(name), &e));
        }
    }

    /// Content first, then the name.
    fn process_file(
        &mut self,
        parent: &Path,
        name: &str,
        counts: &mut AffectedCounts,
    ) -> Result<()> {
        let path = parent.join(name);
        self.replace_contents(&path, counts)?;
        self.rename_file(parent, name, counts)
    }

    fn replace_contents(&mut self, path: &Path, counts: &mut AffectedCounts) -> Result<()> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                log::debug!("Skipping contents of non-UTF-8 file {}", path.display());
                return Ok(());
            }
        };

        let pattern = &self.request.pattern;
        let occurrences = pattern.count_matches(&content);
        if occurrences == 0 {
            return Ok(());
        }

        if !self.request.simulate {
            let replaced = pattern.replace_all(&content);
            fs::write(path, replaced.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        self.reporter.emit(&Report::ContentReplaced {
            path: path.to_path_buf(),
            occurrences,
            pattern: pattern.as_str().to_string(),
            replacement: pattern.replacement().to_string(),
        });
        counts.record_replacements(occurrences);
        Ok(())
    }

    fn rename_file(
        &mut self,
        parent: &Path,
        name: &str,
        counts: &mut AffectedCounts,
    ) -> Result<()> {
        let pattern = &self.request.pattern;
        if !pattern.is_match(name) {
            return Ok(());
        }

        let plan = rename::plan_file_rename(parent, name, &pattern.replace_all(name))?;
        if !self.request.simulate {
            plan.apply()?;
        }

        self.reporter.emit(&Report::FileRenamed {
            from: plan.from().to_path_buf(),
            to: plan.to().to_path_buf(),
        });
        counts.record_file_renamed();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: OsString,
    is_symlink: bool,
}

/// Sorted snapshot of the entries of one kind directly inside `directory`.
///
/// A symlink is classified by what it points at. Symlinked directories are
/// renamed like any directory but never descended into. Dangling symlinks
/// are skipped.
fn list_entries(directory: &Path, kind: EntryKind) -> Result<Vec<Entry>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory {}", directory.display()))?;

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory {}", directory.display()))?;
        let file_type = entry.file_type()?;
        let is_symlink = file_type.is_symlink();

        let entry_kind = if is_symlink {
            match fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => Some(EntryKind::Directory),
                Ok(target) if target.is_file() => Some(EntryKind::File),
                _ => None,
            }
        } else if file_type.is_dir() {
            Some(EntryKind::Directory)
        } else if file_type.is_file() {
            Some(EntryKind::File)
        } else {
            None
        };

        if entry_kind == Some(kind) {
            listed.push(Entry {
                name: entry.file_name(),
                is_symlink,
            });
        }
    }

    listed.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listed)
}

fn utf8_name<'n>(name: &'n OsString, path: &Path) -> Option<&'n str> {
    let name = name.to_str();
    if name.is_none() {
        log::warn!("Skipping non-UTF-8 name {}", path.display());
    }
    name
}
