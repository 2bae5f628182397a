//! Single-entry rename primitives.
//!
//! Every rename is planned first and applied second. Planning validates the
//! new name and refuses existing targets; applying only moves.
//!
//! A rename that only changes letter case is a no-op (or an error) on
//! case-insensitive file systems, so directories go through a temporary
//! name in that case.

use crate::error::{DeepRenError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker appended to the new name for the first half of a two-step rename.
pub const TEMP_SUFFIX: &str = "___TEMP";

/// Returns true if `old` and `new` differ at most in letter case.
pub fn is_case_only_change(old: &str, new: &str) -> bool {
    old.to_lowercase() == new.to_lowercase()
}

/// Rejects names that would escape the parent directory or cannot exist.
pub fn validate_new_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DeepRenError::InvalidName(
            name.to_string(),
            "replacement produced an empty name".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(DeepRenError::InvalidName(
            name.to_string(),
            "cannot use '.' or '..'".to_string(),
        ));
    }

    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) || name.contains('\0') {
        return Err(DeepRenError::InvalidName(
            name.to_string(),
            "contains a path separator".to_string(),
        ));
    }

    #[cfg(windows)]
    validate_windows_name(name)?;

    Ok(())
}

#[cfg(windows)]
const WINDOWS_RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[cfg(windows)]
fn validate_windows_name(name: &str) -> Result<()> {
    const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

    let base = name.split('.').next().unwrap_or(name).to_uppercase();
    if WINDOWS_RESERVED_NAMES.contains(&base.as_str()) {
        return Err(DeepRenError::InvalidName(
            name.to_string(),
            "is a Windows reserved name".to_string(),
        ));
    }

    if let Some(ch) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(DeepRenError::InvalidName(
            name.to_string(),
            format!("contains invalid char '{}'", ch),
        ));
    }

    Ok(())
}

/// A rename that has passed every check and only needs to be applied.
///
/// Planning only reads metadata, so what-if runs hit the same failures as
/// real runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    from: PathBuf,
    to: PathBuf,
    /// Intermediate name for a case-only directory rename.
    via: Option<PathBuf>,
}

impl PlannedRename {
    pub fn from(&self) -> &Path {
        &self.from
    }

    pub fn to(&self) -> &Path {
        &self.to
    }

    /// Moves the entry. If the second step of a two-step rename fails, the
    /// entry is moved back to its original name.
    pub fn apply(&self) -> Result<()> {
        let Some(via) = &self.via else {
            return move_entry(&self.from, &self.to);
        };

        log::debug!(
            "Case-only rename {} → {} via {}",
            self.from.display(),
            self.to.display(),
            via.display()
        );

        move_entry(&self.from, via)?;
        if let Err(e) = move_entry(via, &self.to) {
            if let Err(restore) = fs::rename(via, &self.from) {
                log::warn!(
                    "Could not restore {} after failed rename: {}",
                    self.from.display(),
                    restore
                );
            }
            return Err(e);
        }

        Ok(())
    }
}

/// Checks renaming the directory `parent/old_name` to `parent/new_name`.
///
/// Case-only changes are planned through `<new_name>___TEMP`, which must
/// not exist yet.
pub fn plan_directory_rename(
    parent: &Path,
    old_name: &str,
    new_name: &str,
) -> Result<PlannedRename> {
    let mut plan = plan_file_rename(parent, old_name, new_name)?;

    if is_case_only_change(old_name, new_name) {
        let via = parent.join(format!("{}{}", new_name, TEMP_SUFFIX));
        if fs::symlink_metadata(&via).is_ok() {
            return Err(DeepRenError::TargetExists(via));
        }
        plan.via = Some(via);
    }

    Ok(plan)
}

/// Checks renaming the file `parent/old_name` to `parent/new_name`.
pub fn plan_file_rename(
    parent: &Path,
    old_name: &str,
    new_name: &str,
) -> Result<PlannedRename> {
    validate_new_name(new_name)?;

    let from = parent.join(old_name);
    let to = parent.join(new_name);
    ensure_target_free(&from, &to)?;

    Ok(PlannedRename { from, to, via: None })
}

fn move_entry(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to)
        .with_context(|| format!("Failed to move {} to {}", from.display(), to.display()))?;
    Ok(())
}

/// Fails if `to` exists and is a different entry than `from`.
///
/// On case-insensitive file systems `to` resolves to `from` itself for a
/// case-only change, which is allowed.
fn ensure_target_free(from: &Path, to: &Path) -> Result<()> {
    if fs::symlink_metadata(to).is_err() {
        return Ok(());
    }

    if is_same_entry(from, to)? {
        return Ok(());
    }

    Err(DeepRenError::TargetExists(to.to_path_buf()))
}

#[cfg(unix)]
fn is_same_entry(a: &Path, b: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let a = fs::symlink_metadata(a)?;
    let b = fs::symlink_metadata(b)?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn is_same_entry(a: &Path, b: &Path) -> Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}
