//! Validation rules for the root path and the replacement template.

use crate::error::{DeepRenError, Result};
use crate::rewrite::Pattern;
use std::path::Path;

/// Validates that the root exists and is a directory.
pub fn validate_root_path(path: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DeepRenError::PathNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(DeepRenError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Extracts the group references (`$1`, `${1}`, `$name`, `${name}`) from a
/// replacement template. `$$` is a literal dollar and is skipped.
pub fn template_group_references(template: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        rest = &rest[pos + 1..];

        if let Some(after) = rest.strip_prefix('$') {
            rest = after;
            continue;
        }

        if let Some(braced) = rest.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                if end > 0 {
                    refs.push(&braced[..end]);
                }
                rest = &braced[end + 1..];
            }
            continue;
        }

        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if len > 0 {
            refs.push(&rest[..len]);
            rest = &rest[len..];
        }
    }

    refs
}

/// Group references in the replacement that the find pattern does not
/// define. The regex engine expands those to an empty string.
pub fn unknown_group_references(pattern: &Pattern) -> Vec<String> {
    template_group_references(pattern.replacement())
        .into_iter()
        .filter(|group| !pattern.has_group(group))
        .map(str::to_string)
        .collect()
}
