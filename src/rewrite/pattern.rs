//! Regex matching and substitution for names and file contents.
//!
//! Replacement templates use the `regex` crate syntax: `$1`, `${1}`,
//! `${name}`, and `$$` for a literal dollar sign.

use crate::error::{DeepRenError, Result};
use regex::Regex;
use std::borrow::Cow;

/// A compiled find pattern paired with its replacement template.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    replacement: String,
}

impl Pattern {
    /// Compiles `find` and stores `replacement` for later substitution.
    pub fn new(find: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex =
            Regex::new(find).map_err(|e| DeepRenError::InvalidPattern(find.to_string(), e))?;

        Ok(Self {
            regex,
            replacement: replacement.into(),
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Substitutes every match with the expanded replacement template.
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }

    /// Returns true if the regex defines the group `name` (index or name).
    pub fn has_group(&self, name: &str) -> bool {
        match name.parse::<usize>() {
            Ok(index) => index < self.regex.captures_len(),
            Err(_) => self.regex.capture_names().flatten().any(|n| n == name),
        }
    }
}
