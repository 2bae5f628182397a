use clap::Parser;
use std::path::PathBuf;

use crate::fs::filter::MATCH_ALL;

/// Rename files and directories, and replace text in file contents, using
/// regular expressions.
#[derive(Parser, Debug, Clone)]
#[command(name = "deepren", version, verbatim_doc_comment)]
pub struct TransformArgs {
    /// The directory path in which the renamings and replacings shall be made
    #[arg(value_name = "DIRECTORY_PATH")]
    pub directory_path: PathBuf,

    /// Regular expression to be found in names and contents
    #[arg(value_name = "FIND_PATTERN")]
    pub find_pattern: String,

    /// Text which replaces the matches of the find pattern
    ///
    /// Capture groups can be referenced as $1, ${1} or ${name}. Use $$ for a
    /// literal dollar sign.
    #[arg(value_name = "REPLACEMENT_TEXT")]
    pub replacement_text: String,

    /// File name glob restricting which files are processed
    ///
    /// Directories are always traversed and renamed regardless of the filter.
    #[arg(long, short = 'F', value_name = "GLOB", default_value = MATCH_ALL)]
    pub filter: String,

    /// Simulate the changes, printing the results without modifying anything
    #[arg(long, short = 'W')]
    pub whatif: bool,
}
