//! Pre-flight checks performed before any traversal.
//!
//! Every configuration error is raised here, so a run that fails never
//! touches the tree.

use crate::cli::TransformArgs;
use crate::error::Result;
use crate::fs::{FileFilter, TransformRequest};
use crate::rewrite::Pattern;
use crate::verify::rules::{unknown_group_references, validate_root_path};

/// Validates the arguments and builds the request for the walker.
///
/// # Errors
///
/// - `PathNotFound` / `NotADirectory` for a bad root
/// - `InvalidPattern` if the find pattern does not compile
/// - `InvalidFilter` if the `--filter` glob does not parse
pub fn preflight_checks(args: &TransformArgs) -> Result<TransformRequest> {
    validate_root_path(&args.directory_path)?;

    let pattern = Pattern::new(&args.find_pattern, args.replacement_text.as_str())?;
    for group in unknown_group_references(&pattern) {
        log::warn!(
            "Replacement references group '{}' which the find pattern does not define; it will expand to nothing",
            group
        );
    }

    let filter = FileFilter::new(&args.filter)?;

    log::debug!(
        "Root {}, pattern '{}', replacement '{}', filter '{}'",
        args.directory_path.display(),
        pattern.as_str(),
        pattern.replacement(),
        args.filter
    );

    Ok(TransformRequest {
        root: args.directory_path.clone(),
        pattern,
        filter,
        simulate: args.whatif,
    })
}
