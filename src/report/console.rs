use super::{Report, Reporter};
use colored::Colorize;

/// Writes colored report lines to stdout.
///
/// Per-item errors go to stdout too, so they stay interleaved with the
/// action lines that surround them.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&mut self, report: &Report) {
        match report {
            Report::Banner { version } => {
                println!("{} {}", "deepren".bold(), version.dimmed());
            }
            Report::WhatIf => {
                println!(
                    "{}",
                    " WhatIf option applied. No changes will be made. "
                        .black()
                        .on_yellow()
                );
            }
            Report::DirectoryRenamed { from, to } => {
                println!(
                    "{:>12} directory \"{}\" to \"{}\"",
                    "Renamed".green().bold(),
                    from.display().to_string().bold(),
                    to.display().to_string().bold()
                );
            }
            Report::ContentReplaced {
                path,
                occurrences,
                pattern,
                replacement,
            } => {
                println!(
                    "{:>12} {} occurrences of \"{}\" in contents of \"{}\" with \"{}\"",
                    "Replaced".green().bold(),
                    occurrences.to_string().bold(),
                    pattern.bold(),
                    path.display().to_string().bold(),
                    replacement.bold()
                );
            }
            Report::FileRenamed { from, to } => {
                println!(
                    "{:>12} file \"{}\" to \"{}\"",
                    "Renamed".green().bold(),
                    from.display().to_string().bold(),
                    to.display().to_string().bold()
                );
            }
            Report::Failed { message, .. } => {
                println!("{:>12} {}", "Error".red().bold(), message.red());
            }
            Report::Summary { elapsed, counts } => {
                println!();
                println!(
                    "{} {}",
                    "Done in".green(),
                    format!("{:.2?}", elapsed).green().bold()
                );
                println!(
                    "\t{} directories renamed",
                    counts.directories_renamed.to_string().cyan().bold()
                );
                println!(
                    "\t{} replacements made in {} files",
                    counts.replacements_made.to_string().cyan().bold(),
                    counts.files_replaced.to_string().cyan().bold()
                );
                println!(
                    "\t{} files renamed",
                    counts.files_renamed.to_string().cyan().bold()
                );
            }
        }
    }
}
