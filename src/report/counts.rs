/// Tally of everything a transform changed (or would change in what-if mode).
///
/// One instance is created per run and threaded through the whole recursion
/// as `&mut`. Fields only ever grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AffectedCounts {
    pub directories_renamed: usize,
    pub files_renamed: usize,
    pub files_replaced: usize,
    pub replacements_made: usize,
}

impl AffectedCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_directory_renamed(&mut self) {
        self.directories_renamed += 1;
    }

    pub fn record_file_renamed(&mut self) {
        self.files_renamed += 1;
    }

    /// Records one file whose contents had `occurrences` matches replaced.
    pub fn record_replacements(&mut self, occurrences: usize) {
        self.files_replaced += 1;
        self.replacements_made += occurrences;
    }

    /// Returns true if nothing was touched.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
