use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, trace};
use walkdir::{DirEntry, WalkDir};

use crate::counter::LineCounter;
use crate::error::{DirLinesError, Result};
use crate::output::{OutputFormat, write_stdout};
use crate::scanner::{ExtensionFilter, FileFilter, extension_of};

/// Line totals for a single extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionTotal {
    pub extension: String,
    pub lines: usize,
}

/// Read-only snapshot of a finished scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total: usize,
    pub files: usize,
    pub by_extension: Vec<ExtensionTotal>,
}

/// Walks a directory tree and accumulates line counts per extension.
///
/// `lines_total` always equals the sum of the per-extension counts, including
/// after a failed scan, which keeps whatever was counted before the failure.
#[derive(Debug, Default)]
pub struct Walker {
    lines_total: usize,
    files_scanned: usize,
    extension_counter: HashMap<String, usize>,
    accepted_extensions: Option<ExtensionFilter>,
    omit_blank: bool,
}

impl Walker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only scan files whose extension is in `names` (given without the dot).
    /// Replaces any previous filter.
    pub fn with_accepted_extensions<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.accepted_extensions = Some(ExtensionFilter::new(names));
    }

    pub const fn with_omit_blank(&mut self) {
        self.omit_blank = true;
    }

    #[must_use]
    pub const fn lines_total(&self) -> usize {
        self.lines_total
    }

    #[must_use]
    pub const fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    #[must_use]
    pub const fn extension_counter(&self) -> &HashMap<String, usize> {
        &self.extension_counter
    }

    #[must_use]
    pub const fn accepted_extensions(&self) -> Option<&ExtensionFilter> {
        self.accepted_extensions.as_ref()
    }

    #[must_use]
    pub const fn omit_blank(&self) -> bool {
        self.omit_blank
    }

    /// Recursively count lines of every accepted file under `root`.
    ///
    /// Entries are visited depth-first in file name order. The first entry that
    /// cannot be read aborts the whole scan.
    ///
    /// # Errors
    /// Returns an error if an entry cannot be enumerated or a file cannot be
    /// opened or read.
    pub fn count_lines(&mut self, root: &Path) -> Result<()> {
        let counter = LineCounter::new(self.omit_blank);

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| DirLinesError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;

            if is_directory(&entry) {
                continue;
            }

            let path = entry.path();
            if let Some(filter) = &self.accepted_extensions
                && !filter.should_include(path)
            {
                trace!(path = %path.display(), "skipping file outside accepted extensions");
                continue;
            }

            let lines = count_file(&counter, path)?;
            self.record(extension_of(path), lines);
            debug!(path = %path.display(), lines, "counted file");
        }

        info!(
            root = %root.display(),
            files = self.files_scanned,
            lines = self.lines_total,
            "scan complete"
        );
        Ok(())
    }

    fn record(&mut self, extension: String, lines: usize) {
        self.lines_total += lines;
        self.files_scanned += 1;
        *self.extension_counter.entry(extension).or_insert(0) += lines;
    }

    /// Snapshot of the current totals, sorted by extension.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut by_extension: Vec<ExtensionTotal> = self
            .extension_counter
            .iter()
            .map(|(extension, &lines)| ExtensionTotal {
                extension: extension.clone(),
                lines,
            })
            .collect();
        by_extension.sort_by(|a, b| a.extension.cmp(&b.extension));

        Report {
            total: self.lines_total,
            files: self.files_scanned,
            by_extension,
        }
    }

    /// Write the text report to stdout.
    ///
    /// # Errors
    /// Returns an error if stdout cannot be written.
    pub fn print(&self) -> Result<()> {
        self.print_with(OutputFormat::Text)
    }

    /// Write the report to stdout in the given format.
    ///
    /// # Errors
    /// Returns an error if formatting fails or stdout cannot be written.
    pub fn print_with(&self, format: OutputFormat) -> Result<()> {
        let output = format.formatter().format(&self.report())?;
        write_stdout(&output)
    }
}

/// Directories, and symlinks pointing at directories, contribute nothing.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn count_file(counter: &LineCounter, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|source| DirLinesError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    counter
        .count_reader(BufReader::new(file))
        .map_err(|source| DirLinesError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
