use std::collections::HashSet;
use std::path::Path;

use super::extension_of;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Allow-list of dotted extensions (e.g. `".rs"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: HashSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from extension names given without the leading dot.
    ///
    /// Names are not validated; duplicates collapse.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = names
            .into_iter()
            .map(|name| format!(".{}", name.as_ref()))
            .collect();
        Self { extensions }
    }

    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Accepted extensions in sorted order.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.contains(&extension_of(path))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
