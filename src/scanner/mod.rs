mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::Path;

/// Extension of the final path component, starting at its last dot and including it.
///
/// Returns an empty string when the file name has no dot. Dotfiles such as
/// `.gitignore` are treated as all-extension (`".gitignore"`), and a trailing dot
/// yields `"."`.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    name.rfind('.')
        .map_or_else(String::new, |idx| name[idx..].to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
