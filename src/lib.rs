pub mod cli;
pub mod counter;
pub mod error;
pub mod output;
pub mod scanner;
pub mod walker;

pub use error::{DirLinesError, Result};
pub use walker::{ExtensionTotal, Report, Walker};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_USAGE_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
