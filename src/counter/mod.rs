mod lines;

pub use lines::LineCounter;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
