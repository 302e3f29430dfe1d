use std::io::BufRead;

/// Counts lines of text, optionally leaving out blank ones.
///
/// A line is terminated by `\n`; a trailing `\r` belongs to the terminator. The last
/// line is counted even without a terminator, so an empty input has zero lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounter {
    omit_blank: bool,
}

impl LineCounter {
    #[must_use]
    pub const fn new(omit_blank: bool) -> Self {
        Self { omit_blank }
    }

    /// Count lines from a buffered reader without loading the whole input.
    ///
    /// Input does not need to be UTF-8.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<usize> {
        let mut count = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if self.omit_blank && is_blank(&buf) {
                continue;
            }
            count += 1;
        }

        Ok(count)
    }
}

fn is_blank(line: &[u8]) -> bool {
    if line.is_ascii() {
        return line.trim_ascii().is_empty();
    }
    String::from_utf8_lossy(line).trim().is_empty()
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
