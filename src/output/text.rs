use std::fmt::Write;

use crate::error::Result;
use crate::walker::Report;

use super::ReportFormatter;

pub const TOTAL_LABEL: &str = "Total number of lines in directory:";

/// Plain report: the grand total, then one tab-aligned line per extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{TOTAL_LABEL} {}", report.total).ok();
        for entry in &report.by_extension {
            writeln!(output, "{}{}", tabulate(&entry.extension), entry.lines).ok();
        }

        Ok(output)
    }
}

/// Pad an extension label so the following number lines up.
///
/// Labels longer than three bytes get one tab, shorter ones two.
#[must_use]
pub fn tabulate(label: &str) -> String {
    if label.len() > 3 {
        format!("{label}\t")
    } else {
        format!("{label}\t\t")
    }
}
