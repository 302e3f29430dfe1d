use std::fs::{self, File};
use std::io::BufReader;

use tempfile::TempDir;

use super::*;

#[test]
fn counter_reads_files_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.rs");
    fs::write(&path, "fn main() {\n\n    println!(\"hello\");\n}\n").unwrap();

    let omitting = LineCounter::new(true);
    let counting = LineCounter::new(false);

    let file = BufReader::new(File::open(&path).unwrap());
    assert_eq!(omitting.count_reader(file).unwrap(), 3);
    let file = BufReader::new(File::open(&path).unwrap());
    assert_eq!(counting.count_reader(file).unwrap(), 4);
}
