#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dirlines binary.
#[macro_export]
macro_rules! dirlines {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dirlines"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `a.go` (3 lines), `b.go` (2 lines, 1 blank) and `c.txt` (5 lines).
    pub fn with_mixed_sources() -> Self {
        let fixture = Self::new();
        fixture.create_file("a.go", "package a\nfunc A() {}\nvar x = 1\n");
        fixture.create_file("b.go", "package b\n\n");
        fixture.create_file("c.txt", "one\ntwo\nthree\nfour\nfive\n");
        fixture
    }
}
