//! Test harness for codebase-extractor integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory tree to scan, plus a separate directory for outputs.
pub struct TestTree {
    dir: TempDir,
    out: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            out: TempDir::new().expect("Failed to create output dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> &Path {
        self.out.path()
    }

    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    pub fn root_name(&self) -> String {
        self.path()
            .file_name()
            .expect("temp dir has a name")
            .to_string_lossy()
            .to_string()
    }

    /// Command scanning this tree, run from the output directory.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("codebase-extractor").expect("binary is built");
        cmd.current_dir(self.out_dir())
            .arg("-d")
            .arg(self.path())
            .args(args);
        cmd
    }

    pub fn hierarchy(&self, prefix: &str) -> String {
        fs::read_to_string(self.out_dir().join(format!("{}_hierarchy.txt", prefix)))
            .expect("Failed to read hierarchy output")
    }

    pub fn contents_raw(&self, prefix: &str) -> String {
        fs::read_to_string(self.out_dir().join(format!("{}_contents.json", prefix)))
            .expect("Failed to read contents output")
    }

    /// Contents records keyed by `file_name`.
    pub fn contents(&self, prefix: &str) -> BTreeMap<String, Value> {
        let parsed: Value = serde_json::from_str(&self.contents_raw(prefix)).expect("valid JSON");
        parsed
            .as_array()
            .expect("top-level array")
            .iter()
            .map(|rec| {
                let name = rec["file_name"].as_str().expect("file_name string").to_string();
                (name, rec.clone())
            })
            .collect()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
