use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Filtering rules shared by both passes over the tree. Never mutated once resolved.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub root: PathBuf,
    /// Lower-cased, dot-prefixed extensions eligible for content scanning.
    pub extensions: BTreeSet<String>,
    /// Directory names pruned wherever they occur.
    pub exclude: BTreeSet<String>,
    pub include_hidden: bool,
}

/// Represents the final configuration after normalizing CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub traversal: TraversalConfig,
    pub output_prefix: String,
}

/// One entry found while listing a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Symlink resolving to a directory: never listed, never followed.
    LinkedDir,
}

/// A single rendered line of the hierarchy listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

/// Result of reading one qualifying file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Success {
        text: String,
        last_modified: String,
        size: u64,
    },
    Failure(String),
}

/// Serialized shape of a file in the contents document. Key order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub file_name: String,
    pub file_text: String,
    pub last_modified: Option<String>,
    pub size: Option<u64>,
}

impl FileRecord {
    pub fn new(file_name: String, outcome: ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::Success {
                text,
                last_modified,
                size,
            } => Self {
                file_name,
                file_text: text,
                last_modified: Some(last_modified),
                size: Some(size),
            },
            ScanOutcome::Failure(message) => Self {
                file_name,
                file_text: message,
                last_modified: None,
                size: None,
            },
        }
    }
}
