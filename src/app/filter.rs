use crate::app::models::{EntryKind, TraversalConfig};
use std::collections::BTreeSet;
use std::fs::FileType;
use std::path::Path;

/// Admission rules applied to every entry below the root.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    extensions: BTreeSet<String>,
    exclude: BTreeSet<String>,
    include_hidden: bool,
}

impl EntryFilter {
    pub fn new(config: &TraversalConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            exclude: config.exclude.clone(),
            include_hidden: config.include_hidden,
        }
    }

    /// Whether a directory with this name may be descended into.
    pub fn admits_dir(&self, name: &str) -> bool {
        (self.include_hidden || !is_hidden(name)) && !self.exclude.contains(name)
    }

    /// Whether a file with this name shows up in either pass.
    pub fn admits_file(&self, name: &str) -> bool {
        self.include_hidden || !is_hidden(name)
    }

    /// Whether an admitted file's text goes into the contents document.
    pub fn wants_content(&self, name: &str) -> bool {
        extension_of(name)
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Last dot-suffix of a file name, dot included. Leading dots do not start
/// an extension, so `.bashrc` has none while `notes.` has `.`.
pub fn extension_of(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    name[stem_start..]
        .rfind('.')
        .map(|idx| &name[stem_start + idx..])
}

/// Sorts an entry the way the walk treats it. `file_type` must come from
/// lstat so symlinks are seen as such.
pub fn classify(path: &Path, file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() && path.is_dir() {
        EntryKind::LinkedDir
    } else {
        EntryKind::File
    }
}
