use crate::app::filter::{classify, EntryFilter};
use crate::app::models::{EntryKind, FileRecord, ScanOutcome, TraversalConfig};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Collects text and metadata for every file in the allow-list.
pub struct Scanner {
    root: PathBuf,
    filter: EntryFilter,
}

impl Scanner {
    pub fn new(config: &TraversalConfig) -> Self {
        Self {
            root: config.root.clone(),
            filter: EntryFilter::new(config),
        }
    }

    /// Walks the tree with the shared predicates installed as an entry filter,
    /// so pruned directories are never opened. Traversal errors are fatal;
    /// per-file read errors become placeholder records.
    pub fn scan(&self) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();

        let filter = self.filter.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| admits(&filter, entry))
            .build();

        for result in walker {
            let entry = result.context("Error walking directory tree")?;
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if classify(entry.path(), file_type) != EntryKind::File {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.filter.wants_content(&name) {
                continue;
            }

            records.push(self.process_file(entry.path())?);
        }

        log::info!("Scanned {} files for content", records.len());
        Ok(records)
    }

    fn process_file(&self, path: &Path) -> Result<FileRecord> {
        let relative = diff_paths(path, &self.root)
            .with_context(|| format!("Cannot express {:?} relative to {:?}", path, self.root))?;
        let file_name = relative.to_string_lossy().replace('\\', "/");

        let outcome = read_file(path);
        if let ScanOutcome::Failure(message) = &outcome {
            log::warn!("{}: {}", file_name, message);
        } else {
            log::debug!("Read {}", file_name);
        }
        Ok(FileRecord::new(file_name, outcome))
    }
}

fn admits(filter: &EntryFilter, entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    match entry.file_type() {
        Some(ft) if ft.is_dir() => {
            let keep = filter.admits_dir(&name);
            if !keep {
                log::debug!("Pruned directory {:?}", entry.path());
            }
            keep
        }
        _ => filter.admits_file(&name),
    }
}

/// Reads one file as strict UTF-8 with universal newlines, plus its metadata.
pub fn read_file(path: &Path) -> ScanOutcome {
    match try_read_file(path) {
        Ok(outcome) => outcome,
        Err(err) => ScanOutcome::Failure(format!("Error reading file: {}", err)),
    }
}

fn try_read_file(path: &Path) -> Result<ScanOutcome> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    let metadata = fs::metadata(path)?;
    let modified: DateTime<Local> = metadata.modified()?.into();

    Ok(ScanOutcome::Success {
        text: normalize_newlines(&text),
        last_modified: modified.format(TIMESTAMP_FORMAT).to_string(),
        size: metadata.len(),
    })
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}
