use crate::app::filter::{classify, EntryFilter};
use crate::app::models::{EntryKind, TraversalConfig, TreeLine};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the pre-order directory outline.
pub struct TreeRenderer {
    root: PathBuf,
    filter: EntryFilter,
}

impl TreeRenderer {
    pub fn new(config: &TraversalConfig) -> Self {
        Self {
            root: config.root.clone(),
            filter: EntryFilter::new(config),
        }
    }

    /// Walks the whole tree. Any directory that cannot be listed aborts the walk.
    pub fn render(&self) -> Result<Vec<TreeLine>> {
        let mut lines = Vec::new();
        let root_name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string().trim_end_matches('/').to_string());
        self.visit(&self.root, root_name, 0, &mut lines)?;

        log::info!("Rendered {} hierarchy lines", lines.len());
        Ok(lines)
    }

    fn visit(&self, dir: &Path, name: String, depth: usize, lines: &mut Vec<TreeLine>) -> Result<()> {
        lines.push(TreeLine {
            depth,
            name,
            is_dir: true,
        });

        let mut subdirs = Vec::new();
        let mut files = Vec::new();

        let listing = fs::read_dir(dir).with_context(|| format!("Failed to read directory {:?}", dir))?;
        for entry in listing {
            let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to stat {:?}", entry.path()))?;
            let entry_name = entry.file_name().to_string_lossy().into_owned();

            match classify(&entry.path(), file_type) {
                EntryKind::Dir if self.filter.admits_dir(&entry_name) => {
                    subdirs.push((entry.path(), entry_name));
                }
                EntryKind::Dir => log::debug!("Pruned directory {:?}", entry.path()),
                EntryKind::File if self.filter.admits_file(&entry_name) => files.push(entry_name),
                EntryKind::File | EntryKind::LinkedDir => {}
            }
        }

        files.sort();
        lines.extend(files.into_iter().map(|name| TreeLine {
            depth: depth + 1,
            name,
            is_dir: false,
        }));

        for (path, name) in subdirs {
            self.visit(&path, name, depth + 1, lines)?;
        }
        Ok(())
    }
}
