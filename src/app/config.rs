use crate::app::cli::Cli;
use crate::app::models::{RuntimeConfig, TraversalConfig};
use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Prefixes a dot where missing and lower-cases, so `TXT` and `.txt` coincide.
fn normalize_extensions(raw: Vec<String>) -> BTreeSet<String> {
    raw.into_iter()
        .map(|ext| {
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .map(|ext| ext.to_lowercase())
        .collect()
}

/// Absolute form of `path` with `.` and `..` collapsed lexically. Symlinks are left alone.
fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let root = absolutize(&cli.directory, &current_dir);

    if !root.is_dir() {
        bail!("Root directory {:?} does not exist or is not a directory", root);
    }

    let config = RuntimeConfig {
        traversal: TraversalConfig {
            root,
            extensions: normalize_extensions(cli.extensions),
            exclude: cli.exclude.into_iter().collect(),
            include_hidden: cli.include_hidden,
        },
        output_prefix: cli.output,
    };

    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
