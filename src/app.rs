// Declare modules
pub mod cli;
pub mod config;
pub mod filter;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod tree;

use anyhow::Result;
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::scanner::Scanner;
use self::tree::TreeRenderer;

/// Initializes components and orchestrates data flow.
///
/// The hierarchy and the contents come from two separate walks. If the tree
/// changes between them the two documents can disagree.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;
    log::info!("Scanning {}", config.traversal.root.display());

    // 3. Render hierarchy
    let tree_lines = TreeRenderer::new(&config.traversal).render()?;

    // 4. Scan contents
    let records = Scanner::new(&config.traversal).scan()?;
    if records.is_empty() {
        log::warn!("No files matched the extension allow-list");
    }

    // 5. Persist and report
    let (hierarchy_file, contents_file) =
        OutputGenerator::write_outputs(&config.output_prefix, &tree_lines, &records)?;

    println!("File hierarchy written to {}", hierarchy_file.display());
    println!("File contents written to {}", contents_file.display());

    Ok(())
}
