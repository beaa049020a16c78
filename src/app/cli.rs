use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Codebase Extractor Utility: dump a directory hierarchy and file contents"
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(short = 'd', long, default_value = ".")]
    pub directory: PathBuf,

    /// File extensions to include (e.g., .py .txt .md)
    #[arg(short = 'e', long, num_args = 1.., default_values = [".py", ".txt", ".md"])]
    pub extensions: Vec<String>,

    /// Directories to exclude, matched by name anywhere in the tree
    #[arg(short = 'x', long, num_args = 1.., default_values = [".git", "__pycache__", "venv", "node_modules"])]
    pub exclude: Vec<String>,

    /// Output file prefix
    #[arg(short = 'o', long, default_value = "output")]
    pub output: String,

    /// Include hidden files and directories (starting with a dot)
    #[arg(short = 'i', long)]
    pub include_hidden: bool,
}
