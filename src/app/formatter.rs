use crate::app::models::{FileRecord, TreeLine};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub const INDENT: &str = "    ";

pub struct OutputGenerator;

impl OutputGenerator {
    /// One line per entry, each newline-terminated.
    pub fn generate_tree(lines: &[TreeLine]) -> String {
        let mut output = String::new();
        for line in lines {
            let marker = if line.is_dir { "/" } else { "" };
            output.push_str(&format!("{}{}{}\n", INDENT.repeat(line.depth), line.name, marker));
        }
        output
    }

    /// Pretty JSON array with 2-space indent; non-ASCII stays literal.
    pub fn generate_contents(records: &[FileRecord]) -> Result<String> {
        serde_json::to_string_pretty(records).context("Failed to serialize file contents")
    }

    pub fn hierarchy_path(prefix: &str) -> PathBuf {
        PathBuf::from(format!("{}_hierarchy.txt", prefix))
    }

    pub fn contents_path(prefix: &str) -> PathBuf {
        PathBuf::from(format!("{}_contents.json", prefix))
    }

    /// Persists both documents, returning the hierarchy and contents paths.
    pub fn write_outputs(
        prefix: &str,
        lines: &[TreeLine],
        records: &[FileRecord],
    ) -> Result<(PathBuf, PathBuf)> {
        let hierarchy_file = Self::hierarchy_path(prefix);
        fs::write(&hierarchy_file, Self::generate_tree(lines))
            .with_context(|| format!("Failed to write {:?}", hierarchy_file))?;

        let contents_file = Self::contents_path(prefix);
        fs::write(&contents_file, Self::generate_contents(records)?)
            .with_context(|| format!("Failed to write {:?}", contents_file))?;

        Ok((hierarchy_file, contents_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::ScanOutcome;

    #[test]
    fn tree_text_is_newline_terminated() {
        let lines = vec![
            TreeLine {
                depth: 0,
                name: "proj".into(),
                is_dir: true,
            },
            TreeLine {
                depth: 1,
                name: "a.py".into(),
                is_dir: false,
            },
        ];
        assert_eq!(OutputGenerator::generate_tree(&lines), "proj/\n    a.py\n");
        assert_eq!(OutputGenerator::generate_tree(&[]), "");
    }

    #[test]
    fn contents_keep_key_order_nulls_and_unicode() {
        let records = vec![
            FileRecord::new(
                "a.md".into(),
                ScanOutcome::Success {
                    text: "héllo ✓".into(),
                    last_modified: "2024-01-02 03:04:05".into(),
                    size: 10,
                },
            ),
            FileRecord::new("b.md".into(), ScanOutcome::Failure("Error reading file: boom".into())),
        ];

        let json = OutputGenerator::generate_contents(&records).unwrap();
        let expected = r#"[
  {
    "file_name": "a.md",
    "file_text": "héllo ✓",
    "last_modified": "2024-01-02 03:04:05",
    "size": 10
  },
  {
    "file_name": "b.md",
    "file_text": "Error reading file: boom",
    "last_modified": null,
    "size": null
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_contents_is_empty_array() {
        assert_eq!(OutputGenerator::generate_contents(&[]).unwrap(), "[]");
    }

    #[test]
    fn write_outputs_uses_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = tmp.path().join("dump");
        let prefix = prefix.to_str().unwrap();

        let (hierarchy, contents) = OutputGenerator::write_outputs(prefix, &[], &[]).unwrap();
        assert_eq!(hierarchy, PathBuf::from(format!("{}_hierarchy.txt", prefix)));
        assert_eq!(fs::read_to_string(&contents).unwrap(), "[]");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = tmp.path().join("missing-dir").join("out");
        assert!(OutputGenerator::write_outputs(prefix.to_str().unwrap(), &[], &[]).is_err());
    }
}
