use crate::constants::{OUTPUT_COUNT, OUTPUT_FILES};
use crate::selector::Selection;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// write the job outputs for `selection` in `$GITHUB_OUTPUT` syntax
pub fn write_outputs(selection: &Selection, out: &mut impl Write) -> io::Result<()> {
    write_output(out, OUTPUT_FILES, &selection.joined())?;
    write_output(out, OUTPUT_COUNT, &selection.count.to_string())
}

/// append the job outputs to the file the runner reads them from
pub fn append_outputs(selection: &Selection, path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    write_outputs(selection, &mut file)
        .with_context(|| format!("failed to write output file {}", path.display()))
}

fn write_output(out: &mut impl Write, name: &str, value: &str) -> io::Result<()> {
    if !value.contains('\n') && !value.contains('\r') {
        return writeln!(out, "{name}={value}");
    }

    // multiline values use the heredoc form with a delimiter absent from the value
    let mut delimiter = String::from("STRYKE_BATCH_EOF");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    writeln!(out, "{name}<<{delimiter}")?;
    writeln!(out, "{value}")?;
    writeln!(out, "{delimiter}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn selection(files: &[&str], count: u64) -> Selection {
        Selection {
            files: files.iter().map(|s| s.to_string()).collect(),
            count,
        }
    }

    fn render(selection: &Selection) -> String {
        let mut buffer = Vec::new();
        write_outputs(selection, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_outputs() {
        assert_eq!(
            render(&selection(&["src/app/a.ts", "src/app/b.ts"], 2)),
            "files-to-stryke=src/app/a.ts,src/app/b.ts\nfiles-count=2\n"
        );
    }

    #[test]
    fn test_outputs_empty_selection() {
        assert_eq!(
            render(&selection(&[], 0)),
            "files-to-stryke=\nfiles-count=0\n"
        );
    }

    #[test]
    fn test_outputs_multiline_value() {
        assert_eq!(
            render(&selection(&["odd\nname.ts"], 1)),
            "files-to-stryke<<STRYKE_BATCH_EOF\nodd\nname.ts\nSTRYKE_BATCH_EOF\nfiles-count=1\n"
        );
    }

    #[test]
    fn test_outputs_delimiter_collision() {
        assert_eq!(
            render(&selection(&["STRYKE_BATCH_EOF\n.ts"], 1)),
            "files-to-stryke<<STRYKE_BATCH_EOF_\nSTRYKE_BATCH_EOF\n.ts\nSTRYKE_BATCH_EOF_\nfiles-count=1\n"
        );
    }

    #[test]
    fn test_append_outputs_keeps_existing_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("github_output");
        fs::write(&path, "earlier-step=done\n").unwrap();

        append_outputs(&selection(&["a.ts"], 1), &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "earlier-step=done\nfiles-to-stryke=a.ts\nfiles-count=1\n"
        );
    }

    #[test]
    fn test_append_outputs_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/github_output");

        let err = append_outputs(&selection(&[], 0), &path).unwrap_err();
        assert!(err.to_string().starts_with("failed to open output file"));
    }
}
