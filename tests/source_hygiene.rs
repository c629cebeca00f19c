use std::fs;
use std::path::Path;

/// a line in a source file that must not be committed
struct Finding {
    file: String,
    line_num: usize,
    line: String,
    reason: &'static str,
}

#[test]
fn no_leftover_markers() {
    let mut findings = Vec::new();

    // search all rust source files
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    search_dir(&src_dir, &mut findings);

    if !findings.is_empty() {
        eprintln!("\nfound {} leftover marker(s):", findings.len());
        for finding in &findings {
            eprintln!(
                "  {}:{}: {} ({})",
                finding.file,
                finding.line_num,
                finding.line.trim(),
                finding.reason
            );
        }
        panic!("todo comments and dbg! calls must be removed before tests pass");
    }
}

fn search_dir(dir: &Path, findings: &mut Vec<Finding>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            search_dir(&path, findings);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            search_file(&path, findings);
        }
    }
}

fn search_file(path: &Path, findings: &mut Vec<Finding>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_num, line) in content.lines().enumerate() {
        let reason = if is_todo_in_comment(line) {
            "todo comment"
        } else if is_dbg_call(line) {
            "dbg! call"
        } else {
            continue;
        };
        findings.push(Finding {
            file: path.display().to_string(),
            line_num: line_num + 1,
            line: line.to_string(),
            reason,
        });
    }
}

fn is_todo_in_comment(line: &str) -> bool {
    let line_upper = line.to_uppercase();

    // line comments and the start of block comments
    for marker in ["//", "/*"] {
        if let Some(pos) = line.find(marker)
            && line_upper[pos..].contains("TODO")
        {
            return true;
        }
    }

    // block comment continuation lines (e.g., " * TODO")
    let trimmed = line.trim_start();
    trimmed.starts_with('*') && !trimmed.starts_with("*/") && line_upper.contains("TODO")
}

fn is_dbg_call(line: &str) -> bool {
    let code = line.split("//").next().unwrap_or(line);
    code.contains("dbg!(")
}

#[test]
fn detects_markers() {
    assert!(is_todo_in_comment("    // todo: handle pagination"));
    assert!(is_todo_in_comment("/* TODO */"));
    assert!(is_todo_in_comment("   * TODO follow up"));
    assert!(!is_todo_in_comment("let todo_list = Vec::new();"));

    assert!(is_dbg_call("    dbg!(&files);"));
    assert!(!is_dbg_call("    // dbg!(&files);"));
}
