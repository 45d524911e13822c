//! Hygiene: keeps panics and discarded values out of the client UI code.
//!
//! Scans `client/src/` (excluding `*_test.rs`). Arguments unused in one
//! feature build are marked with `cfg_attr(.., allow(unused_variables))`
//! instead of being bound to `_`.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    ("#[allow(dead_code)]", 0),
];

fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path_str, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|(path, _)| path.ends_with("app.rs")), "run from the client crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found: Vec<String> = files
            .iter()
            .flat_map(|(path, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(move |(n, _)| format!("  {path}:{}", n + 1))
            })
            .collect();
        if found.len() > *max {
            failures.push(format!("{pattern} budget exceeded: found {}, max {max}\n{}", found.len(), found.join("\n")));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
