//! Hygiene: source-level rules checked at test time.
//!
//! Scans `src/` (minus `_test.rs` files) for patterns that panic in the
//! browser or swallow errors. Budgets only go down. A second rule keeps the
//! controller modules free of browser bindings so they stay testable on the
//! host.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    what: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, what: "panics on the page" },
    Budget { pattern: ".expect(", max: 0, what: "panics on the page" },
    Budget { pattern: "panic!(", max: 0, what: "panics on the page" },
    Budget { pattern: "unreachable!(", max: 0, what: "panics on the page" },
    Budget { pattern: "todo!(", max: 0, what: "unfinished code" },
    Budget { pattern: "unimplemented!(", max: 0, what: "unfinished code" },
    Budget { pattern: "let _ =", max: 0, what: "discards an error unread" },
    Budget { pattern: ".ok()", max: 0, what: "discards an error unread" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, what: "hides dead code" },
];

/// Files allowed to name browser bindings directly.
const BROWSER_MODULES: &[&str] = &["src/lib.rs", "src/site.rs", "src/error.rs", "src/dom/"];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().replace('\\', "/");
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn scans_the_source_tree() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("src/lib.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.what,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn controllers_stay_browser_free() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !BROWSER_MODULES.iter().any(|allowed| f.path.contains(allowed)))
        .collect();
    let mut found = hits(&files, "web_sys");
    found.extend(hits(&files, "wasm_bindgen"));
    found.extend(hits(&files, "js_sys"));
    assert!(found.is_empty(), "browser bindings outside src/dom:\n{}", format_hits(&found));
}
