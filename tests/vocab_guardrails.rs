//! Guardrail against stringly-typed builtin type checks.
//!
//! Collection and numeric spellings (`NSArray`, `Dictionary`, `Int32`, ...) are owned by the
//! `retype_core::lang::types` registries. Code that compares a type name against one of those spellings
//! (`== "NSArray"`, `"Dictionary" =>`) should go through the registry instead.
//!
//! The registries themselves and sibling `tests.rs` files may spell types directly. The builtin catalog JSON is data
//! and is not scanned.

use std::fs;
use std::path::{Path, PathBuf};

use retype_core::lang::types::{collections, numerics};

const SCANNED: &[&str] = &["src", "crates/retype_syntax/src", "crates/retype_core/src"];
const REGISTRY_DIR: &str = "crates/retype_core/src/lang";

#[test]
fn no_stringly_builtin_type_checks() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let patterns: Vec<String> = collections::COLLECTION_TYPES
        .iter()
        .map(|t| t.canonical)
        .chain(numerics::NUMERIC_TYPES.iter().map(|t| t.canonical))
        .flat_map(|s| [format!("== \"{s}\""), format!("\"{s}\" =>")])
        .collect();

    let mut offenders = Vec::new();
    for dir in SCANNED {
        for path in rust_sources(&root.join(dir)) {
            if path.starts_with(root.join(REGISTRY_DIR)) || path.ends_with("tests.rs") {
                continue;
            }
            let Ok(contents) = fs::read_to_string(&path) else { continue };
            for (idx, line) in contents.lines().enumerate() {
                let code = line.trim_start();
                if !code.starts_with("//") && patterns.iter().any(|p| code.contains(p.as_str())) {
                    offenders.push(format!("{}:{}: {}", path.display(), idx + 1, code));
                }
            }
        }
    }

    assert!(
        offenders.is_empty(),
        "compare builtin type names through the retype_core registries:\n{}",
        offenders.join("\n")
    );
}

fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else { return Vec::new() };
    let mut files = Vec::new();
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            files.extend(rust_sources(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}
