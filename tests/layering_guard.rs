//! Layering guardrails between the workspace crates.
//!
//! `retype_core` is the shared vocabulary: it must not depend on the tree crate or the resolver. `retype_syntax`
//! may depend on `retype_core` only. These tests scan the member manifests' `[dependencies]` tables.

fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_depends_on_no_workspace_crate() {
    let deps = dependencies(include_str!("../crates/retype_core/Cargo.toml"));
    for dep in &deps {
        assert!(
            !dep.starts_with("retype"),
            "`retype_core` must stay a leaf crate, but depends on `{dep}`"
        );
    }
}

#[test]
fn syntax_depends_only_on_core() {
    let deps = dependencies(include_str!("../crates/retype_syntax/Cargo.toml"));
    assert!(deps.iter().any(|dep| dep == "retype_core"));
    for dep in deps.iter().filter(|dep| dep.starts_with("retype")) {
        assert_eq!(dep, "retype_core", "`retype_syntax` must not depend on `{dep}`");
    }
}
