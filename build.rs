use std::path::{Path, PathBuf};
use std::process::Command;

const MAX_LINES: usize = 750;

const CHECKED_EXTENSIONS: &[&str] = &["rs", "md", "yaml", "toml"];

const EXCLUDED_DIRS: &[&str] = &["target", ".git", "examples", ".cborg_data"];

const EXCLUDED_FILES: &[&str] = &["Cargo.lock"];

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/main");
    println!("cargo:rerun-if-changed=.git/packed-refs");

    let sha = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CBORG_DASHBOARD_GIT_SHA={}", sha);

    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let files = collect_files_to_check(&root);

    enforce_line_limits(&root, &files);
    enforce_no_dead_code_allows(&root, &files);
    enforce_serial_for_env_mutations(&root, &files);
}

fn enforce_line_limits(root: &Path, files: &[PathBuf]) {
    for file in files {
        println!("cargo:rerun-if-changed={}", file.display());
    }

    let violations: Vec<(PathBuf, usize)> = files
        .iter()
        .filter_map(|file| {
            let content = std::fs::read_to_string(file).ok()?;
            let count = content.lines().filter(|l| !l.trim().is_empty()).count();
            (count > MAX_LINES).then(|| (relative(root, file), count))
        })
        .collect();

    if !violations.is_empty() {
        eprintln!("\nFILE LINE LIMIT EXCEEDED (max {} lines)", MAX_LINES);
        for (path, lines) in &violations {
            eprintln!("  {} - {} lines", path.display(), lines);
        }
        eprintln!("\nPlease split these files into smaller modules.\n");
        panic!(
            "Build failed: {} file(s) exceed the {} line limit",
            violations.len(),
            MAX_LINES
        );
    }
}

/// Dead code should be deleted or gated behind `#[cfg(test)]`, not silenced.
fn enforce_no_dead_code_allows(root: &Path, files: &[PathBuf]) {
    let mut violations = Vec::new();

    for file in rust_sources(files) {
        let Ok(content) = std::fs::read_to_string(file) else {
            continue;
        };
        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if (trimmed.starts_with("#[allow(") || trimmed.starts_with("#![allow("))
                && trimmed.contains("dead_code")
            {
                violations.push(format!("{}:{}", relative(root, file).display(), line_num + 1));
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n#[allow(dead_code)] IS NOT ALLOWED");
        for v in &violations {
            eprintln!("  {}", v);
        }
        panic!(
            "Build failed: {} #[allow(dead_code)] occurrence(s) found. Remove the dead code.",
            violations.len()
        );
    }
}

/// Tests that mutate environment variables must be `#[serial]`.
fn enforce_serial_for_env_mutations(root: &Path, files: &[PathBuf]) {
    let mut violations = Vec::new();

    for file in rust_sources(files) {
        let Ok(content) = std::fs::read_to_string(file) else {
            continue;
        };

        let mut in_test_fn = false;
        let mut has_serial = false;
        let mut brace_depth = 0i32;
        let mut test_fn_start = 0;

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed == "#[serial]" || trimmed == "#[serial_test::serial]" {
                has_serial = true;
            }
            if trimmed == "#[test]" {
                in_test_fn = true;
                brace_depth = 0;
                test_fn_start = i + 1;
            }
            if !in_test_fn {
                continue;
            }

            for c in line.chars() {
                match c {
                    '{' => brace_depth += 1,
                    '}' => {
                        brace_depth -= 1;
                        if brace_depth == 0 {
                            in_test_fn = false;
                        }
                    }
                    _ => {}
                }
            }

            let mutates_env = !trimmed.starts_with("//")
                && (trimmed.contains("env::set_var") || trimmed.contains("env::remove_var"));
            if mutates_env && !has_serial {
                violations.push(format!("{}:{}", relative(root, file).display(), test_fn_start));
                in_test_fn = false;
            }
            if !in_test_fn {
                has_serial = false;
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\nENV MUTATIONS REQUIRE #[serial]");
        for v in &violations {
            eprintln!("  {}", v);
        }
        panic!(
            "Build failed: {} test(s) mutate env vars without #[serial].",
            violations.len()
        );
    }
}

fn rust_sources(files: &[PathBuf]) -> impl Iterator<Item = &PathBuf> {
    files.iter().filter(|p| {
        p.extension().and_then(|e| e.to_str()) == Some("rs")
            && p.file_name().and_then(|n| n.to_str()) != Some("build.rs")
    })
}

fn relative(root: &Path, file: &Path) -> PathBuf {
    file.strip_prefix(root).unwrap_or(file).to_path_buf()
}

fn collect_files_to_check(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_directory(root, root, &mut files);
    files
}

fn walk_directory(dir: &Path, root: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            let excluded = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| EXCLUDED_DIRS.contains(&name));
            if !excluded {
                walk_directory(&path, root, files);
            }
        } else if should_check_file(&path, root) {
            files.push(path);
        }
    }
}

fn should_check_file(path: &Path, root: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !CHECKED_EXTENSIONS.contains(&ext) {
        return false;
    }

    let rel = relative(root, path);
    !EXCLUDED_FILES.iter().any(|excluded| rel.as_os_str() == *excluded)
}
