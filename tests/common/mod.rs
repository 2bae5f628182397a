//! Shared helpers for deepren integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates the tree:
///
/// ```text
/// oldName/
///   readme_old.txt      "old version\nold version\n"
///   nested_old/
///     notes.md          "keep the old notes"
/// untouched/
///   plain.txt           "nothing here"
/// ```
#[allow(unused)]
pub fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let old_dir = root.join("oldName");
    fs::create_dir(&old_dir).unwrap();
    fs::write(old_dir.join("readme_old.txt"), "old version\nold version\n").unwrap();

    let nested = old_dir.join("nested_old");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("notes.md"), "keep the old notes").unwrap();

    let untouched = root.join("untouched");
    fs::create_dir(&untouched).unwrap();
    fs::write(untouched.join("plain.txt"), "nothing here").unwrap();

    temp
}

/// Sorted list of every path below `root`, relative, with file contents.
#[allow(unused)]
pub fn snapshot_tree(root: &Path) -> Vec<(String, Option<Vec<u8>>)> {
    let mut entries = Vec::new();
    collect(root, root, &mut entries);
    entries.sort();
    entries
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<(String, Option<Vec<u8>>)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let relative = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            out.push((relative, None));
            collect(root, &path, out);
        } else {
            out.push((relative, Some(fs::read(&path).unwrap())));
        }
    }
}

/// Runs `deepren <root> <find> <replace> [extra_args]`.
pub fn run_deepren(
    root: &Path,
    find: &str,
    replace: &str,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("deepren");
    cmd.arg(root)
        .arg(find)
        .arg(replace)
        .args(extra_args)
        .env("NO_COLOR", "1");

    cmd.assert()
}
