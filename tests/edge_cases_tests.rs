mod common;

use std::fs;

use common::*;

use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_rename_collision_does_not_stop_siblings() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("a_old.txt"), "first").unwrap();
    fs::write(root.join("a_new.txt"), "taken").unwrap();
    fs::write(root.join("b_old.txt"), "old text").unwrap();
    fs::create_dir(root.join("old_dir")).unwrap();

    run_deepren(root, "old", "new", &[])
        .success()
        .stdout(predicate::str::contains("target already exists"))
        .stdout(predicate::str::contains("1 directories renamed"))
        .stdout(predicate::str::contains("1 replacements made in 1 files"))
        .stdout(predicate::str::contains("1 files renamed"));

    // The collision is reported and left alone.
    assert_eq!(fs::read_to_string(root.join("a_old.txt")).unwrap(), "first");
    assert_eq!(fs::read_to_string(root.join("a_new.txt")).unwrap(), "taken");

    // Siblings are still processed.
    assert_eq!(fs::read_to_string(root.join("b_new.txt")).unwrap(), "new text");
    assert!(root.join("new_dir").is_dir());
}

#[test]
fn test_whatif_reports_rename_collision() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a_old.txt"), "first").unwrap();
    fs::write(root.join("a_new.txt"), "taken").unwrap();

    let assert = run_deepren(root, "old", "new", &["--whatif"])
        .success()
        .stdout(predicate::str::contains("target already exists"))
        .stdout(predicate::str::contains("0 files renamed"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let error_lines = stdout
        .lines()
        .filter(|l| l.trim_start().starts_with("Error"))
        .count();
    assert_eq!(error_lines, 1, "stdout:\n{}", stdout);
    assert!(!stdout.contains("Renamed file"));
    assert_eq!(fs::read_to_string(root.join("a_old.txt")).unwrap(), "first");
}

#[cfg(unix)]
#[test]
fn test_directory_symlink_is_renamed_not_followed() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(outside.path().join("old.txt"), "old").unwrap();
    std::os::unix::fs::symlink(outside.path(), root.join("old_link")).unwrap();

    run_deepren(root, "old", "new", &[])
        .success()
        .stdout(predicate::str::contains("Renamed directory"))
        .stdout(predicate::str::contains("1 directories renamed"))
        .stdout(predicate::str::contains("0 files renamed"));

    assert!(fs::symlink_metadata(root.join("new_link")).is_ok());
    assert!(fs::symlink_metadata(root.join("old_link")).is_err());
    assert_eq!(fs::read_to_string(outside.path().join("old.txt")).unwrap(), "old");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_isolated() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let locked = root.join("a_locked.txt");
    fs::write(&locked, "old").unwrap();
    fs::write(root.join("b_open.txt"), "old old").unwrap();
    fs::create_dir(root.join("old_dir")).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop privileged users.
    if fs::read(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let assert = run_deepren(root, "old", "new", &[]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    let error_lines: Vec<_> = stdout
        .lines()
        .filter(|l| l.trim_start().starts_with("Error"))
        .collect();
    assert_eq!(error_lines.len(), 1, "stdout:\n{}", stdout);
    assert!(error_lines[0].contains("a_locked.txt"));

    assert!(stdout.contains("2 replacements made in 1 files"));
    assert!(stdout.contains("1 directories renamed"));
    assert_eq!(fs::read_to_string(&locked).unwrap(), "old");
    assert_eq!(
        fs::read_to_string(root.join("b_open.txt")).unwrap(),
        "new new"
    );
}

#[test]
fn test_empty_name_replacement_is_reported() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("old")).unwrap();
    fs::write(root.join("keep.txt"), "old").unwrap();

    run_deepren(root, "^old$", "", &[])
        .success()
        .stdout(predicate::str::contains("empty name"))
        .stdout(predicate::str::contains("0 directories renamed"))
        .stdout(predicate::str::contains("1 replacements made in 1 files"));

    assert!(root.join("old").is_dir());
    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "");
}

#[test]
fn test_deeply_nested_renames() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("old1/old2/old3/old4")).unwrap();
    fs::write(root.join("old1/old2/old3/old4/old.txt"), "old").unwrap();

    run_deepren(root, "old", "new", &[])
        .success()
        .stdout(predicate::str::contains("4 directories renamed"))
        .stdout(predicate::str::contains("1 files renamed"));

    assert_eq!(
        fs::read_to_string(root.join("new1/new2/new3/new4/new.txt")).unwrap(),
        "new"
    );
    assert!(!root.join("old1").exists());
}

#[test]
fn test_hidden_entries_are_processed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join(".old_cache")).unwrap();
    fs::write(root.join(".oldrc"), "old=1").unwrap();

    run_deepren(root, "old", "new", &[]).success();

    assert!(root.join(".new_cache").is_dir());
    assert_eq!(fs::read_to_string(root.join(".newrc")).unwrap(), "new=1");
}

#[test]
fn test_whatif_case_only_rename_is_reported_not_applied() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("Foo")).unwrap();

    run_deepren(root, "Foo", "foo", &["--whatif"])
        .success()
        .stdout(predicate::str::contains("Renamed directory"))
        .stdout(predicate::str::contains("1 directories renamed"));

    let names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Foo"]);
}

#[test]
fn test_replacement_starting_with_hyphen() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("list.txt"), "* item").unwrap();

    run_deepren(root, r"\*", "-", &[]).success();

    assert_eq!(fs::read_to_string(root.join("list.txt")).unwrap(), "- item");
}

#[test]
fn test_tree_snapshot_unchanged_after_whatif_of_complex_tree() {
    let temp = create_test_tree();
    let root = temp.path();
    let before = snapshot_tree(root);

    run_deepren(root, "(o)ld", "${1}LD", &["--whatif", "--filter", "*.md"]).success();

    assert_eq!(snapshot_tree(root), before);
}
