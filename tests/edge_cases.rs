//! Edge case and error handling tests for ls2


use harness::{TestTree, lines, run_ls2};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("root/target.txt", "data");
    symlink("target.txt", tree.path().join("root/link.txt")).expect("Failed to create symlink");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root"]);
    assert_eq!(code, 0);
    assert_eq!(lines(&stdout), vec!["target.txt (4 bytes)"]);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("root/subdir/file.txt", "");
    symlink("..", tree.path().join("root/subdir/parent")).expect("Failed to create symlink");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "file.txt"]);
    assert_eq!(code, 0, "ls2 should not hang on parent symlink");
    assert_eq!(
        lines(&stdout),
        vec![
            "Looking for: file.txt",
            "root/",
            "    root/subdir/",
            "    root/subdir/file.txt",
        ]
    );
}

#[test]
fn test_broken_symlink_is_silent() {
    let tree = TestTree::new();
    tree.add_file("root/real.txt", "");
    symlink("nonexistent", tree.path().join("root/broken")).expect("Failed to create symlink");

    let (stdout, stderr, code) = run_ls2(tree.path(), &["root"]);
    assert_eq!(code, 0);
    assert_eq!(lines(&stdout), vec!["real.txt (0 bytes)"]);
    assert!(stderr.is_empty(), "lstat of a dangling link succeeds: {}", stderr);
}

#[test]
fn test_symlink_named_like_keyword_is_not_a_match() {
    let tree = TestTree::new();
    tree.add_file("root/data/real", "");
    symlink("data/real", tree.path().join("root/wanted")).expect("Failed to create symlink");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "wanted"]);
    assert_eq!(code, 0);
    assert_eq!(lines(&stdout), vec!["Looking for: wanted"]);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let tree = TestTree::new();
    tree.add_file("root/readable/file.txt", "");
    tree.add_file("root/unreadable/hidden.txt", "");

    let unreadable = tree.path().join("root/unreadable");
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "--sort"]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert_eq!(code, 0, "ls2 should handle unreadable directories gracefully");
    assert!(stdout.contains("readable/ (directory)"));
    assert!(stdout.contains("    file.txt (0 bytes)"));
    // The directory itself is still listed; only its contents are lost.
    assert!(stdout.contains("unreadable/ (directory)"));
}

#[test]
fn test_unreadable_directory_in_search() {
    let tree = TestTree::new();
    tree.add_file("root/open/hit", "");
    tree.add_file("root/locked/hit", "");

    let locked = tree.path().join("root/locked");
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).expect("Failed to set permissions");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "hit"]);

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).expect("Failed to restore permissions");

    assert_eq!(code, 0);
    assert!(stdout.contains("    root/open/hit"));
    assert!(stdout.contains("root/\n"));
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("root/dir with spaces/file with spaces.txt", "");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "file with spaces.txt"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("    root/dir with spaces/file with spaces.txt"));
    assert!(stdout.contains("    root/dir with spaces/\n"));
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("root/日本語.txt", "");
    tree.add_file("root/中文目录/文件.txt", "");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("日本語.txt (0 bytes)"));
    assert!(stdout.contains("中文目录/ (directory)"));
    assert!(stdout.contains("    文件.txt (0 bytes)"));

    let (stdout, _stderr, _code) = run_ls2(tree.path(), &["root", "文件.txt"]);
    assert!(stdout.contains("    root/中文目录/文件.txt"));
}

#[test]
fn test_hidden_files_are_listed() {
    let tree = TestTree::new();
    tree.add_file("root/.hidden", "");
    tree.add_file("root/.config/settings", "");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "--sort"]);
    assert_eq!(code, 0);
    assert_eq!(
        lines(&stdout),
        vec![
            ".config/ (directory)",
            "    settings (0 bytes)",
            ".hidden (0 bytes)",
        ]
    );
}

#[test]
fn test_file_as_root_path() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "x");

    let (stdout, stderr, code) = run_ls2(tree.path(), &["plain.txt"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("cannot open directory 'plain.txt'"));
}

#[test]
fn test_keyword_matching_root_name_is_not_special() {
    let tree = TestTree::new();
    tree.add_file("root/root", "");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "root"]);
    assert_eq!(code, 0);
    assert_eq!(lines(&stdout), vec!["Looking for: root", "root/", "root/root"]);
}

// ============================================================================
// Deep Trees
// ============================================================================

#[test]
fn test_deeply_nested_match() {
    let tree = TestTree::new();
    let deep: String = (0..30).map(|i| format!("d{}/", i)).collect();
    tree.add_file(&format!("root/{}needle", deep), "");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "needle"]);
    assert_eq!(code, 0);
    let out = lines(&stdout);
    // header + root + 30 directories + the file
    assert_eq!(out.len(), 33);
    assert!(out[32].starts_with(&" ".repeat(4 * 30)));
    assert!(out[32].ends_with("/d29/needle"));
}

#[test]
fn test_invalid_utf8_name_in_json_output() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = TestTree::new();
    tree.add_dir("root");
    fs::write(tree.path().join("root").join(OsStr::from_bytes(b"bad\xff")), "x")
        .expect("Failed to create file");

    let (stdout, _stderr, code) = run_ls2(tree.path(), &["root", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value[0]["name"], "bad\u{FFFD}");
    assert_eq!(value[0]["path"], "root/bad\u{FFFD}");
}
