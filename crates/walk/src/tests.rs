use super::*;
use std::fs;
use std::path::{Path, PathBuf};

fn collect_relative_paths(walker: Walker) -> Vec<PathBuf> {
    walker
        .filter(|entry| !entry.is_root())
        .map(|entry| entry.relative_path().to_path_buf())
        .collect()
}

#[test]
fn walk_errors_when_root_missing() {
    let builder = WalkBuilder::new("/nonexistent/path/for/walker");
    let error = match builder.build() {
        Ok(_) => panic!("missing root should fail"),
        Err(error) => error,
    };
    assert!(matches!(error.kind(), WalkErrorKind::RootMetadata { .. }));
    assert_eq!(error.path(), Path::new("/nonexistent/path/for/walker"));
}

#[test]
fn walk_single_file_emits_root_entry() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("file.txt");
    fs::write(&file, b"contents").expect("write");

    let mut walker = WalkBuilder::new(&file).build().expect("build walker");
    let entry = walker.next().expect("entry");
    assert!(entry.is_root());
    assert!(entry.relative_path().as_os_str().is_empty());
    assert_eq!(entry.full_path(), file);
    assert!(walker.next().is_none());
}

#[test]
fn walk_directory_yields_deterministic_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::create_dir(root.join("a")).expect("dir a");
    fs::create_dir(root.join("b")).expect("dir b");
    fs::write(root.join("a/inner.txt"), b"data").expect("write inner");
    fs::write(root.join("c.txt"), b"data").expect("write file");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    let paths = collect_relative_paths(walker);
    assert_eq!(
        paths,
        vec![
            PathBuf::from("a"),
            PathBuf::from("a/inner.txt"),
            PathBuf::from("b"),
            PathBuf::from("c.txt"),
        ]
    );
}

#[test]
fn walk_can_exclude_the_root_entry() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("file.txt"), b"data").expect("write");

    let walker = WalkBuilder::new(temp.path())
        .include_root(false)
        .build()
        .expect("build walker");
    let entries: Vec<_> = walker.collect();

    assert_eq!(entries.len(), 1);
    assert!(!entries[0].is_root());
    assert_eq!(entries[0].relative_path(), Path::new("file.txt"));
}

#[test]
fn max_depth_bounds_the_walk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("outer/inner")).expect("create dirs");
    fs::write(root.join("outer/inner/deep.txt"), b"data").expect("write deep");
    fs::write(root.join("top.txt"), b"data").expect("write top");

    let walker = WalkBuilder::new(&root)
        .max_depth(Some(1))
        .build()
        .expect("build walker");
    let paths = collect_relative_paths(walker);
    assert_eq!(paths, vec![PathBuf::from("outer"), PathBuf::from("top.txt")]);

    let walker = WalkBuilder::new(&root)
        .max_depth(Some(2))
        .build()
        .expect("build walker");
    let paths = collect_relative_paths(walker);
    assert_eq!(
        paths,
        vec![
            PathBuf::from("outer"),
            PathBuf::from("outer/inner"),
            PathBuf::from("top.txt"),
        ]
    );
}

#[test]
fn max_depth_zero_keeps_only_the_root() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("file.txt"), b"data").expect("write");

    let walker = WalkBuilder::new(temp.path())
        .max_depth(Some(0))
        .build()
        .expect("build walker");
    let entries: Vec<_> = walker.collect();

    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_root());
}

#[test]
fn entry_accessors_report_kind_and_depth() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("sub")).expect("create dirs");
    fs::write(root.join("sub/file.txt"), b"data").expect("write");

    let walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let entries: Vec<_> = walker.collect();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_dir());
    assert_eq!(entries[0].depth(), 1);
    assert_eq!(entries[0].file_name().and_then(|name| name.to_str()), Some("sub"));
    assert!(entries[1].is_file());
    assert_eq!(entries[1].depth(), 2);
}

#[cfg(unix)]
#[test]
fn walk_does_not_follow_symlinks_by_default() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let target = temp.path().join("target");
    fs::create_dir(&root).expect("create root");
    fs::create_dir(&target).expect("create target");
    fs::write(target.join("inside.txt"), b"data").expect("write");
    symlink(&target, root.join("link")).expect("symlink");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    let paths = collect_relative_paths(walker);
    assert_eq!(paths, vec![PathBuf::from("link")]);
}

#[cfg(unix)]
#[test]
fn walk_follows_directory_symlinks_when_enabled() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let target = temp.path().join("target");
    fs::create_dir(&root).expect("create root");
    fs::create_dir(&target).expect("create target");
    fs::write(target.join("inside.txt"), b"data").expect("write");
    symlink(&target, root.join("link")).expect("symlink");

    let walker = WalkBuilder::new(&root)
        .follow_symlinks(true)
        .build()
        .expect("build walker");
    let paths = collect_relative_paths(walker);
    assert_eq!(
        paths,
        vec![PathBuf::from("link"), PathBuf::from("link/inside.txt")]
    );
}

#[cfg(unix)]
#[test]
fn walk_breaks_symlink_cycles() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join("file.txt"), b"data").expect("write");
    symlink(&root, root.join("loop")).expect("symlink");

    let walker = WalkBuilder::new(&root)
        .follow_symlinks(true)
        .build()
        .expect("build walker");
    let paths = collect_relative_paths(walker);

    // The cycle link is yielded once but never descended into.
    assert_eq!(
        paths,
        vec![PathBuf::from("file.txt"), PathBuf::from("loop")]
    );
}

#[cfg(unix)]
#[test]
fn dangling_symlinks_are_yielded_but_not_followed() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    symlink(temp.path().join("missing"), root.join("dangling")).expect("symlink");

    let walker = WalkBuilder::new(&root)
        .follow_symlinks(true)
        .build()
        .expect("build walker");
    let paths = collect_relative_paths(walker);
    assert_eq!(paths, vec![PathBuf::from("dangling")]);
}
