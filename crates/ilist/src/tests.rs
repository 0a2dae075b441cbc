use super::*;
use std::fs;
use std::path::PathBuf;

fn paths_of(list: &InodeList) -> Vec<PathBuf> {
    list.iter().cloned().collect()
}

#[test]
fn walk_missing_root_forces_zero_entries() {
    let list = walk("/nonexistent/path/for/walker", false);
    assert!(list.is_empty());
    assert_eq!(list.status(), WalkStatus::RootNotFound);
}

#[test]
fn walk_single_file_yields_that_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("file.txt");
    fs::write(&file, b"contents").expect("write");

    let list = walk(&file, false);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Some(file.as_path()));
    assert!(list.root_found());

    // Recursion makes no difference for a file root.
    let recursive = walk(&file, true);
    assert_eq!(paths_of(&recursive), paths_of(&list));
}

#[test]
fn walk_empty_directory_yields_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("empty");
    fs::create_dir(&root).expect("create empty dir");

    let list = walk(&root, true);
    assert!(list.is_empty());
    assert_eq!(list.status(), WalkStatus::Complete);
    assert!(list.root_found());
}

#[test]
fn walk_direct_children_sorted_by_full_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("x");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join("b.txt"), b"b").expect("write b");
    fs::write(root.join("a.txt"), b"a").expect("write a");
    fs::create_dir(root.join("sub")).expect("create sub");

    let list = walk(&root, false);
    assert_eq!(
        paths_of(&list),
        vec![root.join("a.txt"), root.join("b.txt"), root.join("sub")]
    );
}

#[test]
fn walk_non_recursive_ignores_nested_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let sub = root.join("sub");
    fs::create_dir_all(&sub).expect("create dirs");
    fs::write(sub.join("inner.txt"), b"data").expect("write inner");

    let list = walk(&root, false);
    assert_eq!(paths_of(&list), vec![sub.clone()]);
}

#[test]
fn walk_recursive_emits_subtree_before_later_siblings() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    let dir_a = root.join("a");
    let dir_b = root.join("b");
    fs::create_dir(&dir_a).expect("dir a");
    fs::create_dir(&dir_b).expect("dir b");
    fs::write(dir_a.join("inner.txt"), b"data").expect("write inner");
    fs::write(root.join("c.txt"), b"data").expect("write file");

    let list = walk(&root, true);
    assert_eq!(
        paths_of(&list),
        vec![
            dir_a.clone(),
            dir_a.join("inner.txt"),
            dir_b.clone(),
            root.join("c.txt"),
        ]
    );
}

#[test]
fn walk_hidden_names_are_included() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join(".config"), b"hidden").expect("write hidden");
    fs::write(root.join("visible.txt"), b"data").expect("write visible");

    let list = walk(&root, false);
    assert_eq!(
        paths_of(&list),
        vec![root.join(".config"), root.join("visible.txt")]
    );
}

#[test]
fn walk_directory_entry_precedes_descendants() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let nested = root.join("nested");
    let deep = nested.join("deep");
    fs::create_dir_all(&deep).expect("create deep");
    fs::write(deep.join("file.txt"), b"data").expect("write file");

    let list = walk(&root, true);
    let paths = paths_of(&list);
    let dir_index = paths.iter().position(|p| *p == nested).expect("nested");
    let deep_index = paths.iter().position(|p| *p == deep).expect("deep");
    let file_index = paths
        .iter()
        .position(|p| *p == deep.join("file.txt"))
        .expect("file");
    assert!(dir_index < deep_index);
    assert!(deep_index < file_index);
}

#[cfg(unix)]
#[test]
fn walk_unreadable_directory_contributes_zero_entries() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let sealed = root.join("sealed");
    fs::create_dir_all(&sealed).expect("create dirs");
    fs::write(sealed.join("invisible.txt"), b"data").expect("write");
    fs::write(root.join("open.txt"), b"data").expect("write");

    fs::set_permissions(&sealed, fs::Permissions::from_mode(0o000)).expect("chmod");
    // Root bypasses permission bits; only assert when the directory is
    // actually unreadable from this process.
    let denied = fs::read_dir(&sealed).is_err();

    let list = walk(&root, true);

    fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).expect("chmod back");

    if denied {
        assert_eq!(paths_of(&list), vec![root.join("open.txt"), sealed.clone()]);
        assert!(list.root_found());
    }
}
