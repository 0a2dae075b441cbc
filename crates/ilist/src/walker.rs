use crate::list::InodeList;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Runs a walk rooted at `root` and returns the accumulated list.
pub(crate) fn run(root: &Path, recursive: bool) -> InodeList {
    let mut list = InodeList::new();

    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {
            debug!("building inode list from {:?}", root);
            collect_directory(root, recursive, &mut list);
        }
        Ok(metadata) if metadata.is_file() => {
            trace!("adding single file to inode list: {:?}", root);
            list.push(root.to_path_buf());
        }
        _ => {
            trace!("{:?} is not a file or a directory", root);
            list.mark_root_not_found();
        }
    }

    list
}

/// Appends one directory's children to `list`, recursing into child
/// directories before moving on to later siblings.
///
/// The accumulator is threaded through the recursion explicitly; the
/// caller observes a single list growing in discovery order. Sibling
/// names are sorted before anything is appended, which keeps each
/// directory's direct children byte-ordered among themselves while a
/// child's subtree still lands directly after the child itself.
fn collect_directory(dir: &Path, recursive: bool, list: &mut InodeList) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(error) => {
            // An unreadable directory contributes nothing; the walk goes on.
            debug!("skipping unreadable directory {:?}: {}", dir, error);
            return;
        }
    };

    // read_dir never yields `.` or `..`; other dot names flow through.
    let mut names: Vec<OsString> = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(error) => {
                debug!("skipping unreadable entry in {:?}: {}", dir, error);
            }
        }
    }
    names.sort();
    trace!("found {} entries in {:?}", names.len(), dir);

    for name in names {
        let full = dir.join(&name);
        let descend = recursive && full.is_dir();
        list.push(full.clone());
        if descend {
            collect_directory(&full, recursive, list);
        }
    }
}
