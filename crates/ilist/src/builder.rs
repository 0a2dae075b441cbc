use crate::list::InodeList;
use crate::walker;
use std::path::{Path, PathBuf};

/// Configures an enumeration rooted at a specific path.
///
/// The builder mirrors the shape of the walk contract: a root path plus a
/// recursion switch. Enumeration never fails; missing roots and unreadable
/// directories degrade into the outcomes described on [`InodeList`].
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    recursive: bool,
}

impl WalkBuilder {
    /// Creates a new builder that will enumerate the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            recursive: false,
        }
    }

    /// Configures whether child directories are descended into.
    ///
    /// When enabled, a child directory's full recursive contents appear in
    /// the list immediately after the child itself and before its later
    /// siblings (depth-first, pre-order).
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Runs the enumeration and returns the accumulated [`InodeList`].
    #[must_use]
    pub fn run(self) -> InodeList {
        walker::run(&self.root, self.recursive)
    }
}

/// Enumerates `root` into an [`InodeList`].
///
/// Convenience wrapper over [`WalkBuilder`] for callers that need no
/// further configuration.
#[must_use]
pub fn walk<P: AsRef<Path>>(root: P, recursive: bool) -> InodeList {
    WalkBuilder::new(root.as_ref()).recursive(recursive).run()
}
