//! What the navigator needs from its host.

use crate::file_node::{FileNode, FolderNode};
use std::{path::Path, rc::Rc};

/// The tree and focus state owned by the host explorer.
///
/// Every query reads the live tree, so the navigator never holds on to a
/// stale copy between commands.
pub trait Workspace {
    /// The file currently open, if any.
    fn active_file(&self) -> Option<Rc<FileNode>>;

    fn root(&self) -> Rc<FolderNode>;

    /// The folder that contains `path`, `None` for the root or unknown paths.
    fn parent(&self, path: &Path) -> Option<Rc<FolderNode>>;

    /// Make `file` the open document.
    fn open_file(&mut self, file: &Rc<FileNode>);

    /// Scroll the tree item for `path` into view.
    fn reveal(&mut self, path: &Path);

    fn is_collapsed(&self, folder: &FolderNode) -> bool;

    fn set_collapsed(&mut self, folder: &FolderNode, collapsed: bool);
}

/// Host settings read once per command.
pub trait Preferences {
    /// Raw sort order key, possibly one this crate does not know.
    fn sort_order(&self) -> String;
}
