use crate::file_node::{FileNode, FolderNode, Node};
use std::{path::Path, rc::Rc};

/// A scanned hierarchy, addressed by path
#[derive(Debug, Clone)]
pub struct Tree {
    root: Rc<FolderNode>,
}

impl Tree {
    pub fn new(root: Rc<FolderNode>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Rc<FolderNode> {
        Rc::clone(&self.root)
    }

    /// Look up any node by its full path.
    pub fn find(&self, path: &Path) -> Option<Node> {
        let relative = path.strip_prefix(&self.root.path).ok()?;
        let mut current = Node::Folder(Rc::clone(&self.root));
        for component in relative.components() {
            let Node::Folder(folder) = current else {
                return None;
            };
            let name = component.as_os_str().to_string_lossy();
            let child = folder
                .children
                .borrow()
                .iter()
                .find(|child| child.name() == name)
                .cloned()?;
            current = child;
        }
        Some(current)
    }

    pub fn find_folder(&self, path: &Path) -> Option<Rc<FolderNode>> {
        match self.find(path)? {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    pub fn find_file(&self, path: &Path) -> Option<Rc<FileNode>> {
        match self.find(path)? {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }

    /// The folder that currently contains `path`. The root has no parent.
    pub fn parent_of(&self, path: &Path) -> Option<Rc<FolderNode>> {
        if path == self.root.path {
            return None;
        }
        self.find_folder(path.parent()?)
    }
}
