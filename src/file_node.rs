use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
    time::SystemTime,
};

/// A file entry in the tree
#[derive(Debug, Clone)]
pub struct FileNode {
    pub path: PathBuf,
    pub name: String,
    /// Name without the final extension
    pub basename: String,
    /// Final extension without the dot, empty if there is none
    pub extension: String,
    pub modified_time: SystemTime,
    pub created_time: SystemTime,
    pub size: u64,
}

impl FileNode {
    pub fn new(path: PathBuf, modified_time: SystemTime, created_time: SystemTime, size: u64) -> Self {
        let name = file_name_of(&path);
        let (basename, extension) = split_extension(&name);
        Self {
            path,
            basename: basename.to_string(),
            extension: extension.to_string(),
            name,
            modified_time,
            created_time,
            size,
        }
    }
}

/// A directory entry in the tree
#[derive(Debug)]
pub struct FolderNode {
    pub path: PathBuf,
    pub name: String,
    pub is_root: bool,
    pub children: RefCell<Vec<Node>>,
}

impl FolderNode {
    pub fn new(path: PathBuf, is_root: bool) -> Self {
        Self {
            name: file_name_of(&path),
            path,
            is_root,
            children: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the current children. Later host mutations do not affect it.
    pub fn children(&self) -> Vec<Node> {
        self.children.borrow().clone()
    }

    pub fn push_child(&self, child: Node) {
        self.children.borrow_mut().push(child);
    }
}

/// Represents a file or directory
#[derive(Debug, Clone)]
pub enum Node {
    File(Rc<FileNode>),
    Folder(Rc<FolderNode>),
}

impl Node {
    pub fn path(&self) -> &Path {
        match self {
            Node::File(file) => &file.path,
            Node::Folder(folder) => &folder.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Splits `name` at its last dot. A leading dot (".gitignore") or a trailing
/// dot does not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => {
            let (base, ext) = name.split_at(dot);
            (base, ext.strip_prefix('.').unwrap_or(ext))
        }
        _ => (name, ""),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn file_name_parts() {
        let file = FileNode::new(PathBuf::from("/vault/Notes/Chapter 1.md"), UNIX_EPOCH, UNIX_EPOCH, 0);
        assert_eq!(file.name, "Chapter 1.md");
        assert_eq!(file.basename, "Chapter 1");
        assert_eq!(file.extension, "md");
    }

    #[test]
    fn only_last_dot_splits() {
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension(".gitignore"), (".gitignore", ""));
        assert_eq!(split_extension("trailing."), ("trailing.", ""));
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn folder_children_are_a_snapshot() {
        let folder = FolderNode::new(PathBuf::from("/v/b"), false);
        let file = FileNode::new(PathBuf::from("/v/b/a.md"), UNIX_EPOCH, UNIX_EPOCH, 1);
        folder.push_child(Node::File(Rc::new(file)));
        let snapshot = folder.children();
        folder.children.borrow_mut().clear();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].path(), Path::new("/v/b/a.md"));
        assert_eq!(folder.name, "b");
    }
}
