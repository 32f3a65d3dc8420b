use crate::{
    file_node::{FileNode, FolderNode, Node},
    tree::Tree,
    utils::num_cpus,
};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::{debug, warn};

/// Options for building a tree from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub follow_links: bool,
    pub include_hidden: bool,
}

/// Scan summary
#[derive(Debug)]
pub struct Scan {
    pub tree: Tree,
    pub error_count: usize,
}

struct Entry {
    path: PathBuf,
    is_dir: bool,
    modified: SystemTime,
    created: SystemTime,
    size: u64,
}

/// Parallel directory scanner using jwalk
pub fn scan_dir(path: &Path, options: ScanOptions) -> Scan {
    use jwalk::WalkDir;

    let root_path = path.to_path_buf();

    let walker = WalkDir::new(&root_path)
        .follow_links(options.follow_links)
        .skip_hidden(!options.include_hidden)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus()));

    let mut entries: Vec<Entry> = Vec::new();
    let mut error_count = 0usize;

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let entry_path = entry.path();
                if entry_path == root_path {
                    continue;
                }

                let meta = if options.follow_links {
                    fs::metadata(&entry_path)
                } else {
                    fs::symlink_metadata(&entry_path)
                };

                match meta {
                    Ok(m) => {
                        let modified = m.modified().unwrap_or(UNIX_EPOCH);
                        // Not every filesystem records a birth time.
                        let created = m.created().unwrap_or(modified);
                        entries.push(Entry {
                            path: entry_path,
                            is_dir: m.is_dir(),
                            modified,
                            created,
                            size: if m.is_file() { m.len() } else { 0 },
                        });
                    }
                    Err(e) => {
                        error_count += 1;
                        warn!(path = %entry_path.display(), error = %e, "could not read metadata");
                    }
                }
            }
            Err(e) => {
                error_count += 1;
                warn!(error = %e, "walk error");
            }
        }
    }

    let tree = build_tree(root_path, entries);
    debug!(root = %tree.root().path.display(), error_count, "scan complete");
    Scan { tree, error_count }
}

fn build_tree(root_path: PathBuf, mut entries: Vec<Entry>) -> Tree {
    let root = Rc::new(FolderNode::new(root_path.clone(), true));
    let mut folders: HashMap<PathBuf, Rc<FolderNode>> = HashMap::new();
    folders.insert(root_path, Rc::clone(&root));

    // Parents before children
    entries.sort_by_key(|entry| entry.path.components().count());

    for entry in entries {
        let Some(parent) = entry.path.parent().and_then(|p| folders.get(p)).cloned() else {
            continue;
        };
        if entry.is_dir {
            let folder = Rc::new(FolderNode::new(entry.path.clone(), false));
            folders.insert(entry.path, Rc::clone(&folder));
            parent.push_child(Node::Folder(folder));
        } else {
            let file = FileNode::new(entry.path, entry.modified, entry.created, entry.size);
            parent.push_child(Node::File(Rc::new(file)));
        }
    }

    Tree::new(root)
}
