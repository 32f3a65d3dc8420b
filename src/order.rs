//! Explorer display order.
//!
//! Builds the navigable sequence of a folder: its direct child files whose
//! extension is allowed, ordered the way the file explorer shows them for a
//! given [`SortMode`]. Sibling folders are always listed alphabetically.

use crate::{
    collate::{CollationKey, Collator},
    file_node::{FileNode, FolderNode, Node},
    sort::SortMode,
};
use std::{cmp::Ordering, collections::BTreeSet, rc::Rc};
use tracing::debug;

/// Extensions the explorer can open, compared case-insensitively
pub const DEFAULT_EXTENSIONS: [&str; 18] = [
    "md", "jpg", "png", "jpeg", "gif", "bmp", "svg", "mp3", "webm", "wav", "m4a", "ogg", "3gp", "flac",
    "mp4", "ogv", "pdf", "opus",
];

/// Allow-list of navigable file extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypes {
    extensions: BTreeSet<String>,
}

impl Default for FileTypes {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl FileTypes {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = Self {
            extensions: BTreeSet::new(),
        };
        types.extend(extensions);
        types
    }

    pub fn extend<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions.extend(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty()),
        );
    }

    pub fn allows(&self, file: &FileNode) -> bool {
        !file.extension.is_empty() && self.extensions.contains(&file.extension.to_lowercase())
    }
}

/// Direct child files of `folder` that are navigable, in display order.
pub fn navigable_files(folder: &FolderNode, mode: SortMode, types: &FileTypes) -> Vec<Rc<FileNode>> {
    let mut files: Vec<Rc<FileNode>> = folder
        .children()
        .into_iter()
        .filter_map(|child| match child {
            Node::File(file) if types.allows(&file) => Some(file),
            _ => None,
        })
        .collect();

    sort_files(&mut files, mode);
    debug!(
        folder = %folder.path.display(),
        mode = mode.key(),
        count = files.len(),
        "computed navigable sequence"
    );
    files
}

/// Direct child folders of `folder`, in display order.
pub fn sibling_folders(folder: &FolderNode) -> Vec<Rc<FolderNode>> {
    let mut folders: Vec<Rc<FolderNode>> = folder
        .children()
        .into_iter()
        .filter_map(|child| match child {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        })
        .collect();

    folders.sort_by_cached_key(|folder| Collator::UPPER_FIRST.key(&folder.name));
    folders
}

// Alphabetical modes collate every name once instead of once per comparison.
fn sort_files(files: &mut Vec<Rc<FileNode>>, mode: SortMode) {
    let (collator, compare): (Collator, fn(&NameKey, &NameKey) -> Ordering) = match mode {
        SortMode::Alphabetical => (Collator::UPPER_FIRST, compare_alphabetical),
        SortMode::AlphabeticalReverse => (Collator::LOWER_FIRST, compare_alphabetical_reverse),
        _ => {
            files.sort_by(|a, b| compare_files(a, b, mode));
            return;
        }
    };
    let mut keyed: Vec<(NameKey, Rc<FileNode>)> =
        files.drain(..).map(|file| (NameKey::new(&file, collator), file)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b));
    files.extend(keyed.into_iter().map(|(_, file)| file));
}

/// Display order of two files in the same folder.
pub fn compare_files(a: &FileNode, b: &FileNode, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Alphabetical => {
            compare_alphabetical(&NameKey::new(a, Collator::UPPER_FIRST), &NameKey::new(b, Collator::UPPER_FIRST))
        }
        SortMode::AlphabeticalReverse => compare_alphabetical_reverse(
            &NameKey::new(a, Collator::LOWER_FIRST),
            &NameKey::new(b, Collator::LOWER_FIRST),
        ),
        SortMode::ModifiedTime => b.modified_time.cmp(&a.modified_time).then_with(|| a.path.cmp(&b.path)),
        SortMode::ModifiedTimeReverse => a.modified_time.cmp(&b.modified_time).then_with(|| a.path.cmp(&b.path)),
        SortMode::CreatedTime => b.created_time.cmp(&a.created_time).then_with(|| a.path.cmp(&b.path)),
        SortMode::CreatedTimeReverse => a.created_time.cmp(&b.created_time).then_with(|| a.path.cmp(&b.path)),
    }
}

pub fn compare_folders(a: &FolderNode, b: &FolderNode) -> Ordering {
    Collator::UPPER_FIRST.compare(&a.name, &b.name)
}

/// Collation keys of a file's base name and extension.
struct NameKey {
    basename: CollationKey,
    extension: CollationKey,
}

impl NameKey {
    fn new(file: &FileNode, collator: Collator) -> Self {
        Self {
            basename: collator.key(&file.basename),
            extension: collator.key(&file.extension),
        }
    }
}

fn is_strict_prefix(prefix: &str, of: &str) -> bool {
    prefix != of && of.starts_with(prefix)
}

// Names are collated base name first, then extension, which keeps the order
// total when one base name prefixes another.
fn compare_alphabetical(a: &NameKey, b: &NameKey) -> Ordering {
    if is_strict_prefix(a.basename.as_str(), b.basename.as_str()) {
        return Ordering::Less;
    }
    if is_strict_prefix(b.basename.as_str(), a.basename.as_str()) {
        return Ordering::Greater;
    }
    a.basename.cmp(&b.basename).then_with(|| a.extension.cmp(&b.extension))
}

fn compare_alphabetical_reverse(a: &NameKey, b: &NameKey) -> Ordering {
    if is_strict_prefix(a.basename.as_str(), b.basename.as_str()) {
        return Ordering::Greater;
    }
    if is_strict_prefix(b.basename.as_str(), a.basename.as_str()) {
        return Ordering::Less;
    }
    if a.basename.as_str() == b.basename.as_str() {
        return a.extension.cmp(&b.extension);
    }
    b.basename.cmp(&a.basename)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::{
        path::PathBuf,
        time::{Duration, UNIX_EPOCH},
    };

    fn file(name: &str) -> FileNode {
        timed(name, 0, 0)
    }

    fn timed(name: &str, modified: u64, created: u64) -> FileNode {
        FileNode::new(
            PathBuf::from("/vault").join(name),
            UNIX_EPOCH + Duration::from_secs(modified),
            UNIX_EPOCH + Duration::from_secs(created),
            0,
        )
    }

    fn folder_with(files: Vec<FileNode>, folders: &[&str]) -> FolderNode {
        let root = FolderNode::new(PathBuf::from("/vault"), true);
        for name in folders {
            root.push_child(Node::Folder(Rc::new(FolderNode::new(PathBuf::from("/vault").join(name), false))));
        }
        for f in files {
            root.push_child(Node::File(Rc::new(f)));
        }
        root
    }

    fn names(files: &[Rc<FileNode>]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    fn sorted(names_in: &[&str], mode: SortMode) -> Vec<String> {
        let folder = folder_with(names_in.iter().map(|n| file(n)).collect(), &[]);
        navigable_files(&folder, mode, &FileTypes::default())
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }

    #[test]
    fn prefix_base_name_sorts_first() {
        assert_eq!(sorted(&["Note 2.md", "Note.md"], SortMode::Alphabetical), ["Note.md", "Note 2.md"]);
    }

    #[test]
    fn prefix_base_name_sorts_last_when_reversed() {
        assert_eq!(
            sorted(&["Note.md", "Note 2.md"], SortMode::AlphabeticalReverse),
            ["Note 2.md", "Note.md"]
        );
    }

    #[test]
    fn reversed_equal_base_names_order_by_extension() {
        let a = file("draft.md");
        let b = file("draft.pdf");
        assert_eq!(compare_files(&a, &b, SortMode::AlphabeticalReverse), Ordering::Less);
        assert_eq!(compare_files(&b, &a, SortMode::AlphabeticalReverse), Ordering::Greater);
        assert_eq!(
            sorted(&["draft.pdf", "draft.md", "zeta.md"], SortMode::AlphabeticalReverse),
            ["zeta.md", "draft.md", "draft.pdf"]
        );
    }

    #[test]
    fn reversed_extension_tie_is_lower_first() {
        let lower = file("scan.png");
        let upper = file("scan.PNG");
        assert_eq!(compare_files(&lower, &upper, SortMode::AlphabeticalReverse), Ordering::Less);
        assert_eq!(compare_files(&lower, &upper, SortMode::Alphabetical), Ordering::Greater);
    }

    #[test]
    fn alphabetical_is_natural() {
        assert_eq!(
            sorted(&["Chapter 10.md", "chapter 2.md", "Chapter 1.md"], SortMode::Alphabetical),
            ["Chapter 1.md", "chapter 2.md", "Chapter 10.md"]
        );
    }

    #[test]
    fn reverse_is_not_array_reverse() {
        let forward = sorted(&["b.md", "a.md", "c.md"], SortMode::Alphabetical);
        let backward = sorted(&["b.md", "a.md", "c.md"], SortMode::AlphabeticalReverse);
        assert_eq!(forward, ["a.md", "b.md", "c.md"]);
        assert_eq!(backward, ["c.md", "b.md", "a.md"]);
    }

    #[test]
    fn unsupported_files_and_folders_are_excluded() {
        let folder = folder_with(vec![file("image.png"), file("notes.txt"), file("clip.mp4")], &["assets"]);
        let files = navigable_files(&folder, SortMode::Alphabetical, &FileTypes::default());
        assert_eq!(names(&files), ["clip.mp4", "image.png"]);
    }

    #[test]
    fn extension_match_ignores_case() {
        let types = FileTypes::default();
        assert!(types.allows(&file("PHOTO.JPG")));
        assert!(!types.allows(&file("README")));
        assert!(!types.allows(&file(".md")));
    }

    #[test]
    fn extra_extensions_extend_the_list() {
        let mut types = FileTypes::default();
        assert!(!types.allows(&file("data.csv")));
        types.extend([".CSV"]);
        assert!(types.allows(&file("data.csv")));
    }

    #[test]
    fn modified_time_orders_newest_first() {
        let folder = folder_with(vec![timed("t1.md", 1, 0), timed("t3.md", 3, 0), timed("t2.md", 2, 0)], &[]);
        let types = FileTypes::default();
        assert_eq!(names(&navigable_files(&folder, SortMode::ModifiedTime, &types)), ["t3.md", "t2.md", "t1.md"]);
        assert_eq!(
            names(&navigable_files(&folder, SortMode::ModifiedTimeReverse, &types)),
            ["t1.md", "t2.md", "t3.md"]
        );
    }

    #[test]
    fn created_time_ignores_names() {
        let folder = folder_with(vec![timed("a.md", 9, 2), timed("b.md", 1, 3), timed("c.md", 5, 1)], &[]);
        let types = FileTypes::default();
        assert_eq!(names(&navigable_files(&folder, SortMode::CreatedTime, &types)), ["b.md", "a.md", "c.md"]);
        assert_eq!(
            names(&navigable_files(&folder, SortMode::CreatedTimeReverse, &types)),
            ["c.md", "a.md", "b.md"]
        );
    }

    #[test]
    fn equal_times_fall_back_to_path() {
        let folder = folder_with(vec![timed("b.md", 4, 4), timed("a.md", 4, 4)], &[]);
        let files = navigable_files(&folder, SortMode::ModifiedTime, &FileTypes::default());
        assert_eq!(names(&files), ["a.md", "b.md"]);
    }

    #[test]
    fn prefix_rule_wins_over_accents() {
        // Base-then-extension collation, not full-name collation, decides here.
        let plain = file("resume.md");
        let accented = file("résumé x.md");
        assert_eq!(compare_files(&plain, &accented, SortMode::Alphabetical), Ordering::Less);
        assert_eq!(compare_files(&accented, &plain, SortMode::Alphabetical), Ordering::Greater);
        assert_eq!(
            sorted(&["résumé x.md", "resume.md"], SortMode::Alphabetical),
            ["resume.md", "résumé x.md"]
        );
        assert_eq!(Collator::UPPER_FIRST.compare("resume.md", "résumé x.md"), Ordering::Greater);
    }

    #[test]
    fn sorted_sequence_agrees_with_pairwise_order() {
        let names_in = ["b.md", "B.pdf", "a 10.md", "a 9.md", "a.MD", "a.md", "Ä.png"];
        for mode in [SortMode::Alphabetical, SortMode::AlphabeticalReverse] {
            let order = sorted(&names_in, mode);
            for pair in order.windows(2) {
                assert_eq!(compare_files(&file(&pair[0]), &file(&pair[1]), mode), Ordering::Less, "{mode:?}");
            }
        }
    }

    #[test]
    fn folders_are_alphabetical_only() {
        let folder = folder_with(vec![file("a.md")], &["Projects 10", "archive", "Projects 2"]);
        let folders = sibling_folders(&folder);
        let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["archive", "Projects 2", "Projects 10"]);
    }
}
