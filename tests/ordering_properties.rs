#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use proptest::prelude::*;
use std::{
    cmp::Ordering,
    collections::HashSet,
    path::PathBuf,
    rc::Rc,
    time::UNIX_EPOCH,
};
use treenav::{
    Command, FileNode, FileTypes, FolderNode, Navigator, Node, Outcome, SortMode, Tree, Workspace,
    app::{Explorer, Settings},
    navigable_files,
    order::compare_files,
};

fn files(names: &HashSet<String>) -> Vec<FileNode> {
    names
        .iter()
        .map(|name| FileNode::new(PathBuf::from("/vault").join(name), UNIX_EPOCH, UNIX_EPOCH, 0))
        .collect()
}

fn check_strict_total_order(files: &[FileNode], mode: SortMode) -> Result<(), TestCaseError> {
    for a in files {
        for b in files {
            let ab = compare_files(a, b, mode);
            prop_assert_eq!(ab, compare_files(b, a, mode).reverse());
            if a.name != b.name {
                prop_assert_ne!(ab, Ordering::Equal, "{} vs {}", a.name, b.name);
            }
            for c in files {
                if ab == Ordering::Less && compare_files(b, c, mode) == Ordering::Less {
                    prop_assert_eq!(
                        compare_files(a, c, mode),
                        Ordering::Less,
                        "{} < {} < {}",
                        a.name,
                        b.name,
                        c.name
                    );
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn alphabetical_is_strict_total_order(
        names in prop::collection::hash_set("[a-cA-C0-9 _-]{1,5}(\\.(md|pdf|PNG|Md))?", 1..10)
    ) {
        check_strict_total_order(&files(&names), SortMode::Alphabetical)?;
    }

    #[test]
    fn reversed_alphabetical_is_strict_total_order(
        names in prop::collection::hash_set("[a-cA-C0-9 _-]{1,5}(\\.(md|pdf|PNG|Md))?", 1..10)
    ) {
        check_strict_total_order(&files(&names), SortMode::AlphabeticalReverse)?;
    }

    #[test]
    fn forward_then_backward_returns(
        names in prop::collection::hash_set("[a-zA-Z0-9 ]{1,6}", 3..8),
        pick in any::<prop::sample::Index>(),
        reversed in any::<bool>(),
    ) {
        let mode = if reversed { SortMode::AlphabeticalReverse } else { SortMode::Alphabetical };
        let root = Rc::new(FolderNode::new(PathBuf::from("/vault"), true));
        for name in &names {
            let file = FileNode::new(root.path.join(format!("{name}.md")), UNIX_EPOCH, UNIX_EPOCH, 0);
            root.push_child(Node::File(Rc::new(file)));
        }
        let types = FileTypes::default();
        let sequence = navigable_files(&root, mode, &types);
        prop_assert_eq!(sequence.len(), names.len());

        let interior = 1 + pick.index(sequence.len() - 2);
        let start = Rc::clone(&sequence[interior]);

        let mut explorer = Explorer::new(Tree::new(root), Some(mode), types.clone());
        let settings = Settings { sort_order: mode.key().to_string() };
        explorer.open_file(&start);

        let forward = Navigator::new(&mut explorer, &settings, &types).execute(Command::NextFile).unwrap();
        let is_next = matches!(forward, Outcome::Opened(ref file) if file.path == sequence[interior + 1].path);
        prop_assert!(is_next);
        let back = Navigator::new(&mut explorer, &settings, &types).execute(Command::PreviousFile).unwrap();
        let is_start = matches!(back, Outcome::Opened(ref file) if file.path == start.path);
        prop_assert!(is_start);
    }
}
