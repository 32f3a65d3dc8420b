pub mod app;
pub mod args;
pub mod collate;
pub mod colors;
pub mod error;
pub mod file_node;
pub mod logging;
pub mod navigator;
pub mod order;
pub mod scanner;
pub mod sort;
pub mod tree;
pub mod ui;
pub mod utils;
pub mod workspace;

pub use app::App;
pub use args::Args;
pub use error::NavError;
pub use file_node::{FileNode, FolderNode, Node};
pub use navigator::{Command, Direction, Navigator, Outcome};
pub use order::{FileTypes, navigable_files, sibling_folders};
pub use scanner::{ScanOptions, scan_dir};
pub use sort::SortMode;
pub use tree::Tree;
pub use workspace::{Preferences, Workspace};
