use crate::{
    args::Args,
    file_node::{FileNode, FolderNode, Node},
    navigator::{Command, Navigator, Outcome},
    order::{FileTypes, navigable_files, sibling_folders},
    scanner::{ScanOptions, scan_dir},
    sort::SortMode,
    tree::Tree,
    workspace::{Preferences, Workspace},
};
use ratatui::widgets::ListState;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    rc::Rc,
};
use tracing::{debug, info, warn};

/// A visible line of the tree view
#[derive(Debug, Clone)]
pub struct Row {
    pub node: Node,
    pub depth: usize,
}

/// Tree view state: what is open, what is collapsed, where the cursor is
pub struct Explorer {
    tree: Tree,
    active: Option<Rc<FileNode>>,
    collapsed: HashSet<PathBuf>,
    sort_mode: Option<SortMode>,
    file_types: FileTypes,
    /// Visible rows, rebuilt when the tree, the sort mode or a collapsed folder changes
    rows: Vec<Row>,
    pub state: ListState,
}

impl Explorer {
    pub fn new(tree: Tree, sort_mode: Option<SortMode>, file_types: FileTypes) -> Self {
        let mut explorer = Self {
            tree,
            active: None,
            collapsed: HashSet::new(),
            sort_mode,
            file_types,
            rows: Vec::new(),
            state: ListState::default(),
        };
        explorer.rebuild_rows();
        if !explorer.rows.is_empty() {
            explorer.state.select(Some(0));
        }
        explorer
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn active(&self) -> Option<&Rc<FileNode>> {
        self.active.as_ref()
    }

    pub fn sort_mode(&self) -> Option<SortMode> {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, sort_mode: Option<SortMode>) {
        self.sort_mode = sort_mode;
        self.rebuild_rows();
    }

    /// Swap in a rescanned tree. The open file is looked up again by path so it
    /// carries fresh metadata; when it is gone the old node stays focused.
    pub fn replace_tree(&mut self, tree: Tree) {
        self.tree = tree;
        if let Some(active) = &self.active
            && let Some(fresh) = self.tree.find_file(&active.path)
        {
            self.active = Some(fresh);
        }
        let tree = &self.tree;
        self.collapsed.retain(|path| tree.find_folder(path).is_some());
        self.rebuild_rows();
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        !self.collapsed.contains(path)
    }

    /// Rows in display order: sub-folders first, then navigable files.
    pub fn visible_rows(&self) -> &[Row] {
        &self.rows
    }

    fn rebuild_rows(&mut self) {
        let mut rows = Vec::new();
        self.push_rows(&self.tree.root(), 0, &mut rows);
        debug!(rows = rows.len(), "rebuilt tree rows");
        self.rows = rows;
    }

    fn push_rows(&self, folder: &FolderNode, depth: usize, rows: &mut Vec<Row>) {
        for child in sibling_folders(folder) {
            let expanded = self.is_expanded(&child.path);
            rows.push(Row {
                node: Node::Folder(Rc::clone(&child)),
                depth,
            });
            if expanded {
                self.push_rows(&child, depth + 1, rows);
            }
        }
        for file in self.files_of(folder) {
            rows.push(Row {
                node: Node::File(file),
                depth,
            });
        }
    }

    // Without a known sort order files keep scan order.
    fn files_of(&self, folder: &FolderNode) -> Vec<Rc<FileNode>> {
        match self.sort_mode {
            Some(mode) => navigable_files(folder, mode, &self.file_types),
            None => folder
                .children()
                .into_iter()
                .filter_map(|child| match child {
                    Node::File(file) if self.file_types.allows(&file) => Some(file),
                    _ => None,
                })
                .collect(),
        }
    }

    pub fn selected_row(&self) -> Option<Row> {
        let index = self.state.selected()?;
        self.rows.get(index).cloned()
    }
}

impl Workspace for Explorer {
    fn active_file(&self) -> Option<Rc<FileNode>> {
        self.active.clone()
    }

    fn root(&self) -> Rc<FolderNode> {
        self.tree.root()
    }

    fn parent(&self, path: &Path) -> Option<Rc<FolderNode>> {
        self.tree.parent_of(path)
    }

    fn open_file(&mut self, file: &Rc<FileNode>) {
        self.active = Some(Rc::clone(file));
    }

    /// Selects the row for `path`, or its closest visible ancestor.
    fn reveal(&mut self, path: &Path) {
        let index = path
            .ancestors()
            .find_map(|candidate| self.rows.iter().position(|row| row.node.path() == candidate));
        if let Some(index) = index {
            self.state.select(Some(index));
        }
    }

    fn is_collapsed(&self, folder: &FolderNode) -> bool {
        self.collapsed.contains(&folder.path)
    }

    fn set_collapsed(&mut self, folder: &FolderNode, collapsed: bool) {
        if collapsed {
            self.collapsed.insert(folder.path.clone());
        } else {
            self.collapsed.remove(&folder.path);
        }
        self.rebuild_rows();
    }
}

/// Runtime settings, seeded from the command line
#[derive(Debug, Clone)]
pub struct Settings {
    pub sort_order: String,
}

impl Preferences for Settings {
    fn sort_order(&self) -> String {
        self.sort_order.clone()
    }
}

/// Application State
pub struct App {
    pub explorer: Explorer,
    pub settings: Settings,
    pub file_types: FileTypes,
    pub scan_options: ScanOptions,
    pub root_path: PathBuf,
    pub error_count: usize,
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(tree: Tree, error_count: usize, args: &Args) -> Self {
        let mut file_types = FileTypes::default();
        file_types.extend(&args.extensions);

        let settings = Settings {
            sort_order: args.sort.clone(),
        };
        let (sort_mode, status_message) = match settings.sort_order.parse::<SortMode>() {
            Ok(mode) => (Some(mode), None),
            Err(e) => {
                warn!(error = %e, "configured sort order is not supported");
                (None, Some(e.to_string()))
            }
        };

        Self {
            root_path: tree.root().path.clone(),
            explorer: Explorer::new(tree, sort_mode, file_types.clone()),
            settings,
            file_types,
            scan_options: ScanOptions {
                follow_links: args.follow_links,
                include_hidden: args.all,
            },
            error_count,
            status_message,
            show_help: false,
        }
    }

    /// Run one of the navigation commands and report failures in the status bar.
    pub fn run_command(&mut self, command: Command) {
        let result = Navigator::new(&mut self.explorer, &self.settings, &self.file_types).execute(command);
        match result {
            Ok(Outcome::Opened(file)) => {
                info!(command = command.id(), file = %file.path.display(), "opened");
            }
            Ok(outcome) => {
                debug!(command = command.id(), ?outcome, "nothing to open");
            }
            Err(e) => {
                warn!(command = command.id(), error = %e, "command failed");
                self.status_message = Some(format!("{}: {}", command.name(), e));
            }
        }
    }

    pub fn toggle_sort_by_name(&mut self) {
        self.toggle_sort(SortMode::Alphabetical);
    }

    pub fn toggle_sort_by_mtime(&mut self) {
        self.toggle_sort(SortMode::ModifiedTime);
    }

    pub fn toggle_sort_by_ctime(&mut self) {
        self.toggle_sort(SortMode::CreatedTime);
    }

    fn toggle_sort(&mut self, criterion: SortMode) {
        let selected = self.explorer.selected_row().map(|row| row.node.path().to_path_buf());
        let mode = SortMode::toggle(self.explorer.sort_mode(), criterion);
        self.settings.sort_order = mode.key().to_string();
        self.explorer.set_sort_mode(Some(mode));
        if let Some(path) = selected {
            self.explorer.reveal(&path);
        }
        self.status_message = Some(format!("Sort: {}", mode.name()));
    }

    pub fn rows(&self) -> &[Row] {
        self.explorer.visible_rows()
    }

    pub fn next(&mut self) {
        let len = self.rows().len();
        let i = match self.explorer.state.selected() {
            Some(i) => {
                if len > 0 && i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        if len > 0 {
            self.explorer.state.select(Some(i));
        }
    }

    pub fn previous(&mut self) {
        let len = self.rows().len();
        let i = match self.explorer.state.selected() {
            Some(0) => len.saturating_sub(1),
            Some(i) => i - 1,
            None => 0,
        };
        if len > 0 {
            self.explorer.state.select(Some(i));
        }
    }

    pub fn page_down(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        let page_size = 10;
        let i = match self.explorer.state.selected() {
            Some(i) => (i + page_size).min(len - 1),
            None => 0,
        };
        self.explorer.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.rows().is_empty() {
            return;
        }
        let page_size = 10;
        let i = match self.explorer.state.selected() {
            Some(i) => i.saturating_sub(page_size),
            None => 0,
        };
        self.explorer.state.select(Some(i));
    }

    pub fn go_to_first(&mut self) {
        if !self.rows().is_empty() {
            self.explorer.state.select(Some(0));
        }
    }

    pub fn go_to_last(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.explorer.state.select(Some(len - 1));
        }
    }

    /// Open the file under the cursor, or expand/collapse the folder under it.
    pub fn activate(&mut self) {
        let Some(row) = self.explorer.selected_row() else {
            return;
        };
        match row.node {
            Node::File(file) => {
                self.explorer.open_file(&file);
                self.explorer.reveal(&file.path);
            }
            Node::Folder(folder) => {
                let collapsed = self.explorer.is_collapsed(&folder);
                self.explorer.set_collapsed(&folder, !collapsed);
            }
        }
    }

    /// Collapse the folder under the cursor, or jump to the enclosing folder.
    pub fn collapse(&mut self) {
        let Some(row) = self.explorer.selected_row() else {
            return;
        };
        if let Node::Folder(folder) = &row.node
            && !self.explorer.is_collapsed(folder)
        {
            self.explorer.set_collapsed(folder, true);
            return;
        }
        if let Some(parent) = self.explorer.parent(row.node.path())
            && !parent.is_root
        {
            self.explorer.reveal(&parent.path);
        }
    }

    /// Rescan the tree from disk. The open file is kept by path.
    pub fn refresh(&mut self) {
        let scan = scan_dir(&self.root_path, self.scan_options);
        self.error_count = scan.error_count;
        self.explorer.replace_tree(scan.tree);

        let focus = self
            .explorer
            .active()
            .map(|file| file.path.clone())
            .or_else(|| self.explorer.selected_row().map(|row| row.node.path().to_path_buf()));
        let len = self.rows().len();
        match focus {
            Some(path) => self.explorer.reveal(&path),
            None if len > 0 => self.explorer.state.select(Some(0)),
            None => self.explorer.state.select(None),
        }
        if self.explorer.state.selected().is_some_and(|i| i >= len) {
            self.explorer.state.select(if len > 0 { Some(len - 1) } else { None });
        }
        self.status_message = Some("Refresh complete!".to_string());
    }
}
