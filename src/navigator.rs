//! Stepping through files and folders in explorer display order.

use crate::{
    error::NavError,
    file_node::{FileNode, FolderNode},
    order::{FileTypes, navigable_files, sibling_folders},
    sort::SortMode,
    workspace::{Preferences, Workspace},
};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Commands exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextFile,
    PreviousFile,
    NextFolder,
    PreviousFolder,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::NextFile,
        Command::PreviousFile,
        Command::NextFolder,
        Command::PreviousFolder,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Command::NextFile => "file-explorer-next-file",
            Command::PreviousFile => "file-explorer-previous-file",
            Command::NextFolder => "file-explorer-next-folder",
            Command::PreviousFolder => "file-explorer-previous-folder",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::NextFile => "Go to next file",
            Command::PreviousFile => "Go to previous file",
            Command::NextFolder => "Go to next folder",
            Command::PreviousFolder => "Go to previous folder",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Command::NextFile | Command::NextFolder => Direction::Forward,
            Command::PreviousFile | Command::PreviousFolder => Direction::Backward,
        }
    }
}

/// Result of a command that did not fail
#[derive(Debug, Clone)]
pub enum Outcome {
    Opened(Rc<FileNode>),
    /// Already at the first or last item, or the open file is no longer listed.
    NoNextItem,
    /// Folder stepping with nothing open.
    NoCurrentFolder,
    /// Folder stepping from a file directly under the root.
    AtRoot,
}

/// Computes the next file to open from a fresh read of the workspace.
pub struct Navigator<'a, W: ?Sized, P: ?Sized> {
    workspace: &'a mut W,
    preferences: &'a P,
    file_types: &'a FileTypes,
}

impl<'a, W, P> Navigator<'a, W, P>
where
    W: Workspace + ?Sized,
    P: Preferences + ?Sized,
{
    pub fn new(workspace: &'a mut W, preferences: &'a P, file_types: &'a FileTypes) -> Self {
        Self {
            workspace,
            preferences,
            file_types,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, NavError> {
        debug!(command = command.id(), "running command");
        match command {
            Command::NextFile | Command::PreviousFile => self.step_file(command.direction()),
            Command::NextFolder | Command::PreviousFolder => self.step_folder(command.direction()),
        }
    }

    fn sort_mode(&self) -> Result<SortMode, NavError> {
        self.preferences.sort_order().parse()
    }

    /// Open the file next to the open one within its folder. With nothing
    /// open, open the first or last file of the root instead.
    pub fn step_file(&mut self, direction: Direction) -> Result<Outcome, NavError> {
        let mode = self.sort_mode()?;

        let Some(active) = self.workspace.active_file() else {
            let root = self.workspace.root();
            return self.open_boundary_with(&root, direction, mode).map(Outcome::Opened);
        };
        let Some(parent) = self.workspace.parent(&active.path) else {
            return Ok(Outcome::NoNextItem);
        };

        let files = navigable_files(&parent, mode, self.file_types);
        let is_active = |file: &Rc<FileNode>| file.path == active.path;
        let target = match direction {
            Direction::Forward => files
                .iter()
                .position(is_active)
                .and_then(|index| files.get(index + 1)),
            Direction::Backward => files
                .iter()
                .rposition(is_active)
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| files.get(index)),
        };

        match target {
            Some(file) => {
                self.open(file);
                Ok(Outcome::Opened(Rc::clone(file)))
            }
            None => {
                debug!(file = %active.path.display(), "no next item");
                Ok(Outcome::NoNextItem)
            }
        }
    }

    /// Open the first file of the next or previous sibling folder that has one.
    pub fn step_folder(&mut self, direction: Direction) -> Result<Outcome, NavError> {
        let Some(current) = self
            .workspace
            .active_file()
            .and_then(|active| self.workspace.parent(&active.path))
        else {
            return Ok(Outcome::NoCurrentFolder);
        };
        if current.is_root {
            return Ok(Outcome::AtRoot);
        }
        let Some(parent) = self.workspace.parent(&current.path) else {
            return Ok(Outcome::AtRoot);
        };

        let mode = self.sort_mode()?;
        let siblings = sibling_folders(&parent);
        let Some(index) = siblings.iter().position(|folder| folder.path == current.path) else {
            return Ok(Outcome::NoNextItem);
        };
        let candidates: Vec<&Rc<FolderNode>> = match direction {
            Direction::Forward => siblings.iter().skip(index + 1).collect(),
            Direction::Backward => siblings.iter().take(index).rev().collect(),
        };

        for folder in candidates {
            let files = navigable_files(folder, mode, self.file_types);
            let Some(first) = files.first() else {
                debug!(folder = %folder.path.display(), "skipping folder without navigable files");
                continue;
            };
            self.workspace.open_file(first);
            if self.workspace.is_collapsed(folder) {
                self.workspace.set_collapsed(folder, false);
            }
            self.workspace.reveal(&folder.path);
            debug!(folder = %folder.path.display(), file = %first.path.display(), "opened folder");
            return Ok(Outcome::Opened(Rc::clone(first)));
        }
        Ok(Outcome::NoNextItem)
    }

    /// Open the first (forward) or last (backward) file of `folder`.
    pub fn open_boundary_file(
        &mut self,
        folder: &FolderNode,
        direction: Direction,
    ) -> Result<Rc<FileNode>, NavError> {
        let mode = self.sort_mode()?;
        self.open_boundary_with(folder, direction, mode)
    }

    fn open_boundary_with(
        &mut self,
        folder: &FolderNode,
        direction: Direction,
        mode: SortMode,
    ) -> Result<Rc<FileNode>, NavError> {
        let files = navigable_files(folder, mode, self.file_types);
        let boundary = match direction {
            Direction::Forward => files.first(),
            Direction::Backward => files.last(),
        };
        let file = boundary.ok_or_else(|| NavError::EmptyFolder(folder.path.clone()))?;
        self.open(file);
        Ok(Rc::clone(file))
    }

    fn open(&mut self, file: &Rc<FileNode>) {
        debug!(file = %file.path.display(), "opening file");
        self.workspace.open_file(file);
        self.workspace.reveal(&file.path);
    }
}
