//! Path derivation for a puzzle project.

use std::path::{Path, PathBuf};

use crate::day::Day;

pub const PUZZLES_DIR: &str = "puzzles";
pub const SOURCE_DIR: &str = "src/puzzles";
pub const TEMPLATE_FILE: &str = "templates/dayn.rs";
pub const INPUT_FILE: &str = "input.txt";

/// Fixed on-disk layout of a puzzle project rooted at `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `puzzles/`
    pub fn puzzles_root(&self) -> PathBuf {
        self.root.join(PUZZLES_DIR)
    }

    /// `src/puzzles/`
    pub fn source_root(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// `puzzles/<day>/`
    pub fn puzzle_dir(&self, day: Day) -> PathBuf {
        self.puzzles_root().join(day.to_string())
    }

    /// `puzzles/<day>/input.txt`, the default input read by the puzzle runner.
    pub fn input_file(&self, day: Day) -> PathBuf {
        self.puzzle_dir(day).join(INPUT_FILE)
    }

    /// `src/puzzles/day<day>.rs`
    pub fn source_file(&self, day: Day) -> PathBuf {
        self.source_root().join(format!("{}.rs", day.module_name()))
    }

    /// `templates/dayn.rs`. Shared by every day.
    pub fn template_file(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
