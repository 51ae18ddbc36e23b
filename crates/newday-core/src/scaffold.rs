//! The day scaffolder: puzzle directory plus solution module from template.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::day::Day;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::layout::ProjectLayout;

/// What happened to a scaffolded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    Created,
    /// Left untouched because it already existed.
    Skipped,
}

/// Outcome of a single `new_day` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub day: Day,
    pub puzzle_dir: PathBuf,
    /// False when the directory was already present.
    pub puzzle_dir_created: bool,
    pub source_file: PathBuf,
    pub source: FileAction,
    /// Where the puzzle runner looks for input by default.
    pub input_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Scaffolder {
    layout: ProjectLayout,
}

impl Scaffolder {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Parse `raw` as a day and scaffold it. A parse failure touches nothing.
    pub fn new_day_str(&self, raw: &str) -> ScaffoldResult<ScaffoldReport> {
        let day: Day = raw.parse()?;
        self.new_day(day)
    }

    /// Ensure `puzzles/<day>/` exists and seed `src/puzzles/day<day>.rs`
    /// from the template unless that file already exists.
    ///
    /// The directory is not removed if the copy fails afterwards.
    pub fn new_day(&self, day: Day) -> ScaffoldResult<ScaffoldReport> {
        let puzzle_dir = self.layout.puzzle_dir(day);
        let puzzle_dir_created = ensure_dir(&puzzle_dir)?;

        let source_file = self.layout.source_file(day);
        let source = if source_file.exists() {
            debug!(day = day.get(), path = %source_file.display(), "source file exists, skipping");
            FileAction::Skipped
        } else {
            copy_if_missing(&self.layout.template_file(), &source_file)?
        };

        Ok(ScaffoldReport {
            day,
            puzzle_dir,
            puzzle_dir_created,
            source_file,
            source,
            input_file: self.layout.input_file(day),
        })
    }
}

/// Returns true when the directory had to be created.
fn ensure_dir(dir: &Path) -> ScaffoldResult<bool> {
    if dir.is_dir() {
        debug!(path = %dir.display(), "directory exists");
        return Ok(false);
    }
    fs::create_dir_all(dir)
        .map_err(|e| ScaffoldError::filesystem("create directory", dir, e))?;
    info!(path = %dir.display(), "created directory");
    Ok(true)
}

/// Copy `template` to `dest` byte-for-byte. The destination is opened
/// create-new, so a file that appeared since the caller's existence check
/// is reported as skipped rather than overwritten.
fn copy_if_missing(template: &Path, dest: &Path) -> ScaffoldResult<FileAction> {
    let contents =
        fs::read(template).map_err(|e| ScaffoldError::filesystem("read template", template, e))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ScaffoldError::filesystem("create directory", parent, e))?;
    }

    let mut writer = match OpenOptions::new().write(true).create_new(true).open(dest) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %dest.display(), "source file appeared concurrently, skipping");
            return Ok(FileAction::Skipped);
        }
        Err(e) => return Err(ScaffoldError::filesystem("create", dest, e)),
    };

    if let Err(e) = writer.write_all(&contents) {
        drop(writer);
        // A truncated module would be skipped forever on the next run.
        let _ = fs::remove_file(dest);
        return Err(ScaffoldError::filesystem("write", dest, e));
    }

    info!(template = %template.display(), path = %dest.display(), "created source file from template");
    Ok(FileAction::Created)
}
