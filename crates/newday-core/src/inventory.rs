//! Inventory of days already scaffolded in a project.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::day::Day;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::layout::ProjectLayout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub day: Day,
    pub has_source: bool,
    pub has_puzzle_dir: bool,
    pub has_input: bool,
}

/// List every day that has a solution module or a puzzle directory,
/// ascending. Names outside the `dayN.rs` / `N` scheme are ignored.
pub fn scan(layout: &ProjectLayout) -> ScaffoldResult<Vec<DayEntry>> {
    let mut days: BTreeMap<Day, DayEntry> = BTreeMap::new();

    for name in file_names(&layout.source_root())? {
        if let Some(day) = parse_source_name(&name) {
            if layout.source_file(day).is_file() {
                entry(&mut days, day).has_source = true;
            }
        }
    }

    for name in file_names(&layout.puzzles_root())? {
        let Ok(day) = name.parse::<u32>().map(Day::new) else {
            continue;
        };
        // "05" would not be the canonical directory for day 5.
        if day.to_string() != name || !layout.puzzle_dir(day).is_dir() {
            continue;
        }
        let e = entry(&mut days, day);
        e.has_puzzle_dir = true;
        e.has_input = layout.input_file(day).is_file();
    }

    debug!(count = days.len(), root = %layout.root().display(), "scanned days");
    Ok(days.into_values().collect())
}

fn entry(days: &mut BTreeMap<Day, DayEntry>, day: Day) -> &mut DayEntry {
    days.entry(day).or_insert(DayEntry {
        day,
        has_source: false,
        has_puzzle_dir: false,
        has_input: false,
    })
}

fn parse_source_name(name: &str) -> Option<Day> {
    let digits = name.strip_prefix("day")?.strip_suffix(".rs")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day = Day::new(digits.parse().ok()?);
    (day.to_string() == digits).then_some(day)
}

/// Entry names of `dir`; a missing directory is empty.
fn file_names(dir: &Path) -> ScaffoldResult<Vec<String>> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ScaffoldError::filesystem("read directory", dir, e)),
    };

    let mut names = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| ScaffoldError::filesystem("read directory", dir, e))?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}
