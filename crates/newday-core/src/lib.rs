//! Per-day scaffolding for a puzzle workspace.
//!
//! A day `N` owns two artifacts under the project root:
//!
//! - `puzzles/N/`: the working directory for puzzle input
//! - `src/puzzles/dayN.rs`: the solution module, seeded from `templates/dayn.rs`
//!
//! # Quick Start
//!
//! ```no_run
//! use newday_core::{Day, ProjectLayout, Scaffolder};
//!
//! # fn example() -> newday_core::ScaffoldResult<()> {
//! let scaffolder = Scaffolder::new(ProjectLayout::new("."));
//! let report = scaffolder.new_day(Day::new(5))?;
//! println!("{}: {:?}", report.source_file.display(), report.source);
//! # Ok(())
//! # }
//! ```
//!
//! The project root is always explicit. Nothing in this crate reads the
//! process working directory.

pub mod day;
pub mod error;
pub mod inventory;
pub mod layout;
pub mod scaffold;

pub use day::Day;
pub use error::{ScaffoldError, ScaffoldResult};
pub use inventory::DayEntry;
pub use layout::ProjectLayout;
pub use scaffold::{FileAction, ScaffoldReport, Scaffolder};
