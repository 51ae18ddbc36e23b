use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "newday",
    version,
    about = "Scaffold a puzzle day: puzzles/<DAY>/ and src/puzzles/day<DAY>.rs from templates/dayn.rs"
)]
pub struct Cli {
    /// Puzzle day to scaffold (non-negative integer)
    #[arg(
        value_name = "DAY",
        required_unless_present = "list",
        allow_negative_numbers = true
    )]
    pub day: Option<String>,

    /// Project root containing templates/, puzzles/ and src/
    #[arg(long, env = "NEWDAY_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// List scaffolded days and exit
    #[arg(long, conflicts_with = "day")]
    pub list: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests;
