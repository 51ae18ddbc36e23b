use anyhow::Context;
use newday_core::{inventory, ProjectLayout};

use crate::cli::args::Cli;
use crate::cli::helpers::mark;
use crate::exit_codes;

pub fn run(args: &Cli) -> anyhow::Result<i32> {
    let layout = ProjectLayout::new(&args.root);
    let days = inventory::scan(&layout)
        .with_context(|| format!("could not list days under {}", args.root.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(exit_codes::SUCCESS);
    }

    if days.is_empty() {
        println!("No days scaffolded yet. Run 'newday <DAY>' to start one.");
        return Ok(exit_codes::SUCCESS);
    }

    println!("day\tsource\tdir\tinput");
    for entry in &days {
        println!(
            "{}\t{}\t{}\t{}",
            entry.day,
            mark(entry.has_source),
            mark(entry.has_puzzle_dir),
            mark(entry.has_input)
        );
    }
    Ok(exit_codes::SUCCESS)
}
