use anyhow::Context;
use newday_core::{FileAction, ProjectLayout, ScaffoldReport, Scaffolder};

use crate::cli::args::Cli;
use crate::cli::helpers::display_rel;
use crate::exit_codes;

pub fn run(args: &Cli) -> anyhow::Result<i32> {
    let raw = args.day.as_deref().unwrap_or_default();
    let scaffolder = Scaffolder::new(ProjectLayout::new(&args.root));
    tracing::debug!(root = %args.root.display(), day = raw, "scaffolding day");

    let report = scaffolder
        .new_day_str(raw)
        .with_context(|| format!("could not scaffold day '{}'", raw.trim()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(scaffolder.layout(), &report);
    }
    Ok(exit_codes::SUCCESS)
}

fn print_report(layout: &ProjectLayout, report: &ScaffoldReport) {
    let root = layout.root();
    let dir = display_rel(root, &report.puzzle_dir);
    if report.puzzle_dir_created {
        println!("Created {dir}/");
    } else {
        println!("Skipped {dir}/ (exists)");
    }

    let source = display_rel(root, &report.source_file);
    match report.source {
        FileAction::Created => println!("Created {source}"),
        FileAction::Skipped => println!("Skipped {source} (exists)"),
    }

    if !report.input_file.exists() {
        println!(
            "\nNext: save the puzzle input to {}",
            display_rel(root, &report.input_file)
        );
    }
}
