mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use next_date::CalendarDate;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command, NextArgs, ParseArgs};

/// Dates run by the `samples` subcommand: (month, day, year, note).
const SAMPLES: &[(i32, i32, i32, &str)] = &[
    (6, 15, 2024, "middle of a month"),
    (6, 30, 2024, "last day of a 30-day month"),
    (1, 31, 2024, "last day of a 31-day month"),
    (12, 31, 2024, "end of year"),
    (2, 28, 2024, "February in a leap year"),
    (2, 28, 2023, "February in a non-leap year"),
    (12, 31, 2100, "upper boundary"),
    (12, 31, 1811, "before lower boundary"),
];

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Next(args) => next(&args),
        Command::Parse(args) => parse(&args),
        Command::Samples => {
            samples();
            Ok(())
        }
    }
}

fn next(args: &NextArgs) -> Result<()> {
    debug!(
        month = args.month,
        day = args.day,
        year = args.year,
        "advancing date"
    );
    let next = next_date::next_date(args.month, args.day, args.year).with_context(|| {
        format!(
            "cannot advance {:02}/{:02}/{:04}",
            args.month, args.day, args.year
        )
    })?;
    println!("{next}");
    Ok(())
}

fn parse(args: &ParseArgs) -> Result<()> {
    let date: CalendarDate = args
        .date
        .parse()
        .with_context(|| format!("cannot parse {:?}", args.date))?;
    debug!(%date, "parsed date");
    println!("{}", date.next());
    Ok(())
}

fn samples() {
    println!("=== Testing NextDate Program ===");
    for (i, &(month, day, year, note)) in SAMPLES.iter().enumerate() {
        println!();
        println!("Test {}: {month:02}/{day:02}/{year:04} ({note})", i + 1);
        match next_date::next_date(month, day, year) {
            Ok(next) => {
                info!(month, day, year, %next, "sample advanced");
                println!("Next date: {next}");
            }
            Err(e) => {
                warn!(month, day, year, field = %e.field(), "sample rejected");
                println!("Error: {e}");
            }
        }
    }
}
