use clap::{Parser, Subcommand};

/// Prints the calendar date following a given date.
#[derive(Parser)]
#[command(
    name = "next-date",
    version,
    about = "Compute the date following a Gregorian date (years 1812-2100)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Advance a date given as separate month, day and year.
    Next(NextArgs),
    /// Advance a date written as MM/DD/YYYY.
    Parse(ParseArgs),
    /// Run the built-in sample dates, including one outside the valid range.
    Samples,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Month (1-12).
    #[arg(allow_negative_numbers = true)]
    pub month: i32,

    /// Day of the month.
    #[arg(allow_negative_numbers = true)]
    pub day: i32,

    /// Year (1812-2100).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Date in MM/DD/YYYY form.
    pub date: String,
}
