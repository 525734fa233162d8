use std::path::PathBuf;

use clap::{Parser, Subcommand};

use civil_date::{Date, DateRange, Unit};

/// Civil dates and half-open date ranges.
#[derive(Parser)]
#[command(
    name = "civil",
    version,
    about = "Calendar-day arithmetic without time zones"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: civil.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's date.
    Today(TodayArgs),
    /// Describe a date.
    Info(InfoArgs),
    /// Add years, months and days to a date.
    Add(AddArgs),
    /// Count the days from one date to another.
    Diff(DiffArgs),
    /// Build a range and print its encodings.
    Range(RangeArgs),
    /// List the dates of a range.
    List(ListArgs),
    /// Split a range at a date.
    Split(SplitArgs),
    /// Check whether a range contains a date.
    Contains(ContainsArgs),
    /// Check whether two ranges intersect.
    Intersects(IntersectsArgs),
    /// Sort dates chronologically.
    Sort(SortArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Use UTC instead of the configured zone.
    #[arg(long)]
    pub utc: bool,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Date to describe (YYYY-MM-DD unless --layout is given).
    pub date: String,

    /// strftime layout to parse DATE with.
    #[arg(short, long)]
    pub layout: Option<String>,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Starting date (YYYY-MM-DD).
    pub date: Date,

    /// Signed number of years to add.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i32,

    /// Signed number of months to add.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i32,

    /// Signed number of days to add.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i32,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Later date.
    pub to: Date,
    /// Earlier date.
    pub from: Date,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First day of the range (YYYY-MM-DD).
    pub start: Date,

    /// Exclusive end of the range.
    #[arg(short, long, conflicts_with_all = ["amount", "unit"])]
    pub end: Option<Date>,

    /// Signed length of the range in units.
    #[arg(short, long, allow_negative_numbers = true, requires = "unit")]
    pub amount: Option<i32>,

    /// Unit of --amount: day, month or year.
    #[arg(short, long)]
    pub unit: Option<Unit>,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Range in canonical form, e.g. "[2024-01-01,2024-02-01)".
    pub range: DateRange,

    /// Step: day, month or year.
    #[arg(short, long, default_value = "day")]
    pub unit: Unit,
}

/// Arguments for the `split` subcommand.
#[derive(clap::Args)]
pub struct SplitArgs {
    /// Range in canonical form.
    pub range: DateRange,
    /// Split point.
    pub date: Date,
}

/// Arguments for the `contains` subcommand.
#[derive(clap::Args)]
pub struct ContainsArgs {
    /// Range in canonical form.
    pub range: DateRange,
    pub date: Date,
}

/// Arguments for the `intersects` subcommand.
#[derive(clap::Args)]
pub struct IntersectsArgs {
    pub first: DateRange,
    pub second: DateRange,
}

/// Arguments for the `sort` subcommand.
#[derive(clap::Args)]
pub struct SortArgs {
    /// Dates to sort (YYYY-MM-DD).
    pub dates: Vec<Date>,

    /// Drop zero dates (0001-01-01) first.
    #[arg(long)]
    pub non_zero: bool,
}
