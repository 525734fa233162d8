//! Commands on single dates: today, info, add, diff, sort.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use civil_date::{Date, DateSlice};

use crate::cli::{AddArgs, DiffArgs, InfoArgs, SortArgs, TodayArgs};
use crate::config::CivilConfig;
use crate::output::Printer;

#[derive(Debug, Serialize)]
struct Info {
    date: Date,
    year: i32,
    month: u32,
    day: u32,
    weekday: String,
    iso_year: i32,
    iso_week: u32,
    is_zero: bool,
}

impl Info {
    fn new(date: Date) -> Self {
        let (iso_year, iso_week) = date.iso_week();
        Self {
            date,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            weekday: date.weekday().to_string(),
            iso_year,
            iso_week,
            is_zero: date.is_zero(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Diff {
    from: Date,
    to: Date,
    days: i64,
}

#[derive(Debug, Serialize)]
struct Sorted {
    dates: DateSlice,
    min: Date,
    max: Date,
}

pub fn today(config: &CivilConfig, printer: &Printer, args: TodayArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let today = config.clock.today(args.utc)?;
    debug!(zone = ?config.clock.zone, utc = args.utc, %today, "resolved today");
    printer.emit(&today, || printer.date(today))
}

pub fn info(printer: &Printer, args: InfoArgs) -> Result<()> {
    let _cmd = info_span!("info").entered();
    let date = match &args.layout {
        Some(layout) => Date::parse(layout, &args.date)?,
        None => args
            .date
            .parse::<Date>()
            .with_context(|| format!("expected YYYY-MM-DD, got {:?}", args.date))?,
    };
    let info = Info::new(date);
    printer.emit(&info, || {
        format!(
            "{}\nweekday: {}\niso week: {}-W{:02}\nzero: {}",
            printer.date(date),
            info.weekday,
            info.iso_year,
            info.iso_week,
            info.is_zero
        )
    })
}

pub fn add(printer: &Printer, args: AddArgs) -> Result<()> {
    let _cmd = info_span!("add").entered();
    let date = args
        .date
        .checked_add_date(args.years, args.months, args.days)
        .with_context(|| format!("{} plus the given offsets is out of range", args.date))?;
    printer.emit(&date, || printer.date(date))
}

pub fn diff(printer: &Printer, args: DiffArgs) -> Result<()> {
    let _cmd = info_span!("diff").entered();
    let diff = Diff {
        from: args.from,
        to: args.to,
        days: args.to.difference(args.from),
    };
    printer.emit(&diff, || diff.days.to_string())
}

pub fn sort(printer: &Printer, args: SortArgs) -> Result<()> {
    let _cmd = info_span!("sort").entered();
    let mut dates = DateSlice::from(args.dates);
    if args.non_zero {
        dates = dates.non_zero();
    }
    dates.sort_chronologically();
    let sorted = Sorted {
        min: dates.min(),
        max: dates.max(),
        dates,
    };
    printer.emit(&sorted, || {
        sorted
            .dates
            .iter()
            .map(|&d| printer.date(d))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
