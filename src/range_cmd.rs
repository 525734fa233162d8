//! Commands on date ranges: range, list, split, contains, intersects.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info_span};

use civil_date::{DateRange, Unit};

use crate::cli::{ContainsArgs, IntersectsArgs, ListArgs, RangeArgs, SplitArgs};
use crate::output::Printer;

#[derive(Debug, Serialize)]
struct RangeReport {
    range: DateRange,
    encoded: String,
    days: i64,
}

#[derive(Debug, Serialize)]
struct SplitReport {
    left: DateRange,
    right: DateRange,
}

fn build_range(args: &RangeArgs) -> Result<DateRange> {
    Ok(match (args.end, args.amount, args.unit) {
        (Some(end), _, _) => DateRange::new(args.start, end),
        (None, Some(amount), Some(unit)) => {
            DateRange::checked_with_duration(args.start, amount, unit).with_context(|| {
                format!("{} plus {amount} {unit} is out of range", args.start)
            })?
        }
        _ => bail!("either --end or --amount with --unit is required"),
    })
}

pub fn range(printer: &Printer, args: RangeArgs) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let range = build_range(&args)?;
    let report = RangeReport {
        range,
        encoded: range.encode(),
        days: range.count(Unit::Day),
    };
    printer.emit(&report, || {
        format!("{}\n{}\n{} days", report.encoded, report.range, report.days)
    })
}

pub fn list(printer: &Printer, args: ListArgs) -> Result<()> {
    let _cmd = info_span!("list").entered();
    let dates = args.range.to_slice(args.unit);
    debug!(range = %args.range, unit = %args.unit, n_dates = dates.len(), "listed range");
    printer.emit(&dates, || {
        dates
            .iter()
            .map(|&d| printer.date(d))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn split(printer: &Printer, args: SplitArgs) -> Result<()> {
    let _cmd = info_span!("split").entered();
    let (left, right) = args.range.split2(args.date);
    let report = SplitReport { left, right };
    printer.emit(&report, || format!("{}\n{}", left.encode(), right.encode()))
}

pub fn contains(printer: &Printer, args: ContainsArgs) -> Result<()> {
    let _cmd = info_span!("contains").entered();
    let contains = args.range.contains(args.date);
    printer.emit(&contains, || contains.to_string())
}

pub fn intersects(printer: &Printer, args: IntersectsArgs) -> Result<()> {
    let _cmd = info_span!("intersects").entered();
    let intersects = args.first.intersects(&args.second);
    printer.emit(&intersects, || intersects.to_string())
}
