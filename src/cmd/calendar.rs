use crate::calc::calendar_grid::month_name;
use crate::calc::{
    build_month_grid, shift_month, team_events, upcoming_events, CalendarCell, MonthGrid,
};
use crate::cmd::upcoming::write_upcoming;
use crate::data::{AppSettings, LeaveEvent, LeaveRepository};
use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use std::io::Write;

const HEADER: &str = "Su  Mo  Tu  We  Th  Fr  Sa";

/// Which month to show, as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthArgs {
    pub year: Option<i32>,
    /// 1-based.
    pub month: Option<u32>,
    pub offset: i32,
}

/// Resolves the arguments to a (year, zero-based month) pair.
pub(crate) fn resolve_month(args: MonthArgs, today: NaiveDate) -> Result<(i32, u32)> {
    let month = match args.month {
        Some(m) if (1..=12).contains(&m) => m - 1,
        Some(m) => bail!("month must be between 1 and 12, got {}", m),
        None => today.month0(),
    };
    let year = args.year.unwrap_or(today.year());
    let Some(shifted) = shift_month(year, month, args.offset) else {
        bail!("moving {} month(s) from {} leaves the supported year range", args.offset, year);
    };
    Ok(shifted)
}

pub fn run(
    repo: &dyn LeaveRepository,
    settings: &AppSettings,
    args: MonthArgs,
    today: NaiveDate,
) -> Result<()> {
    let (year, month) = resolve_month(args, today)?;
    let events = team_events(&repo.team_calendar()?, &repo.applications()?);
    tracing::debug!(year, month, events = events.len(), "rendering team calendar");
    let grid = build_month_grid(year, month, &events);
    let mut out = std::io::stdout();
    write_calendar(&grid, settings.cell_event_limit, today, &mut out)?;
    writeln!(out)?;
    write_upcoming(&upcoming_events(&events, today, settings.upcoming_limit), &mut out)
}

fn cell_text(cell: &CalendarCell, today: NaiveDate) -> String {
    match cell {
        CalendarCell::Blank => "    ".to_string(),
        CalendarCell::Day(day) => {
            let mark = if day.date == Some(today) {
                '>'
            } else if day.events.is_empty() {
                ' '
            } else {
                '*'
            };
            format!("{:>2}{} ", day.day, mark)
        }
    }
}

fn event_tag(e: &LeaveEvent) -> String {
    format!("{} ({}, {})", e.initials, e.leave_type, e.status)
}

pub(crate) fn write_calendar<W: std::io::Write>(
    grid: &MonthGrid,
    cell_event_limit: usize,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    let title = format!("{} {}", month_name(grid.month), grid.year);
    writeln!(out, "{:^26}", title)?;
    writeln!(out, "{HEADER}")?;
    for week in grid.weeks() {
        let line: String = week.iter().map(|c| cell_text(c, today)).collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out, "---")?;

    let mut any = false;
    for day in (1..=grid.days_in_month).filter_map(|n| grid.day(n)) {
        if day.events.is_empty() {
            continue;
        }
        any = true;
        let (shown, more) = day.visible_events(cell_event_limit);
        let tags: Vec<String> = shown.iter().map(|e| event_tag(e)).collect();
        write!(out, "  {:>2}  {}", day.day, tags.join(", "))?;
        if more > 0 {
            write!(out, " +{more} more")?;
        }
        writeln!(out)?;
    }
    if !any {
        writeln!(out, "  No one is on leave this month.")?;
    }
    writeln!(out, "---")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample, LeaveStatus, LeaveType};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn render(grid: &MonthGrid, limit: usize, today: NaiveDate) -> String {
        let mut buf = Vec::new();
        write_calendar(grid, limit, today, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_resolve_month_defaults_to_today() {
        let today = d(2026, 2, 24);
        assert_eq!(resolve_month(MonthArgs::default(), today).unwrap(), (2026, 1));
    }

    #[test]
    fn test_resolve_month_converts_one_based() {
        let args = MonthArgs {
            year: Some(2025),
            month: Some(12),
            offset: 0,
        };
        assert_eq!(resolve_month(args, d(2026, 2, 24)).unwrap(), (2025, 11));
    }

    #[test]
    fn test_resolve_month_offset_crosses_year() {
        let args = MonthArgs {
            year: None,
            month: Some(1),
            offset: -1,
        };
        assert_eq!(resolve_month(args, d(2026, 2, 24)).unwrap(), (2025, 11));
    }

    #[test]
    fn test_resolve_month_rejects_year_overflow() {
        let args = MonthArgs {
            year: Some(i32::MAX),
            month: Some(12),
            offset: 1,
        };
        let err = resolve_month(args, d(2026, 2, 24)).unwrap_err();
        assert!(err.to_string().contains("year range"));
    }

    #[test]
    fn test_resolve_month_rejects_out_of_range() {
        let args = MonthArgs {
            month: Some(13),
            ..MonthArgs::default()
        };
        assert!(resolve_month(args, d(2026, 2, 24)).is_err());
        let args = MonthArgs {
            month: Some(0),
            ..MonthArgs::default()
        };
        assert!(resolve_month(args, d(2026, 2, 24)).is_err());
    }

    #[test]
    fn test_write_calendar_february_2026() {
        let events = team_events(&sample::team_calendar(), &sample::applications());
        let grid = build_month_grid(2026, 1, &events);
        let out = render(&grid, 3, d(2026, 2, 24));
        assert!(out.contains("February 2026"));
        assert!(out.contains(HEADER));
        // Feb 1 2026 is a Sunday: first week starts at column one
        let first_week = out.lines().nth(2).unwrap();
        assert!(first_week.starts_with(" 1"));
        assert!(out.contains("24> "));
        assert!(out.contains("ST (Emergency Leave, Pending)"));
        assert!(out.contains("ML (Sick Leave, Pending)"));
    }

    #[test]
    fn test_write_calendar_truncates_busy_days() {
        let events: Vec<LeaveEvent> = ["A1", "B2", "C3", "D4", "E5"]
            .iter()
            .map(|n| {
                let day = d(2026, 3, 3);
                LeaveEvent::new(n, n, LeaveType::Sick, day, day, LeaveStatus::Pending)
            })
            .collect();
        let grid = build_month_grid(2026, 2, &events);
        let out = render(&grid, 3, d(2026, 1, 1));
        let line = out.lines().find(|l| l.trim_start().starts_with("3  ")).unwrap();
        assert!(line.contains("C3"));
        assert!(!line.contains("D4"));
        assert!(line.contains("+2 more"));
    }

    #[test]
    fn test_write_calendar_empty_month() {
        let grid = build_month_grid(2026, 6, &[]);
        let out = render(&grid, 3, d(2026, 2, 24));
        assert!(out.contains("July 2026"));
        assert!(out.contains("No one is on leave this month."));
    }
}
