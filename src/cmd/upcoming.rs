use crate::calc::{team_events, upcoming_events};
use crate::data::{LeaveEvent, LeaveRepository};
use anyhow::Result;
use chrono::NaiveDate;

pub fn run(repo: &dyn LeaveRepository, today: NaiveDate, limit: usize) -> Result<()> {
    let events = team_events(&repo.team_calendar()?, &repo.applications()?);
    let upcoming = upcoming_events(&events, today, limit);
    write_upcoming(&upcoming, &mut std::io::stdout())
}

pub(crate) fn write_upcoming<W: std::io::Write>(events: &[&LeaveEvent], out: &mut W) -> Result<()> {
    writeln!(out, "Upcoming Leave")?;
    writeln!(out, "---")?;
    if events.is_empty() {
        writeln!(out, "  Nothing scheduled.")?;
    }
    for e in events {
        writeln!(
            out,
            "  {:<4} {:<16} {:<22} {} -> {}  {}",
            e.initials,
            e.name,
            e.leave_type.label(),
            e.start_date.format("%Y-%m-%d"),
            e.end_date.format("%Y-%m-%d"),
            e.status
        )?;
    }
    writeln!(out, "---")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample, SampleRepository};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_write_upcoming_sample_from_feb_24() {
        let events = team_events(&sample::team_calendar(), &sample::applications());
        let upcoming = upcoming_events(&events, d(2026, 2, 24), 6);
        let mut buf = Vec::new();
        write_upcoming(&upcoming, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let rows: Vec<&str> = out.lines().filter(|l| l.contains(" -> ")).collect();
        assert_eq!(rows.len(), 6);
        // Sam's single day starts on the reference date and sorts first
        assert!(rows[0].contains("Sam Torres"));
        assert!(rows[1].contains("Morgan Lee"));
        // Alex's February sick leave is in the past
        assert!(!out.contains("2026-02-05"));
    }

    #[test]
    fn test_write_upcoming_empty() {
        let mut buf = Vec::new();
        write_upcoming(&[], &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Nothing scheduled."));
    }

    #[test]
    fn test_run_with_sample_repository() {
        assert!(run(&SampleRepository, d(2026, 2, 24), 3).is_ok());
    }
}
