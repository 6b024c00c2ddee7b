use crate::calc::{filter_by_status, StatusCounts};
use crate::data::{LeaveApplication, LeaveRepository, LeaveStatus};
use anyhow::Result;

pub fn run(repo: &dyn LeaveRepository, status: Option<LeaveStatus>) -> Result<()> {
    let applications = repo.applications()?;
    write_applications(&applications, status, &mut std::io::stdout())
}

pub(crate) fn write_applications<W: std::io::Write>(
    applications: &[LeaveApplication],
    status: Option<LeaveStatus>,
    out: &mut W,
) -> Result<()> {
    let counts = StatusCounts::of(applications);
    let shown = filter_by_status(applications, status);

    writeln!(out, "My Applications")?;
    write!(out, "  All: {}", counts.total)?;
    for s in LeaveStatus::ALL {
        write!(out, " | {}: {}", s, counts.get(s))?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    if shown.is_empty() {
        let label = status.map_or("", |s| s.label());
        writeln!(out, "  No {label} applications found.")?;
    } else {
        writeln!(
            out,
            "  {:<12} {:<22} {:<11} {:<11} {:>4}  {}",
            "ID", "Type", "Start", "End", "Days", "Status"
        )?;
        for a in &shown {
            writeln!(
                out,
                "  {:<12} {:<22} {:<11} {:<11} {:>4}  {}",
                a.id,
                a.leave_type.label(),
                a.start_date.format("%Y-%m-%d"),
                a.end_date.format("%Y-%m-%d"),
                a.days,
                a.status
            )?;
            writeln!(out, "      applied {}", a.applied_date.format("%Y-%m-%d"))?;
            if !a.reason.trim().is_empty() {
                writeln!(out, "      reason: {}", a.reason.trim())?;
            }
            if let Some(by) = &a.approved_by {
                writeln!(out, "      reviewed by {by}")?;
            }
            if let Some(c) = &a.comments {
                writeln!(out, "      \"{c}\"")?;
            }
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "Showing {} of {} application(s)", shown.len(), counts.total)?;
    Ok(())
}
