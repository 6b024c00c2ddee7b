use crate::calc::{recent, StatusCounts};
use crate::data::{CurrentUser, LeaveApplication, LeaveBalance, LeaveRepository};
use anyhow::Result;

const RECENT_COUNT: usize = 4;

pub fn run(repo: &dyn LeaveRepository) -> Result<()> {
    let user = repo.current_user()?;
    let balances = repo.balances()?;
    let applications = repo.applications()?;
    write_dashboard(&user, &balances, &applications, &mut std::io::stdout())
}

pub(crate) fn write_dashboard<W: std::io::Write>(
    user: &CurrentUser,
    balances: &[LeaveBalance],
    applications: &[LeaveApplication],
    out: &mut W,
) -> Result<()> {
    let counts = StatusCounts::of(applications);

    writeln!(out, "Dashboard")?;
    writeln!(
        out,
        "Welcome back, {}. Here's your leave overview.",
        user.first_name()
    )?;
    writeln!(
        out,
        "{} ({}) - {}, {}. Manager: {}",
        user.name, user.employee_id, user.role, user.department, user.manager_name
    )?;
    writeln!(out, "---")?;
    for b in balances {
        writeln!(
            out,
            "{:<26} {:>3} of {:<3} days remaining ({} used)",
            format!("{}:", b.leave_type),
            b.remaining,
            b.total,
            b.used
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{:<26} {}", "Pending:", counts.pending)?;
    writeln!(out, "{:<26} {}", "Approved:", counts.approved)?;
    writeln!(out, "{:<26} {}", "Rejected:", counts.rejected)?;
    writeln!(out, "{:<26} {}", "Total Applications:", counts.total)?;
    writeln!(out, "---")?;
    writeln!(out, "Recent Applications")?;
    for a in recent(applications, RECENT_COUNT) {
        writeln!(
            out,
            "  {:<12} {:<22} {} -> {}  {}",
            a.id,
            a.leave_type.label(),
            a.start_date.format("%Y-%m-%d"),
            a.end_date.format("%Y-%m-%d"),
            a.status
        )?;
    }
    writeln!(out, "---")?;
    Ok(())
}
