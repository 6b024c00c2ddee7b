use crate::data::{LeaveBalance, LeaveRepository};
use anyhow::Result;

pub fn run(repo: &dyn LeaveRepository) -> Result<()> {
    let balances = repo.balances()?;
    write_balances(&balances, &mut std::io::stdout())
}

pub(crate) fn write_balances<W: std::io::Write>(
    balances: &[LeaveBalance],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Leave Balances")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<24} {:>6} {:>6} {:>10} {:>7}",
        "Type", "Total", "Used", "Remaining", "Used %"
    )?;
    for b in balances {
        writeln!(
            out,
            "  {:<24} {:>6} {:>6} {:>10} {:>6.0}%",
            b.leave_type.label(),
            b.total,
            b.used,
            b.remaining,
            b.used_percent()
        )?;
    }
    writeln!(out, "---")?;
    Ok(())
}
