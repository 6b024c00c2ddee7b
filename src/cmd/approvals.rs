use crate::calc::{ApprovalQueue, Decision, DecisionState};
use crate::data::{AppSettings, LeaveApplication, LeaveRepository, LeaveStatus};
use anyhow::{bail, Result};

pub fn run(
    repo: &dyn LeaveRepository,
    settings: &AppSettings,
    decision: Option<(String, Decision)>,
    comment: Option<String>,
) -> Result<()> {
    let mut queue = ApprovalQueue::new(repo.pending_approvals()?);
    let mut out = std::io::stdout();
    if let Some((id, decision)) = decision {
        let actor = &settings.approver_name;
        decide(&mut queue, &id, decision, comment.as_deref(), actor, &mut out)?;
    }
    write_queue(&queue, &mut out)
}

/// Requests and then commits one decision, printing each phase.
pub(crate) fn decide<W: std::io::Write>(
    queue: &mut ApprovalQueue,
    id: &str,
    decision: Decision,
    comment: Option<&str>,
    actor: &str,
    out: &mut W,
) -> Result<()> {
    match queue.get(id) {
        None => bail!("No application with id '{}' in the approval queue.", id),
        Some(a) if a.status != LeaveStatus::Pending => {
            bail!("Application '{}' is already {}.", id, a.status)
        }
        Some(_) => {}
    }
    if let Some(c) = comment {
        queue.set_comment(id, c);
    }
    if !queue.request_decision(id, decision) {
        bail!("Application '{}' already has a decision in progress.", id);
    }
    if let DecisionState::PendingDecision(d) = queue.decision_state(id) {
        writeln!(out, "Processing {id}: {}...", d.status())?;
    }
    if let Some(c) = queue.comment(id).map(str::trim).filter(|c| !c.is_empty()) {
        writeln!(out, "  Comment: {c}")?;
    }
    if let Some(app) = queue.commit_decision(id, actor) {
        writeln!(out, "{} {} by {}.", app.id, app.status, actor)?;
    }
    writeln!(out, "---")?;
    Ok(())
}

fn write_row<W: std::io::Write>(a: &LeaveApplication, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "  {:<12} {:<16} {:<16} {:<22} {} -> {} ({} day(s))",
        a.id,
        a.employee_name,
        a.department,
        a.leave_type.label(),
        a.start_date.format("%Y-%m-%d"),
        a.end_date.format("%Y-%m-%d"),
        a.days
    )?;
    Ok(())
}

pub(crate) fn write_queue<W: std::io::Write>(queue: &ApprovalQueue, out: &mut W) -> Result<()> {
    let pending = queue.pending();
    let processed = queue.processed();

    writeln!(out, "Team Approvals")?;
    writeln!(out, "{:<22} {}", "Awaiting Action:", pending.len())?;
    writeln!(out, "{:<22} {}", "Approved:", queue.count(LeaveStatus::Approved))?;
    writeln!(out, "{:<22} {}", "Rejected:", queue.count(LeaveStatus::Rejected))?;
    writeln!(out, "---")?;
    writeln!(out, "Pending Requests")?;
    if pending.is_empty() {
        writeln!(out, "  All caught up. No pending requests.")?;
    }
    for a in &pending {
        write_row(a, out)?;
        if !a.reason.is_empty() {
            writeln!(out, "      {}", a.reason)?;
        }
    }
    if !processed.is_empty() {
        writeln!(out, "---")?;
        writeln!(out, "Recently Processed")?;
        for a in &processed {
            write_row(a, out)?;
            writeln!(
                out,
                "      {} by {}",
                a.status,
                a.approved_by.as_deref().unwrap_or("-")
            )?;
            if let Some(c) = &a.comments {
                writeln!(out, "      \"{c}\"")?;
            }
        }
    }
    writeln!(out, "---")?;
    Ok(())
}
