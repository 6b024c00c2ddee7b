use crate::calc::wizard::ApplicationDraft;
use crate::calc::{balance_warning, ApplicationWizard, WizardStep};
use crate::data::{CurrentUser, LeaveApplication, LeaveBalance, LeaveRepository, LeaveType};
use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};

/// Form fields as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ApplyArgs {
    pub leave_type: Option<LeaveType>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub reason: String,
    pub contact: String,
    pub handover: String,
    pub attachment: bool,
    /// Stop at the review step and discard the draft.
    pub dry_run: bool,
}

pub fn run(repo: &dyn LeaveRepository, args: ApplyArgs, today: NaiveDate) -> Result<()> {
    let user = repo.current_user()?;
    let balances = repo.balances()?;
    let mut existing = repo.applications()?;
    existing.extend(repo.pending_approvals()?);
    let id = next_application_id(&existing, today.year())?;
    apply(args, &user, &balances, &id, today, &mut std::io::stdout())?;
    Ok(())
}

/// `LA-<year>-NNN`, one past the highest numeric suffix in `existing`.
pub(crate) fn next_application_id(existing: &[LeaveApplication], year: i32) -> Result<String> {
    let last = existing
        .iter()
        .filter_map(|a| a.id.rsplit('-').next()?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    let Some(next) = last.checked_add(1) else {
        bail!("no application number left after {last}");
    };
    Ok(format!("LA-{year}-{next:03}"))
}

/// Walks the wizard through every step with `args` and submits.
pub(crate) fn apply<W: std::io::Write>(
    args: ApplyArgs,
    user: &CurrentUser,
    balances: &[LeaveBalance],
    id: &str,
    today: NaiveDate,
    out: &mut W,
) -> Result<ApplicationWizard> {
    let dry_run = args.dry_run;
    let mut wizard = ApplicationWizard::new();

    wizard.edit(|f| {
        f.leave_type = args.leave_type;
        f.start_date = args.start;
        f.end_date = args.end;
    });
    write_step(&wizard, out)?;
    if let Some(w) = balance_warning(wizard.draft(), balances) {
        tracing::warn!(
            leave_type = %w.leave_type,
            requested = w.requested,
            remaining = w.remaining,
            "request exceeds balance"
        );
        writeln!(
            out,
            "  Warning: exceeds your remaining balance ({} days)",
            w.remaining
        )?;
    }
    if !wizard.advance() {
        bail!("cannot continue: leave type, start date and end date are all required");
    }

    wizard.edit(|f| {
        f.reason = args.reason;
        f.contact_number = args.contact;
        f.handover_to = args.handover;
        f.has_attachment = args.attachment;
    });
    write_step(&wizard, out)?;
    wizard.advance();

    write_step(&wizard, out)?;
    write_review(wizard.draft(), out)?;
    if dry_run {
        wizard.reset();
        writeln!(out, "---")?;
        writeln!(out, "Dry run: nothing was submitted.")?;
        return Ok(wizard);
    }
    if !wizard.submit() {
        bail!("application could not be submitted from step {}", wizard.step().number());
    }
    let Some(application) = wizard.submitted_application(id, user, today) else {
        bail!("submitted application is missing its leave type or dates");
    };
    tracing::info!(
        id = %application.id,
        days = application.days,
        "application reference assigned"
    );
    write_submitted(&application, user, out)?;
    Ok(wizard)
}

fn write_step<W: std::io::Write>(wizard: &ApplicationWizard, out: &mut W) -> Result<()> {
    let step = wizard.step();
    writeln!(out, "Step {} of 3: {}", step.number(), step.title())?;
    if step == WizardStep::LeaveTypeAndDates {
        let d = wizard.draft();
        writeln!(out, "  {:<14} {}", "Leave Type:", opt(d.leave_type))?;
        writeln!(out, "  {:<14} {}", "Start Date:", opt(d.start_date))?;
        writeln!(out, "  {:<14} {}", "End Date:", opt(d.end_date))?;
        writeln!(out, "  {:<14} {}", "Duration:", days_label(d.day_count()))?;
    }
    Ok(())
}

fn opt<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn days_label(days: i64) -> String {
    format!("{days} calendar day(s)")
}

fn write_review<W: std::io::Write>(d: &ApplicationDraft, out: &mut W) -> Result<()> {
    let or_dash = |s: &str| {
        let s = s.trim();
        if s.is_empty() { "-".to_string() } else { s.to_string() }
    };
    writeln!(out, "  {:<14} {}", "Leave Type:", opt(d.leave_type))?;
    writeln!(out, "  {:<14} {} -> {}", "Dates:", opt(d.start_date), opt(d.end_date))?;
    writeln!(out, "  {:<14} {}", "Duration:", days_label(d.day_count()))?;
    writeln!(out, "  {:<14} {}", "Reason:", or_dash(&d.reason))?;
    writeln!(out, "  {:<14} {}", "Contact:", or_dash(&d.contact_number))?;
    writeln!(out, "  {:<14} {}", "Handover To:", or_dash(&d.handover_to))?;
    writeln!(
        out,
        "  {:<14} {}",
        "Attachment:",
        if d.has_attachment { "Yes" } else { "No" }
    )?;
    Ok(())
}

fn write_submitted<W: std::io::Write>(
    a: &LeaveApplication,
    user: &CurrentUser,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "---")?;
    writeln!(out, "Application Submitted")?;
    writeln!(
        out,
        "Your leave request has been sent to {} for review.",
        user.manager_name
    )?;
    writeln!(out, "  {:<14} {}", "Reference:", a.id)?;
    writeln!(out, "  {:<14} {}", "Leave Type:", a.leave_type)?;
    writeln!(
        out,
        "  {:<14} {} -> {}",
        "Duration:",
        a.start_date.format("%Y-%m-%d"),
        a.end_date.format("%Y-%m-%d")
    )?;
    writeln!(out, "  {:<14} {}", "Days:", days_label(a.days))?;
    writeln!(out, "  {:<14} {}", "Applied:", a.applied_date.format("%Y-%m-%d"))?;
    writeln!(out, "  {:<14} {}", "Status:", a.status)?;
    writeln!(out, "---")?;
    Ok(())
}
