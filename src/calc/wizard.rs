use crate::data::balance::find_balance;
use crate::data::{CurrentUser, LeaveApplication, LeaveBalance, LeaveStatus, LeaveType};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    LeaveTypeAndDates,
    Details,
    Review,
}

impl WizardStep {
    /// 1-based position shown to the user.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::LeaveTypeAndDates => 1,
            WizardStep::Details => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::LeaveTypeAndDates => "Leave Type & Dates",
            WizardStep::Details => "Details",
            WizardStep::Review => "Review",
        }
    }

    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::LeaveTypeAndDates => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::LeaveTypeAndDates => None,
            WizardStep::Details => Some(WizardStep::LeaveTypeAndDates),
            WizardStep::Review => Some(WizardStep::Details),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationDraft {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: String,
    pub contact_number: String,
    pub handover_to: String,
    pub has_attachment: bool,
}

impl ApplicationDraft {
    pub fn day_count(&self) -> i64 {
        day_count(self.start_date, self.end_date)
    }

    /// The fields the first step requires.
    pub fn has_type_and_dates(&self) -> bool {
        self.leave_type.is_some() && self.start_date.is_some() && self.end_date.is_some()
    }

    /// A pending application for `user`, or `None` while type or dates are missing.
    pub fn to_application(
        &self,
        id: &str,
        user: &CurrentUser,
        applied_date: NaiveDate,
    ) -> Option<LeaveApplication> {
        Some(LeaveApplication {
            id: id.to_string(),
            employee_name: user.name.clone(),
            employee_id: user.employee_id.clone(),
            department: user.department.clone(),
            initials: user.initials.clone(),
            leave_type: self.leave_type?,
            start_date: self.start_date?,
            end_date: self.end_date?,
            days: self.day_count(),
            reason: self.reason.trim().to_string(),
            status: LeaveStatus::Pending,
            applied_date,
            approved_by: None,
            comments: None,
        })
    }
}

/// Calendar days from `start` to `end`, both included. Weekends count.
/// Zero when either end is unset or `end` is before `start`.
pub fn day_count(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(s), Some(e)) => ((e - s).num_days() + 1).max(0),
        _ => 0,
    }
}

/// Advisory raised when a request is longer than what is left for its type.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceWarning {
    pub leave_type: LeaveType,
    pub requested: i64,
    pub remaining: i64,
}

pub fn balance_warning(
    draft: &ApplicationDraft,
    balances: &[LeaveBalance],
) -> Option<BalanceWarning> {
    let leave_type = draft.leave_type?;
    let balance = find_balance(balances, leave_type)?;
    let requested = draft.day_count();
    (requested > balance.remaining).then(|| BalanceWarning {
        leave_type,
        requested,
        remaining: balance.remaining,
    })
}

/// Three-step leave application form.
///
/// Only the first step is gated: leave type, start date and end date must all
/// be set before moving on. Details are optional, and submitting is only
/// possible from the review step. A submitted wizard is frozen until
/// [`ApplicationWizard::reset`].
#[derive(Debug, Clone, Default)]
pub struct ApplicationWizard {
    step: WizardStep,
    draft: ApplicationDraft,
    submitted: bool,
}

impl ApplicationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Applies `f` to the draft. Ignored once submitted.
    pub fn edit(&mut self, f: impl FnOnce(&mut ApplicationDraft)) -> bool {
        if self.submitted {
            return false;
        }
        f(&mut self.draft);
        true
    }

    pub fn can_advance(&self) -> bool {
        if self.submitted {
            return false;
        }
        match self.step {
            WizardStep::LeaveTypeAndDates => self.draft.has_type_and_dates(),
            WizardStep::Details => true,
            WizardStep::Review => false,
        }
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.submitted {
            return false;
        }
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self) -> bool {
        if self.submitted || self.step != WizardStep::Review {
            return false;
        }
        self.submitted = true;
        tracing::info!(
            leave_type = ?self.draft.leave_type,
            days = self.draft.day_count(),
            "application submitted"
        );
        true
    }

    /// Clears the draft and rewinds to the first step, submitted or not.
    pub fn reset(&mut self) {
        self.submitted = false;
        while self.retreat() {}
        self.draft = ApplicationDraft::default();
    }

    /// The submitted request as a pending application; `None` before `submit`.
    pub fn submitted_application(
        &self,
        id: &str,
        user: &CurrentUser,
        applied_date: NaiveDate,
    ) -> Option<LeaveApplication> {
        if !self.is_submitted() {
            return None;
        }
        self.draft.to_application(id, user, applied_date)
    }
}
