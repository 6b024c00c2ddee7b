use crate::data::{LeaveApplication, LeaveStatus};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn status(self) -> LeaveStatus {
        match self {
            Decision::Approve => LeaveStatus::Approved,
            Decision::Reject => LeaveStatus::Rejected,
        }
    }
}

/// Per-item decision flag. A decision is requested first and applied on a
/// later, separate commit; the item's actions stay disabled in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecisionState {
    #[default]
    Idle,
    PendingDecision(Decision),
}

/// A manager's queue of team applications.
#[derive(Debug, Clone, Default)]
pub struct ApprovalQueue {
    applications: Vec<LeaveApplication>,
    comments: HashMap<String, String>,
    in_flight: HashMap<String, Decision>,
}

impl ApprovalQueue {
    pub fn new(applications: Vec<LeaveApplication>) -> Self {
        ApprovalQueue {
            applications,
            ..Self::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<&LeaveApplication> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn pending(&self) -> Vec<&LeaveApplication> {
        self.applications
            .iter()
            .filter(|a| a.status == LeaveStatus::Pending)
            .collect()
    }

    pub fn processed(&self) -> Vec<&LeaveApplication> {
        self.applications
            .iter()
            .filter(|a| a.status != LeaveStatus::Pending)
            .collect()
    }

    pub fn count(&self, status: LeaveStatus) -> usize {
        self.applications.iter().filter(|a| a.status == status).count()
    }

    pub fn decision_state(&self, id: &str) -> DecisionState {
        self.in_flight
            .get(id)
            .map_or(DecisionState::Idle, |d| DecisionState::PendingDecision(*d))
    }

    /// Draft note attached to the next decision on `id`.
    pub fn set_comment(&mut self, id: &str, comment: &str) {
        self.comments.insert(id.to_string(), comment.to_string());
    }

    pub fn comment(&self, id: &str) -> Option<&str> {
        self.comments.get(id).map(String::as_str)
    }

    /// Starts a decision. Refused for unknown items, items no longer pending,
    /// or items already awaiting a commit.
    pub fn request_decision(&mut self, id: &str, decision: Decision) -> bool {
        let actionable = self
            .get(id)
            .is_some_and(|a| a.status == LeaveStatus::Pending);
        if !actionable || self.in_flight.contains_key(id) {
            tracing::debug!(id, ?decision, "decision refused");
            return false;
        }
        self.in_flight.insert(id.to_string(), decision);
        tracing::debug!(id, ?decision, "decision pending");
        true
    }

    /// Applies the pending decision on `id`, recording `actor` and the draft
    /// comment (blank comments are dropped). `None` if nothing was pending.
    pub fn commit_decision(&mut self, id: &str, actor: &str) -> Option<&LeaveApplication> {
        let decision = self.in_flight.remove(id)?;
        let comment = self
            .comments
            .remove(id)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let app = self.applications.iter_mut().find(|a| a.id == id)?;
        app.status = decision.status();
        app.approved_by = Some(actor.to_string());
        app.comments = comment;
        tracing::info!(id, status = %app.status, actor, "decision applied");
        Some(&*app)
    }
}
