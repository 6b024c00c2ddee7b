use crate::data::{LeaveApplication, LeaveStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub cancelled: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn of(applications: &[LeaveApplication]) -> Self {
        let mut counts = StatusCounts {
            total: applications.len(),
            ..Self::default()
        };
        for a in applications {
            match a.status {
                LeaveStatus::Pending => counts.pending += 1,
                LeaveStatus::Approved => counts.approved += 1,
                LeaveStatus::Rejected => counts.rejected += 1,
                LeaveStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: LeaveStatus) -> usize {
        match status {
            LeaveStatus::Pending => self.pending,
            LeaveStatus::Approved => self.approved,
            LeaveStatus::Rejected => self.rejected,
            LeaveStatus::Cancelled => self.cancelled,
        }
    }
}

/// `None` keeps everything.
pub fn filter_by_status(
    applications: &[LeaveApplication],
    status: Option<LeaveStatus>,
) -> Vec<&LeaveApplication> {
    applications
        .iter()
        .filter(|a| status.is_none_or(|s| a.status == s))
        .collect()
}

/// The first `n` applications as listed.
pub fn recent(applications: &[LeaveApplication], n: usize) -> &[LeaveApplication] {
    &applications[..applications.len().min(n)]
}
