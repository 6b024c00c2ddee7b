use crate::data::leave::{LeaveEvent, LeaveStatus, LeaveType};
use crate::data::persistence::Persistable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaveApplication {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub initials: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    #[serde(default)]
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl LeaveApplication {
    /// The calendar view of this application.
    pub fn to_event(&self) -> LeaveEvent {
        LeaveEvent {
            name: self.employee_name.clone(),
            initials: self.initials.clone(),
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
        }
    }
}

/// The current user's own applications.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct ApplicationData {
    pub applications: Vec<LeaveApplication>,
}

impl Persistable for ApplicationData {
    fn filename() -> &'static str {
        "applications.json"
    }
    fn is_json() -> bool {
        true
    }
}

/// Team members' applications awaiting the manager.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct ApprovalData {
    pub approvals: Vec<LeaveApplication>,
}

impl Persistable for ApprovalData {
    fn filename() -> &'static str {
        "approvals.json"
    }
    fn is_json() -> bool {
        true
    }
}
