use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeaveType {
    #[serde(rename = "Annual Leave")]
    Annual,
    #[serde(rename = "Sick Leave")]
    Sick,
    #[serde(rename = "Emergency Leave")]
    Emergency,
    #[serde(rename = "Maternity / Paternity")]
    MaternityPaternity,
    #[serde(rename = "Unpaid Leave")]
    Unpaid,
}

impl LeaveType {
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Emergency,
        LeaveType::MaternityPaternity,
        LeaveType::Unpaid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Emergency => "Emergency Leave",
            LeaveType::MaternityPaternity => "Maternity / Paternity",
            LeaveType::Unpaid => "Unpaid Leave",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the full label or a short keyword, case-insensitively.
impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let found = match key.as_str() {
            "annual" | "annual leave" => Some(LeaveType::Annual),
            "sick" | "sick leave" => Some(LeaveType::Sick),
            "emergency" | "emergency leave" => Some(LeaveType::Emergency),
            "maternity" | "paternity" | "maternity / paternity" | "parental" => {
                Some(LeaveType::MaternityPaternity)
            }
            "unpaid" | "unpaid leave" => Some(LeaveType::Unpaid),
            _ => None,
        };
        found.ok_or_else(|| {
            let labels: Vec<&str> = LeaveType::ALL.iter().map(|t| t.label()).collect();
            format!("unknown leave type '{s}', expected one of: {}", labels.join(", "))
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 4] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
        LeaveStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }

    /// Statuses that still occupy a slot on the team calendar.
    pub fn is_on_calendar(self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaveStatus::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown leave status '{s}'"))
    }
}

/// One person's absence as shown on the team calendar. Read-only input to
/// the calendar engine; `start_date <= end_date` is expected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaveEvent {
    pub name: String,
    pub initials: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

impl LeaveEvent {
    pub fn new(
        name: &str,
        initials: &str,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: LeaveStatus,
    ) -> Self {
        LeaveEvent {
            name: name.to_string(),
            initials: initials.to_string(),
            leave_type,
            start_date,
            end_date,
            status,
        }
    }

    /// Inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Identity used for de-duplication.
    pub fn identity(&self) -> (&str, NaiveDate, NaiveDate) {
        (self.name.as_str(), self.start_date, self.end_date)
    }
}
