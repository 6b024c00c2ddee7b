use crate::data::leave::LeaveType;
use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// Per-type entitlement, in calendar days.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaveBalance {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub total: i64,
    pub used: i64,
    pub remaining: i64,
}

impl LeaveBalance {
    pub fn new(leave_type: LeaveType, total: i64, used: i64, remaining: i64) -> Self {
        LeaveBalance {
            leave_type,
            total,
            used,
            remaining,
        }
    }

    /// Share of the entitlement already used, 0–100.
    pub fn used_percent(&self) -> f64 {
        if self.total > 0 {
            100.0 * self.used as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct BalanceData {
    pub balances: Vec<LeaveBalance>,
}

impl Persistable for BalanceData {
    fn filename() -> &'static str {
        "balances.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

/// First balance recorded for `leave_type`.
pub fn find_balance(balances: &[LeaveBalance], leave_type: LeaveType) -> Option<&LeaveBalance> {
    balances.iter().find(|b| b.leave_type == leave_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_balance_by_type() {
        let balances = vec![
            LeaveBalance::new(LeaveType::Annual, 21, 8, 13),
            LeaveBalance::new(LeaveType::Sick, 14, 3, 11),
        ];
        assert_eq!(find_balance(&balances, LeaveType::Sick).unwrap().remaining, 11);
        assert!(find_balance(&balances, LeaveType::Unpaid).is_none());
    }

    #[test]
    fn test_used_percent() {
        let b = LeaveBalance::new(LeaveType::Emergency, 5, 1, 4);
        assert!((b.used_percent() - 20.0).abs() < f64::EPSILON);
        let empty = LeaveBalance::new(LeaveType::Unpaid, 0, 0, 0);
        assert_eq!(empty.used_percent(), 0.0);
    }

    #[test]
    fn test_balance_yaml_roundtrip_uses_labels() {
        let data = BalanceData {
            balances: vec![LeaveBalance::new(LeaveType::MaternityPaternity, 90, 0, 90)],
        };
        let yaml = serde_norway::to_string(&data).unwrap();
        assert!(yaml.contains("Maternity / Paternity"));
        let parsed: BalanceData = serde_norway::from_str(&yaml).unwrap();
        assert_eq!(parsed.balances, data.balances);
    }
}
