use crate::data::leave::LeaveEvent;
use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct TeamCalendarData {
    pub events: Vec<LeaveEvent>,
}

impl Persistable for TeamCalendarData {
    fn filename() -> &'static str {
        "team_calendar.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::leave::{LeaveStatus, LeaveType};
    use chrono::NaiveDate;

    #[test]
    fn test_parse_yaml_keeps_file_order() {
        let yaml = "events:\n  - name: Sam Torres\n    initials: ST\n    type: Emergency Leave\n    start_date: 2026-02-24\n    end_date: 2026-02-24\n    status: Pending\n  - name: Alex Rivera\n    initials: AR\n    type: Annual Leave\n    start_date: 2026-03-10\n    end_date: 2026-03-14\n    status: Approved\n";
        let data = TeamCalendarData::parse(yaml).unwrap();
        assert_eq!(data.events.len(), 2);
        assert_eq!(data.events[0].name, "Sam Torres");
        assert_eq!(data.events[0].leave_type, LeaveType::Emergency);
        assert_eq!(data.events[1].status, LeaveStatus::Approved);
        assert_eq!(
            data.events[1].end_date,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }

    #[test]
    fn test_default_is_empty() {
        assert!(TeamCalendarData::default().events.is_empty());
    }
}
