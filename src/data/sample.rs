//! Built-in sample data set, written by `init` and served by `SampleRepository`.

use crate::data::app_settings::CurrentUser;
use crate::data::application::LeaveApplication;
use crate::data::balance::LeaveBalance;
use crate::data::leave::{LeaveEvent, LeaveStatus, LeaveType};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("sample dates are valid")
}

pub fn current_user() -> CurrentUser {
    CurrentUser {
        name: "Alex Rivera".to_string(),
        employee_id: "EMP-1042".to_string(),
        department: "Product Design".to_string(),
        role: "Senior Designer".to_string(),
        initials: "AR".to_string(),
        manager_name: "Sarah Chen".to_string(),
    }
}

pub fn balances() -> Vec<LeaveBalance> {
    vec![
        LeaveBalance::new(LeaveType::Annual, 21, 8, 13),
        LeaveBalance::new(LeaveType::Sick, 14, 3, 11),
        LeaveBalance::new(LeaveType::Emergency, 5, 1, 4),
        LeaveBalance::new(LeaveType::MaternityPaternity, 90, 0, 90),
        LeaveBalance::new(LeaveType::Unpaid, 30, 0, 30),
    ]
}

struct Applicant {
    name: &'static str,
    employee_id: &'static str,
    department: &'static str,
    initials: &'static str,
}

const ALEX: Applicant = Applicant {
    name: "Alex Rivera",
    employee_id: "EMP-1042",
    department: "Product Design",
    initials: "AR",
};

#[allow(clippy::too_many_arguments)]
fn app(
    id: &str,
    who: &Applicant,
    leave_type: LeaveType,
    start: NaiveDate,
    end: NaiveDate,
    days: i64,
    reason: &str,
    status: LeaveStatus,
    applied: NaiveDate,
) -> LeaveApplication {
    LeaveApplication {
        id: id.to_string(),
        employee_name: who.name.to_string(),
        employee_id: who.employee_id.to_string(),
        department: who.department.to_string(),
        initials: who.initials.to_string(),
        leave_type,
        start_date: start,
        end_date: end,
        days,
        reason: reason.to_string(),
        status,
        applied_date: applied,
        approved_by: None,
        comments: None,
    }
}

fn decided(mut a: LeaveApplication, by: &str, comments: Option<&str>) -> LeaveApplication {
    a.approved_by = Some(by.to_string());
    a.comments = comments.map(str::to_string);
    a
}

pub fn applications() -> Vec<LeaveApplication> {
    use LeaveStatus::*;
    use LeaveType::*;
    vec![
        decided(
            app(
                "LA-2024-001",
                &ALEX,
                Annual,
                d(2026, 3, 10),
                d(2026, 3, 14),
                5,
                "Family vacation to the coast. Pre-planned trip.",
                Approved,
                d(2026, 2, 15),
            ),
            "Sarah Chen",
            Some("Approved. Enjoy your vacation!"),
        ),
        decided(
            app(
                "LA-2024-002",
                &ALEX,
                Sick,
                d(2026, 2, 5),
                d(2026, 2, 6),
                2,
                "Fever and flu symptoms. Doctor's certificate attached.",
                Approved,
                d(2026, 2, 5),
            ),
            "Sarah Chen",
            None,
        ),
        app(
            "LA-2024-003",
            &ALEX,
            Annual,
            d(2026, 4, 21),
            d(2026, 4, 25),
            5,
            "Personal errands and home renovation.",
            Pending,
            d(2026, 2, 20),
        ),
        decided(
            app(
                "LA-2024-004",
                &ALEX,
                Emergency,
                d(2026, 1, 18),
                d(2026, 1, 18),
                1,
                "Family emergency - hospitalisation of parent.",
                Approved,
                d(2026, 1, 18),
            ),
            "Sarah Chen",
            None,
        ),
        decided(
            app(
                "LA-2024-005",
                &ALEX,
                Annual,
                d(2026, 5, 4),
                d(2026, 5, 8),
                5,
                "Extended long weekend travel.",
                Rejected,
                d(2026, 2, 18),
            ),
            "Sarah Chen",
            Some("Team headcount is short during this period. Please reschedule."),
        ),
    ]
}

pub fn pending_approvals() -> Vec<LeaveApplication> {
    use LeaveStatus::Pending;
    use LeaveType::*;
    let who = |name: &'static str,
               employee_id: &'static str,
               department: &'static str,
               initials: &'static str| Applicant {
        name,
        employee_id,
        department,
        initials,
    };
    vec![
        app(
            "LA-2024-006",
            &who("Jordan Kim", "EMP-1051", "Product Design", "JK"),
            Annual,
            d(2026, 3, 17),
            d(2026, 3, 21),
            5,
            "Holiday trip to Japan planned months ahead.",
            Pending,
            d(2026, 2, 22),
        ),
        app(
            "LA-2024-007",
            &who("Morgan Lee", "EMP-1038", "Product Design", "ML"),
            Sick,
            d(2026, 2, 25),
            d(2026, 2, 26),
            2,
            "Medical procedure scheduled by doctor.",
            Pending,
            d(2026, 2, 23),
        ),
        app(
            "LA-2024-008",
            &who("Sam Torres", "EMP-1029", "Engineering", "ST"),
            Emergency,
            d(2026, 2, 24),
            d(2026, 2, 24),
            1,
            "Urgent family matter requiring immediate attention.",
            Pending,
            d(2026, 2, 24),
        ),
        app(
            "LA-2024-009",
            &who("Casey Nguyen", "EMP-1063", "Marketing", "CN"),
            Annual,
            d(2026, 3, 30),
            d(2026, 4, 4),
            6,
            "Annual family reunion celebration.",
            Pending,
            d(2026, 2, 21),
        ),
        app(
            "LA-2024-010",
            &who("Riley Park", "EMP-1077", "Finance", "RP"),
            Unpaid,
            d(2026, 4, 14),
            d(2026, 4, 18),
            5,
            "Volunteering at a non-profit for community service.",
            Pending,
            d(2026, 2, 19),
        ),
    ]
}

pub fn team_calendar() -> Vec<LeaveEvent> {
    use LeaveStatus::*;
    use LeaveType::*;
    vec![
        LeaveEvent::new("Alex Rivera", "AR", Annual, d(2026, 3, 10), d(2026, 3, 14), Approved),
        LeaveEvent::new("Jordan Kim", "JK", Annual, d(2026, 3, 17), d(2026, 3, 21), Pending),
        LeaveEvent::new("Morgan Lee", "ML", Sick, d(2026, 2, 25), d(2026, 2, 26), Pending),
        LeaveEvent::new("Sam Torres", "ST", Emergency, d(2026, 2, 24), d(2026, 2, 24), Pending),
        LeaveEvent::new("Casey Nguyen", "CN", Annual, d(2026, 3, 30), d(2026, 4, 4), Pending),
        LeaveEvent::new("Riley Park", "RP", Unpaid, d(2026, 4, 14), d(2026, 4, 18), Pending),
    ]
}
