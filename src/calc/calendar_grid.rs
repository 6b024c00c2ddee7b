use crate::data::{LeaveApplication, LeaveEvent};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

// Months are zero-based throughout this module: January = 0, December = 11.

/// One slot of a 7-column month grid.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCell<'a> {
    Blank,
    Day(DayCell<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub day: u32,
    /// `None` only for years outside the range chrono can represent.
    pub date: Option<NaiveDate>,
    /// Every event covering this day, in input order.
    pub events: Vec<&'a LeaveEvent>,
}

impl<'a> DayCell<'a> {
    /// The first `limit` events plus the count of those left out.
    pub fn visible_events(&self, limit: usize) -> (&[&'a LeaveEvent], usize) {
        let shown = self.events.len().min(limit);
        (&self.events[..shown], self.events.len() - shown)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub first_weekday_offset: u32,
    pub days_in_month: u32,
    /// Leading blanks, one cell per day, trailing blanks; length is a multiple of 7.
    pub cells: Vec<CalendarCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Rows of seven cells, Sunday first.
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell<'a>> {
        self.cells.chunks(7)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell<'a>> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        match self.cells.get((self.first_weekday_offset + day - 1) as usize) {
            Some(CalendarCell::Day(cell)) => Some(cell),
            _ => None,
        }
    }
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}

/// The Gregorian calendar repeats every 400 years (146097 days, a whole number
/// of weeks), so month length and weekday only depend on `year mod 400`.
fn cycle_year(year: i32) -> i32 {
    2000 + year.rem_euclid(400)
}

/// Zero for a month outside 0..=11.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let year = cycle_year(year);
    let (next_year, next_month) = if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    };
    match (first_of_month(year, month), first_of_month(next_year, next_month)) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Weekday of the 1st, 0 = Sunday.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    first_of_month(cycle_year(year), month)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Moves `delta` months from (`year`, `month`), carrying into the year.
/// `None` when the resulting year does not fit in an `i32`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month) + i64::from(delta);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    Some((year, total.rem_euclid(12) as u32))
}

/// Events whose inclusive range contains `date`, in input order.
pub fn events_for_day(events: &[LeaveEvent], date: NaiveDate) -> Vec<&LeaveEvent> {
    events.iter().filter(|e| e.covers(date)).collect()
}

pub fn build_month_grid(year: i32, month: u32, events: &[LeaveEvent]) -> MonthGrid<'_> {
    debug_assert!(month <= 11, "month {month} is not normalised");
    let offset = first_weekday_offset(year, month);
    let days = days_in_month(year, month);
    let first = first_of_month(year, month);

    let mut cells = Vec::with_capacity((offset + days + 6) as usize / 7 * 7);
    cells.extend((0..offset).map(|_| CalendarCell::Blank));
    for day in 1..=days {
        let date = first.and_then(|f| f.with_day(day));
        let events = date.map(|d| events_for_day(events, d)).unwrap_or_default();
        cells.push(CalendarCell::Day(DayCell { day, date, events }));
    }
    while cells.len() % 7 != 0 {
        cells.push(CalendarCell::Blank);
    }

    tracing::debug!(year, month, offset, days, cells = cells.len(), "built month grid");
    MonthGrid {
        year,
        month,
        first_weekday_offset: offset,
        days_in_month: days,
        cells,
    }
}

/// Keeps the first event for each (name, start, end); later repeats are dropped.
pub fn dedupe_events(events: &[LeaveEvent]) -> Vec<LeaveEvent> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(events.len());
    for e in events {
        if seen.insert(e.identity()) {
            kept.push(e.clone());
        }
    }
    kept
}

/// Events starting on or after `from`, earliest first, at most `limit`.
/// Events already under way on `from` are not upcoming.
pub fn upcoming_events(events: &[LeaveEvent], from: NaiveDate, limit: usize) -> Vec<&LeaveEvent> {
    let mut upcoming: Vec<&LeaveEvent> = events.iter().filter(|e| e.start_date >= from).collect();
    // stable: equal start dates keep input order
    upcoming.sort_by_key(|e| e.start_date);
    upcoming.truncate(limit);
    upcoming
}

/// The team calendar: explicit calendar entries first, then the user's
/// approved or pending applications, de-duplicated.
pub fn team_events(calendar: &[LeaveEvent], applications: &[LeaveApplication]) -> Vec<LeaveEvent> {
    let mut all: Vec<LeaveEvent> = calendar.to_vec();
    all.extend(
        applications
            .iter()
            .filter(|a| a.status.is_on_calendar())
            .map(LeaveApplication::to_event),
    );
    dedupe_events(&all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample, LeaveStatus, LeaveType};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ev(name: &str, start: NaiveDate, end: NaiveDate) -> LeaveEvent {
        LeaveEvent::new(name, "XX", LeaveType::Annual, start, end, LeaveStatus::Pending)
    }

    fn day_numbers_with(grid: &MonthGrid, name: &str) -> Vec<u32> {
        grid.cells
            .iter()
            .filter_map(|c| match c {
                CalendarCell::Day(cell) if cell.events.iter().any(|e| e.name == name) => {
                    Some(cell.day)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_days_in_month_february_non_leap() {
        assert_eq!(days_in_month(2026, 1), 28);
    }

    #[test]
    fn test_days_in_month_february_leap() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
    }

    #[test]
    fn test_days_in_month_long_and_short_months() {
        assert_eq!(days_in_month(2026, 0), 31);
        assert_eq!(days_in_month(2026, 3), 30);
        assert_eq!(days_in_month(2026, 11), 31);
    }

    #[test]
    fn test_days_in_month_invalid_month_is_zero() {
        assert_eq!(days_in_month(2026, 12), 0);
    }

    #[test]
    fn test_first_weekday_offset_known_months() {
        // 2026-02-01 is a Sunday, 2026-01-01 a Thursday
        assert_eq!(first_weekday_offset(2026, 1), 0);
        assert_eq!(first_weekday_offset(2026, 0), 4);
        // 2025-06-01 is a Sunday, 2025-07-01 a Tuesday
        assert_eq!(first_weekday_offset(2025, 5), 0);
        assert_eq!(first_weekday_offset(2025, 6), 2);
    }

    #[test]
    fn test_far_years_follow_the_400_year_cycle() {
        assert_eq!(first_weekday_offset(2026 + 400 * 1000, 1), 0);
        assert_eq!(days_in_month(-4, 1), 29);
        let grid = build_month_grid(1_000_000, 2, &[]);
        assert_eq!(grid.days_in_month, 31);
        assert_eq!(grid.cells.len() % 7, 0);
    }

    #[test]
    fn test_february_2026_grid() {
        let grid = build_month_grid(2026, 1, &[]);
        assert_eq!(grid.first_weekday_offset, 0);
        let days = grid
            .cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day(_)))
            .count();
        assert_eq!(days, 28);
        assert_eq!(grid.cells.len(), 28);
        assert!(matches!(grid.cells[0], CalendarCell::Day(DayCell { day: 1, .. })));
    }

    #[test]
    fn test_grid_pads_leading_and_trailing_blanks() {
        // January 2026: 4 leading blanks + 31 days = 35
        let grid = build_month_grid(2026, 0, &[]);
        assert_eq!(grid.cells.len(), 35);
        assert!(grid.cells[..4].iter().all(|c| *c == CalendarCell::Blank));
        // July 2025: 2 + 31 = 33, padded to 35
        let grid = build_month_grid(2025, 6, &[]);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.cells[33], CalendarCell::Blank);
        assert_eq!(grid.cells[34], CalendarCell::Blank);
    }

    #[test]
    fn test_grid_length_property_over_many_months() {
        for year in 1995..2035 {
            for month in 0..12 {
                let grid = build_month_grid(year, month, &[]);
                let needed = days_in_month(year, month) + first_weekday_offset(year, month);
                assert_eq!(grid.cells.len() % 7, 0, "{year}-{month}");
                assert!(grid.cells.len() as u32 >= needed);
                assert!((grid.cells.len() as u32) < needed + 7);
                assert_eq!(grid.weeks().count() * 7, grid.cells.len());
            }
        }
    }

    #[test]
    fn test_event_appears_only_on_covered_days() {
        let events = vec![ev("Alex Rivera", d(2026, 3, 10), d(2026, 3, 14))];
        let march = build_month_grid(2026, 2, &events);
        assert_eq!(day_numbers_with(&march, "Alex Rivera"), vec![10, 11, 12, 13, 14]);
        let april = build_month_grid(2026, 3, &events);
        assert!(day_numbers_with(&april, "Alex Rivera").is_empty());
    }

    #[test]
    fn test_event_spanning_month_boundary() {
        let events = vec![ev("Casey Nguyen", d(2026, 3, 30), d(2026, 4, 4))];
        let march = build_month_grid(2026, 2, &events);
        assert_eq!(day_numbers_with(&march, "Casey Nguyen"), vec![30, 31]);
        let april = build_month_grid(2026, 3, &events);
        assert_eq!(day_numbers_with(&april, "Casey Nguyen"), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_cell_events_keep_input_order() {
        let events = vec![
            ev("B", d(2026, 2, 24), d(2026, 2, 24)),
            ev("A", d(2026, 2, 20), d(2026, 2, 26)),
        ];
        let grid = build_month_grid(2026, 1, &events);
        let cell = grid.day(24).unwrap();
        let names: Vec<&str> = cell.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(cell.date, Some(d(2026, 2, 24)));
    }

    #[test]
    fn test_visible_events_truncates_but_keeps_full_list() {
        let events: Vec<LeaveEvent> = (0..5)
            .map(|i| ev(&format!("P{i}"), d(2026, 3, 2), d(2026, 3, 2)))
            .collect();
        let grid = build_month_grid(2026, 2, &events);
        let cell = grid.day(2).unwrap();
        assert_eq!(cell.events.len(), 5);
        let (shown, more) = cell.visible_events(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 2);
        let (shown, more) = cell.visible_events(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_day_lookup_out_of_range() {
        let grid = build_month_grid(2026, 1, &[]);
        assert!(grid.day(0).is_none());
        assert!(grid.day(29).is_none());
        assert_eq!(grid.day(28).unwrap().day, 28);
    }

    #[test]
    fn test_shift_month_forward_across_year() {
        assert_eq!(shift_month(2025, 11, 1), Some((2026, 0)));
        assert_eq!(shift_month(2026, 1, 1), Some((2026, 2)));
        assert_eq!(shift_month(2026, 1, 23), Some((2028, 0)));
    }

    #[test]
    fn test_shift_month_backward_across_year() {
        assert_eq!(shift_month(2026, 0, -1), Some((2025, 11)));
        assert_eq!(shift_month(2026, 0, -13), Some((2024, 11)));
        assert_eq!(shift_month(2026, 5, 0), Some((2026, 5)));
    }

    #[test]
    fn test_shift_month_past_year_range() {
        assert_eq!(shift_month(i32::MAX, 11, 1), None);
        assert_eq!(shift_month(i32::MIN, 0, -1), None);
        assert_eq!(shift_month(i32::MAX, 10, 1), Some((i32::MAX, 11)));
    }

    #[test]
    fn test_month_name_known_values() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "Unknown");
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let mut first = ev("Alex", d(2026, 3, 10), d(2026, 3, 14));
        first.initials = "first".to_string();
        let mut repeat = first.clone();
        repeat.initials = "second".to_string();
        let other = ev("Jordan", d(2026, 3, 10), d(2026, 3, 14));
        let out = dedupe_events(&[first, other, repeat]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].initials, "first");
        assert_eq!(out[1].name, "Jordan");
    }

    #[test]
    fn test_dedupe_distinguishes_ranges() {
        let out = dedupe_events(&[
            ev("Alex", d(2026, 3, 10), d(2026, 3, 14)),
            ev("Alex", d(2026, 3, 10), d(2026, 3, 15)),
            ev("Alex", d(2026, 3, 11), d(2026, 3, 14)),
        ]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_dedupe_is_idempotent_and_order_preserving() {
        let input = vec![
            ev("C", d(2026, 1, 3), d(2026, 1, 3)),
            ev("A", d(2026, 1, 1), d(2026, 1, 1)),
            ev("C", d(2026, 1, 3), d(2026, 1, 3)),
            ev("B", d(2026, 1, 2), d(2026, 1, 2)),
            ev("A", d(2026, 1, 1), d(2026, 1, 1)),
        ];
        let once = dedupe_events(&input);
        let names: Vec<&str> = once.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(dedupe_events(&once), once);
    }

    #[test]
    fn test_upcoming_excludes_events_already_started() {
        let events = vec![
            ev("started", d(2026, 2, 20), d(2026, 2, 28)),
            ev("today", d(2026, 2, 24), d(2026, 2, 24)),
            ev("later", d(2026, 3, 1), d(2026, 3, 2)),
        ];
        let out = upcoming_events(&events, d(2026, 2, 24), 10);
        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["today", "later"]);
    }

    #[test]
    fn test_upcoming_sorted_stable_and_limited() {
        let events = vec![
            ev("late", d(2026, 4, 1), d(2026, 4, 1)),
            ev("tie-1", d(2026, 3, 1), d(2026, 3, 1)),
            ev("early", d(2026, 2, 25), d(2026, 2, 25)),
            ev("tie-2", d(2026, 3, 1), d(2026, 3, 5)),
        ];
        let out = upcoming_events(&events, d(2026, 2, 24), 3);
        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["early", "tie-1", "tie-2"]);
        assert!(out.windows(2).all(|w| w[0].start_date <= w[1].start_date));
        assert!(upcoming_events(&events, d(2026, 2, 24), 0).is_empty());
    }

    #[test]
    fn test_team_events_merge_and_dedupe_sample() {
        let events = team_events(&sample::team_calendar(), &sample::applications());
        // Alex's March leave is both a calendar entry and an application
        let alex_march = events
            .iter()
            .filter(|e| e.name == "Alex Rivera" && e.start_date == d(2026, 3, 10))
            .count();
        assert_eq!(alex_march, 1);
        // rejected May leave is left off
        assert!(!events.iter().any(|e| e.start_date == d(2026, 5, 4)));
        // 6 calendar entries + 3 extra approved/pending applications
        assert_eq!(events.len(), 9);
        assert_eq!(events[0].name, "Alex Rivera");
    }
}
