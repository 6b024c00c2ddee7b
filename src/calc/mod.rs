pub mod approvals;
pub mod calendar_grid;
pub mod summary;
pub mod wizard;

pub use approvals::{ApprovalQueue, Decision, DecisionState};
pub use calendar_grid::{
    build_month_grid, shift_month, team_events, upcoming_events, CalendarCell, MonthGrid,
};
pub use summary::{filter_by_status, recent, StatusCounts};
pub use wizard::{balance_warning, ApplicationWizard, WizardStep};
