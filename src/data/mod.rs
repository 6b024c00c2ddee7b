pub mod app_settings;
pub mod application;
pub mod balance;
pub mod leave;
pub mod persistence;
pub mod repository;
pub mod sample;
pub mod team_calendar;

pub use app_settings::{AppSettings, ConfigFile, CurrentUser};
pub use application::{ApplicationData, ApprovalData, LeaveApplication};
pub use balance::{BalanceData, LeaveBalance};
pub use leave::{LeaveEvent, LeaveStatus, LeaveType};
pub use persistence::Persistable;
pub use repository::{FileRepository, LeaveRepository, SampleRepository};
pub use team_calendar::TeamCalendarData;
