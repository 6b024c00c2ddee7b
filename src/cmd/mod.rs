pub mod applications;
pub mod apply;
pub mod approvals;
pub mod balances;
pub mod calendar;
pub mod dashboard;
pub mod init;
pub mod upcoming;
