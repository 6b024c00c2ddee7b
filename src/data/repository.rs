use crate::data::app_settings::{ConfigFile, CurrentUser};
use crate::data::application::{ApplicationData, ApprovalData, LeaveApplication};
use crate::data::balance::{BalanceData, LeaveBalance};
use crate::data::leave::LeaveEvent;
use crate::data::persistence::Persistable;
use crate::data::sample;
use crate::data::team_calendar::TeamCalendarData;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Read-only source of the reference data the engines work on.
pub trait LeaveRepository {
    fn current_user(&self) -> Result<CurrentUser>;
    fn balances(&self) -> Result<Vec<LeaveBalance>>;
    /// The current user's own applications.
    fn applications(&self) -> Result<Vec<LeaveApplication>>;
    /// Team applications routed to the current user's manager.
    fn pending_approvals(&self) -> Result<Vec<LeaveApplication>>;
    fn team_calendar(&self) -> Result<Vec<LeaveEvent>>;
}

/// Reads the data files from a directory. Missing files read as empty.
pub struct FileRepository {
    dir: PathBuf,
}

impl FileRepository {
    pub fn new(dir: &Path) -> Self {
        FileRepository {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LeaveRepository for FileRepository {
    fn current_user(&self) -> Result<CurrentUser> {
        Ok(ConfigFile::load_from(&self.dir)?.user)
    }

    fn balances(&self) -> Result<Vec<LeaveBalance>> {
        Ok(BalanceData::load_from(&self.dir)?.balances)
    }

    fn applications(&self) -> Result<Vec<LeaveApplication>> {
        Ok(ApplicationData::load_from(&self.dir)?.applications)
    }

    fn pending_approvals(&self) -> Result<Vec<LeaveApplication>> {
        Ok(ApprovalData::load_from(&self.dir)?.approvals)
    }

    fn team_calendar(&self) -> Result<Vec<LeaveEvent>> {
        Ok(TeamCalendarData::load_from(&self.dir)?.events)
    }
}

/// Serves the built-in sample data set without touching the filesystem.
#[derive(Default)]
pub struct SampleRepository;

impl LeaveRepository for SampleRepository {
    fn current_user(&self) -> Result<CurrentUser> {
        Ok(sample::current_user())
    }

    fn balances(&self) -> Result<Vec<LeaveBalance>> {
        Ok(sample::balances())
    }

    fn applications(&self) -> Result<Vec<LeaveApplication>> {
        Ok(sample::applications())
    }

    fn pending_approvals(&self) -> Result<Vec<LeaveApplication>> {
        Ok(sample::pending_approvals())
    }

    fn team_calendar(&self) -> Result<Vec<LeaveEvent>> {
        Ok(sample::team_calendar())
    }
}
