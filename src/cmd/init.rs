use crate::data::persistence::get_data_dir;
use crate::data::{
    sample, AppSettings, ApplicationData, ApprovalData, BalanceData, ConfigFile, Persistable,
    TeamCalendarData,
};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized in {}", dir.display());
    Ok(())
}

/// Writes the sample data set into `dir`.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    ConfigFile {
        settings: AppSettings::default(),
        user: sample::current_user(),
    }
    .save_to(dir)?;
    BalanceData {
        balances: sample::balances(),
    }
    .save_to(dir)?;
    ApplicationData {
        applications: sample::applications(),
    }
    .save_to(dir)?;
    ApprovalData {
        approvals: sample::pending_approvals(),
    }
    .save_to(dir)?;
    TeamCalendarData {
        events: sample::team_calendar(),
    }
    .save_to(dir)?;
    tracing::info!(dir = %dir.display(), "sample data written");
    Ok(())
}
