use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Name recorded on applications the manager approves or rejects.
    pub approver_name: String,
    pub upcoming_limit: usize,
    /// Events drawn inside one calendar cell before collapsing into "+N".
    pub cell_event_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            approver_name: "Sarah Chen".to_string(),
            upcoming_limit: 6,
            cell_event_limit: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CurrentUser {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub role: String,
    pub initials: String,
    pub manager_name: String,
}

impl CurrentUser {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// The whole of config.yaml. Either key may be missing.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub settings: AppSettings,
    #[serde(default)]
    pub user: CurrentUser,
}

impl Persistable for ConfigFile {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl AppSettings {
    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(ConfigFile::load_from(dir)?.settings)
    }
}
