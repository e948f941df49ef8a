use crate::libs::storage::storage_traits::DirectoryResult;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GROUP_NAME_PREFIX: &str = "Group ";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySettings {
    // Group chats are named prefix + sequence number
    pub group_name_prefix: String,
    pub log_level: String,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            group_name_prefix: DEFAULT_GROUP_NAME_PREFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DirectorySettings {
    pub fn from_toml_str(raw: &str) -> DirectoryResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn group_chat_name(&self, sequence: u32) -> String {
        format!("{}{}", self.group_name_prefix, sequence)
    }
}
