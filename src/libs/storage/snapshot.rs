use crate::libs::core::models::{MessageId, UserKey};
use crate::libs::storage::records::{GroupRecord, MessageRecord, UserRecord};
use crate::libs::storage::storage_traits::DirectoryResult;
use bincode::config::standard;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of every index, ordered by key so two snapshots of the
/// same state encode to the same bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    pub users: Vec<UserRecord>,
    pub groups: Vec<GroupSnapshot>,
    pub messages: Vec<MessageRecord>,
    pub last_message_id: MessageId,
    pub group_chat_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub group: GroupRecord,
    pub admin: Option<UserKey>,
    pub members: Vec<UserKey>,
    pub message_ids: Vec<MessageId>,
}

impl DirectorySnapshot {
    pub fn to_bytes(&self) -> DirectoryResult<Vec<u8>> {
        Ok(bincode::serde::encode_to_vec(self, standard())?)
    }

    pub fn from_bytes(bytes: &[u8]) -> DirectoryResult<Self> {
        let (snapshot, _len): (DirectorySnapshot, usize) =
            bincode::serde::decode_from_slice(bytes, standard())?;
        Ok(snapshot)
    }

    pub fn group(&self, group_name: &str) -> Option<&GroupSnapshot> {
        self.groups.iter().find(|entry| entry.group.name == group_name)
    }
}
