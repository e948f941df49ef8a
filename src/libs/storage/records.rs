use crate::libs::core::models::{GroupKind, MessageId, UserKey};
use crate::libs::models::{Group, Message, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_key: UserKey,
    pub name: String,
}

impl UserRecord {
    pub fn new(name: String, mobile: String) -> Self {
        Self {
            user_key: UserKey::from(mobile),
            name,
        }
    }

    pub fn to_user(&self) -> User {
        User::new(self.name.clone(), self.user_key.mobile.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    pub kind: GroupKind,
    pub number_of_participants: usize,
}

impl GroupRecord {
    pub fn new(name: String, number_of_participants: usize) -> Self {
        Self {
            name,
            kind: GroupKind::for_size(number_of_participants),
            number_of_participants,
        }
    }

    pub fn to_group(&self) -> Group {
        Group::new(self.name.clone(), self.number_of_participants)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub message_id: MessageId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl MessageRecord {
    pub fn new(message_id: MessageId, content: String) -> Self {
        Self {
            message_id,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn to_message(&self) -> Message {
        Message {
            id: self.message_id,
            content: self.content.clone(),
            timestamp: self.created_at,
        }
    }
}
