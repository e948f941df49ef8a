use crate::libs::core::models::{MessageId, UserKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Values handed in and out by callers. The store keeps its own records.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub mobile: String,
}

impl User {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
        }
    }

    pub fn key(&self) -> UserKey {
        UserKey::from(self.mobile.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub number_of_participants: usize,
}

impl Group {
    pub fn new(name: impl Into<String>, number_of_participants: usize) -> Self {
        Self {
            name: name.into(),
            number_of_participants,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
