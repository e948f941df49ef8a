use serde::{Deserialize, Serialize};
use std::fmt;

pub type MessageId = u32;

// Users are keyed by mobile number everywhere, display names are not unique
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserKey {
    pub mobile: String,
}

impl UserKey {
    pub fn as_str(&self) -> &str {
        &self.mobile
    }
}

impl From<String> for UserKey {
    fn from(mobile: String) -> UserKey {
        Self { mobile }
    }
}

impl From<&str> for UserKey {
    fn from(mobile: &str) -> UserKey {
        Self {
            mobile: mobile.to_string(),
        }
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.mobile)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Personal,
    Chat,
}

impl GroupKind {
    pub fn for_size(participants: usize) -> GroupKind {
        if participants == 2 {
            GroupKind::Personal
        } else {
            GroupKind::Chat
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GroupKind::Personal => write!(f, "personal"),
            GroupKind::Chat => write!(f, "chat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_displays_mobile() {
        let key = UserKey::from("0400111222");
        assert_eq!(key.to_string(), "0400111222");
        assert_eq!(key.as_str(), "0400111222");
    }

    #[test]
    fn test_group_kind_by_size() {
        assert_eq!(GroupKind::for_size(2), GroupKind::Personal);
        assert_eq!(GroupKind::for_size(3), GroupKind::Chat);
        assert_eq!(GroupKind::for_size(12), GroupKind::Chat);
    }
}
