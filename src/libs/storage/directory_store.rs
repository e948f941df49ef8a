use crate::libs::core::models::{MessageId, UserKey};
use crate::libs::models::{Group, Message, User};
use crate::libs::settings::DirectorySettings;
use crate::libs::storage::records::{GroupRecord, MessageRecord, UserRecord};
use crate::libs::storage::snapshot::{DirectorySnapshot, GroupSnapshot};
use crate::libs::storage::storage_traits::{
    DirectoryError, DirectoryResult, GroupStore, MessageStore, UserStore,
};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

pub const ADMIN_CHANGED: &str = "SUCCESS";

// Every operation validates before its first write, a rejected call leaves
// all indexes untouched.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    settings: DirectorySettings,
    last_message_id: MessageId,
    group_chat_count: u32,
    users: HashMap<UserKey, UserRecord>,
    messages: HashMap<MessageId, MessageRecord>,
    groups: HashMap<String, GroupRecord>,
    group_admins: HashMap<String, UserKey>,
    group_members: HashMap<String, HashSet<UserKey>>,
    group_messages: HashMap<String, HashSet<MessageId>>,
    user_messages: HashMap<UserKey, HashSet<MessageId>>,
}

fn reject<T>(operation: &'static str, err: DirectoryError) -> DirectoryResult<T> {
    warn!(operation, error = %err, "directory operation rejected");
    Err(err)
}

impl DirectoryStore {
    pub fn new(settings: DirectorySettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Name of the group the user belongs to, if any.
    pub fn group_of(&self, user_key: &UserKey) -> Option<&str> {
        self.group_members
            .iter()
            .find(|(_, members)| members.contains(user_key))
            .map(|(group_name, _)| group_name.as_str())
    }

    pub fn group_admin(&self, group_name: &str) -> Option<&UserKey> {
        self.group_admins.get(group_name)
    }

    /// Members of a group, sorted by key.
    pub fn group_members(&self, group_name: &str) -> Vec<UserKey> {
        let mut members: Vec<UserKey> = self
            .group_members
            .get(group_name)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default();
        members.sort();
        members
    }

    pub fn group_message_ids(&self, group_name: &str) -> Vec<MessageId> {
        sorted_ids(self.group_messages.get(group_name))
    }

    pub fn group_message_count(&self, group_name: &str) -> usize {
        self.group_messages.get(group_name).map_or(0, HashSet::len)
    }

    pub fn user_message_ids(&self, user_key: &UserKey) -> Vec<MessageId> {
        sorted_ids(self.user_messages.get(user_key))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Current value of the group-chat sequence. Personal chats never advance it.
    pub fn group_chat_count(&self) -> u32 {
        self.group_chat_count
    }

    pub fn snapshot(&self) -> DirectorySnapshot {
        let mut users: Vec<UserRecord> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.user_key.cmp(&b.user_key));

        let mut messages: Vec<MessageRecord> = self.messages.values().cloned().collect();
        messages.sort_by_key(|message| message.message_id);

        let mut groups: Vec<GroupSnapshot> = self
            .groups
            .values()
            .map(|record| GroupSnapshot {
                group: record.clone(),
                admin: self.group_admins.get(&record.name).cloned(),
                members: self.group_members(&record.name),
                message_ids: self.group_message_ids(&record.name),
            })
            .collect();
        groups.sort_by(|a, b| a.group.name.cmp(&b.group.name));

        DirectorySnapshot {
            users,
            groups,
            messages,
            last_message_id: self.last_message_id,
            group_chat_count: self.group_chat_count,
        }
    }

    // A message belongs to one group and one author; resending it unchanged is a no-op
    fn is_sent_elsewhere(
        &self,
        message_id: MessageId,
        group_name: &str,
        sender: &UserKey,
    ) -> bool {
        let in_other_group = self
            .group_messages
            .iter()
            .any(|(name, ids)| name != group_name && ids.contains(&message_id));
        let by_other_author = self
            .user_messages
            .iter()
            .any(|(author, ids)| author != sender && ids.contains(&message_id));
        in_other_group || by_other_author
    }

    fn check_new_participants(&self, users: &[User]) -> DirectoryResult<Vec<UserKey>> {
        if users.len() < 2 {
            return Err(DirectoryError::TooFewParticipants { found: users.len() });
        }
        let mut seen = HashSet::new();
        let mut keys = Vec::with_capacity(users.len());
        for user in users {
            let key = user.key();
            if !seen.insert(key.clone()) {
                return Err(DirectoryError::DuplicateParticipant(key));
            }
            if self.group_of(&key).is_some() {
                return Err(DirectoryError::AlreadyInGroup(key));
            }
            keys.push(key);
        }
        Ok(keys)
    }
}

fn sorted_ids(ids: Option<&HashSet<MessageId>>) -> Vec<MessageId> {
    let mut ids: Vec<MessageId> = ids
        .map(|ids| ids.iter().copied().collect())
        .unwrap_or_default();
    ids.sort_unstable();
    ids
}

impl UserStore for DirectoryStore {
    fn create_user(&mut self, name: String, mobile: String) -> DirectoryResult<()> {
        let record = UserRecord::new(name, mobile);
        if self.users.contains_key(&record.user_key) {
            return reject("create_user", DirectoryError::AlreadyExists(record.user_key));
        }
        info!(user = %record.user_key, "user registered");
        self.users.insert(record.user_key.clone(), record);
        Ok(())
    }

    fn load_user(&self, user_key: &UserKey) -> Option<&UserRecord> {
        self.users.get(user_key)
    }

    fn remove_user(&mut self, user: &User) -> DirectoryResult<usize> {
        let user_key = user.key();
        let group_name = match self.group_of(&user_key) {
            Some(group_name) => group_name.to_string(),
            None => return reject("remove_user", DirectoryError::UserNotFound(user_key)),
        };
        if self.group_admins.get(&group_name) == Some(&user_key) {
            return reject("remove_user", DirectoryError::CannotRemoveAdmin(user_key));
        }

        let authored = self.user_messages.remove(&user_key).unwrap_or_default();
        self.users.remove(&user_key);
        if let Some(members) = self.group_members.get_mut(&group_name) {
            members.remove(&user_key);
        }
        for message_id in &authored {
            self.messages.remove(message_id);
            if let Some(group_messages) = self.group_messages.get_mut(&group_name) {
                group_messages.remove(message_id);
            }
        }
        if let Some(record) = self.groups.get_mut(&group_name) {
            record.number_of_participants = record.number_of_participants.saturating_sub(1);
        }

        let remaining_members = self.group_members.get(&group_name).map_or(0, HashSet::len);
        let remaining_group_messages = self.group_message_count(&group_name);
        info!(
            user = %user_key,
            group = %group_name,
            removed_messages = authored.len(),
            "user removed"
        );
        // The trailing +1 is part of the established return contract
        Ok(remaining_members + remaining_group_messages + self.messages.len() + 1)
    }
}

impl GroupStore for DirectoryStore {
    fn create_group(&mut self, users: &[User]) -> DirectoryResult<Group> {
        let keys = match self.check_new_participants(users) {
            Ok(keys) => keys,
            Err(err) => return reject("create_group", err),
        };

        let sequence = self.group_chat_count + 1;
        let group_name = if keys.len() == 2 {
            keys[1].mobile.clone()
        } else {
            self.settings.group_chat_name(sequence)
        };
        // A personal chat outlives a removed second user, whose mobile keeps naming it
        if self.groups.contains_key(&group_name) {
            return reject("create_group", DirectoryError::GroupNameTaken(group_name));
        }
        if keys.len() > 2 {
            self.group_chat_count = sequence;
        }
        let record = GroupRecord::new(group_name.clone(), keys.len());
        let group = record.to_group();
        let record_kind = record.kind;

        self.group_admins.insert(group_name.clone(), keys[0].clone());
        self.group_members
            .insert(group_name.clone(), keys.into_iter().collect());
        self.groups.insert(group_name.clone(), record);

        info!(
            group = %group_name,
            kind = %record_kind,
            participants = group.number_of_participants,
            "group created"
        );
        Ok(group)
    }

    fn change_admin(
        &mut self,
        approver: &User,
        user: &User,
        group: &Group,
    ) -> DirectoryResult<&'static str> {
        if !self.groups.contains_key(&group.name) {
            return reject("change_admin", DirectoryError::GroupNotFound(group.name.clone()));
        }
        let approver_key = approver.key();
        if self.group_admins.get(&group.name) != Some(&approver_key) {
            return reject("change_admin", DirectoryError::Unauthorized(approver_key));
        }
        let user_key = user.key();
        let is_member = self
            .group_members
            .get(&group.name)
            .is_some_and(|members| members.contains(&user_key));
        if !is_member {
            return reject("change_admin", DirectoryError::NotAParticipant(user_key));
        }

        info!(group = %group.name, from = %approver_key, to = %user_key, "admin changed");
        self.group_admins.insert(group.name.clone(), user_key);
        Ok(ADMIN_CHANGED)
    }

    fn load_group(&self, group_name: &str) -> Option<&GroupRecord> {
        self.groups.get(group_name)
    }
}

impl MessageStore for DirectoryStore {
    fn create_message(&mut self, content: String) -> MessageId {
        self.last_message_id += 1;
        let record = MessageRecord::new(self.last_message_id, content);
        self.messages.insert(record.message_id, record);
        self.last_message_id
    }

    fn send_message(
        &mut self,
        message: &Message,
        sender: &User,
        group: &Group,
    ) -> DirectoryResult<usize> {
        if !self.groups.contains_key(&group.name) {
            return reject("send_message", DirectoryError::GroupNotFound(group.name.clone()));
        }
        let sender_key = sender.key();
        let is_member = self
            .group_members
            .get(&group.name)
            .is_some_and(|members| members.contains(&sender_key));
        if !is_member {
            return reject("send_message", DirectoryError::NotAMember(sender_key));
        }
        if !self.messages.contains_key(&message.id) {
            return reject("send_message", DirectoryError::MessageNotFound(message.id));
        }
        if self.is_sent_elsewhere(message.id, &group.name, &sender_key) {
            return reject("send_message", DirectoryError::MessageAlreadySent(message.id));
        }

        let group_messages = self.group_messages.entry(group.name.clone()).or_default();
        group_messages.insert(message.id);
        let count = group_messages.len();
        self.user_messages
            .entry(sender_key.clone())
            .or_default()
            .insert(message.id);

        info!(
            group = %group.name,
            sender = %sender_key,
            message_id = message.id,
            group_messages = count,
            "message sent"
        );
        Ok(count)
    }

    fn load_message(&self, message_id: MessageId) -> Option<&MessageRecord> {
        self.messages.get(&message_id)
    }
}
