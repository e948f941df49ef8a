use crate::libs::core::models::{MessageId, UserKey};
use crate::libs::logging::LoggingError;
use crate::libs::models::{Group, Message, User};
use crate::libs::storage::records::{GroupRecord, MessageRecord, UserRecord};
use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

pub trait UserStore {
    fn create_user(&mut self, name: String, mobile: String) -> DirectoryResult<()>;
    fn load_user(&self, user_key: &UserKey) -> Option<&UserRecord>;
    // Cascades into every group and message index that references the user
    fn remove_user(&mut self, user: &User) -> DirectoryResult<usize>;
}

pub trait GroupStore {
    fn create_group(&mut self, users: &[User]) -> DirectoryResult<Group>;
    fn change_admin(
        &mut self,
        approver: &User,
        user: &User,
        group: &Group,
    ) -> DirectoryResult<&'static str>;
    fn load_group(&self, group_name: &str) -> Option<&GroupRecord>;
}

pub trait MessageStore {
    fn create_message(&mut self, content: String) -> MessageId;
    fn send_message(
        &mut self,
        message: &Message,
        sender: &User,
        group: &Group,
    ) -> DirectoryResult<usize>;
    fn load_message(&self, message_id: MessageId) -> Option<&MessageRecord>;
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User already exists")]
    AlreadyExists(UserKey),
    #[error("Group does not exist")]
    GroupNotFound(String),
    #[error("You are not allowed to send message")]
    NotAMember(UserKey),
    #[error("Approver does not have rights")]
    Unauthorized(UserKey),
    #[error("User is not a participant")]
    NotAParticipant(UserKey),
    #[error("User not found")]
    UserNotFound(UserKey),
    #[error("Cannot remove admin")]
    CannotRemoveAdmin(UserKey),
    #[error("A group needs at least 2 participants, found {found}")]
    TooFewParticipants { found: usize },
    #[error("User {0} is already a member of a group")]
    AlreadyInGroup(UserKey),
    #[error("User {0} is listed more than once")]
    DuplicateParticipant(UserKey),
    #[error("A group named {0} already exists")]
    GroupNameTaken(String),
    #[error("Message {0} does not exist")]
    MessageNotFound(MessageId),
    #[error("Message {0} was already sent by another user or to another group")]
    MessageAlreadySent(MessageId),
    #[error("Serialisation Error: {0}")]
    Serialisation(#[from] EncodeError),
    #[error("Deserialisation Error: {0}")]
    Deserialisation(#[from] DecodeError),
    #[error("Settings Error: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),
    #[error("Directory lock poisoned: {0}")]
    Poisoned(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
