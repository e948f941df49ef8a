pub mod libs;
use crate::libs::core::models::{MessageId, UserKey};
use crate::libs::logging::{init_logging, LogConfig};
use crate::libs::models::{Group, Message, User};
use crate::libs::settings::DirectorySettings;
use crate::libs::storage::directory_store::DirectoryStore;
use crate::libs::storage::storage_traits::{
    DirectoryError, DirectoryResult, GroupStore, MessageStore, UserStore,
};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

// One lock over the whole store: every call below sees either none or all of
// another call's index updates.
pub static DIRECTORY: Lazy<Mutex<DirectoryStore>> =
    Lazy::new(|| Mutex::new(DirectoryStore::default()));

fn directory() -> DirectoryResult<MutexGuard<'static, DirectoryStore>> {
    DIRECTORY
        .lock()
        .map_err(|err| DirectoryError::Poisoned(err.to_string()))
}

/// Replace the process-wide directory with an empty one using `settings`.
pub fn init_directory(settings: DirectorySettings) -> DirectoryResult<()> {
    *directory()? = DirectoryStore::new(settings);
    Ok(())
}

/// Reset the directory and install a `tracing` subscriber filtered at
/// `settings.log_level`. The directory is reset even when a subscriber is
/// already installed; that case is reported as `DirectoryError::Logging`.
pub fn init_directory_with_logging(settings: DirectorySettings) -> DirectoryResult<()> {
    let log_config = LogConfig::from_settings(&settings);
    init_directory(settings)?;
    init_logging(log_config)?;
    Ok(())
}

/// Run a read-only closure against the current directory state.
pub fn with_directory<R>(read: impl FnOnce(&DirectoryStore) -> R) -> DirectoryResult<R> {
    let guard = directory()?;
    Ok(read(&*guard))
}

pub fn create_user(name: String, mobile: String) -> DirectoryResult<()> {
    directory()?.create_user(name, mobile)
}

pub fn load_user(mobile: &str) -> DirectoryResult<Option<User>> {
    Ok(directory()?
        .load_user(&UserKey::from(mobile))
        .map(|record| record.to_user()))
}

pub fn create_group(users: Vec<User>) -> DirectoryResult<Group> {
    directory()?.create_group(&users)
}

pub fn create_message(content: String) -> DirectoryResult<MessageId> {
    Ok(directory()?.create_message(content))
}

pub fn load_message(message_id: MessageId) -> DirectoryResult<Option<Message>> {
    Ok(directory()?
        .load_message(message_id)
        .map(|record| record.to_message()))
}

pub fn send_message(message: &Message, sender: &User, group: &Group) -> DirectoryResult<usize> {
    directory()?.send_message(message, sender, group)
}

pub fn change_admin(approver: &User, user: &User, group: &Group) -> DirectoryResult<&'static str> {
    directory()?.change_admin(approver, user, group)
}

pub fn remove_user(user: &User) -> DirectoryResult<usize> {
    directory()?.remove_user(user)
}

/// Encoded snapshot of the whole directory, see `DirectorySnapshot::from_bytes`.
pub fn export_snapshot() -> DirectoryResult<Vec<u8>> {
    let snapshot = directory()?.snapshot();
    snapshot.to_bytes()
}
