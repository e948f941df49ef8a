#![allow(dead_code)]

use chat_directory_lib::libs::logging::{init_logging, LogConfig};
use chat_directory_lib::libs::models::{Message, User};
use chat_directory_lib::libs::settings::DirectorySettings;
use chat_directory_lib::libs::storage::directory_store::DirectoryStore;
use chat_directory_lib::libs::storage::storage_traits::{MessageStore, UserStore};
use std::sync::Once;

pub fn aaa_init(init: &Once) {
    init.call_once(|| {
        // Another test binary or harness may already own the subscriber
        let settings = DirectorySettings {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        let _ = init_logging(LogConfig::from_settings(&settings).with_target(false));
    });
}

pub fn register(store: &mut DirectoryStore, name: &str, mobile: &str) -> User {
    store
        .create_user(name.to_string(), mobile.to_string())
        .expect("Failed to register user");
    User::new(name, mobile)
}

// Users named "<prefix>0".."<prefix>N" with mobiles "<prefix>-0".."<prefix>-N"
pub fn register_many(store: &mut DirectoryStore, prefix: &str, count: usize) -> Vec<User> {
    (0..count)
        .map(|i| register(store, &format!("{}{}", prefix, i), &format!("{}-{}", prefix, i)))
        .collect()
}

pub fn new_message(store: &mut DirectoryStore, content: &str) -> Message {
    let message_id = store.create_message(content.to_string());
    store
        .load_message(message_id)
        .expect("Created message should be stored")
        .to_message()
}
