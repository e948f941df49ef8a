use chat_directory_lib::libs::models::User;
use chat_directory_lib::libs::storage::directory_store::DirectoryStore;
use chat_directory_lib::libs::storage::storage_traits::{GroupStore, MessageStore, UserStore};
use proptest::prelude::*;

fn users(prefix: &str, count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User::new(format!("{}{}", prefix, i), format!("{}-{}", prefix, i)))
        .collect()
}

proptest! {
    #[test]
    fn prop_personal_chats_never_touch_the_sequence(pairs in 1usize..8) {
        let mut store = DirectoryStore::default();
        for p in 0..pairs {
            let pair = users(&format!("p{}", p), 2);
            let group = store.create_group(&pair).unwrap();
            prop_assert_eq!(group.name, pair[1].mobile.clone());
        }
        prop_assert_eq!(store.group_chat_count(), 0);
    }

    #[test]
    fn prop_group_chats_are_numbered_in_call_order(
        sizes in prop::collection::vec(3usize..7, 1..6),
        personal_every in 1usize..4,
    ) {
        let mut store = DirectoryStore::default();
        let mut expected = 0;
        for (i, size) in sizes.iter().enumerate() {
            if i % personal_every == 0 {
                store.create_group(&users(&format!("pc{}", i), 2)).unwrap();
            }
            expected += 1;
            let group = store.create_group(&users(&format!("g{}", i), *size)).unwrap();
            prop_assert_eq!(group.name, format!("Group {}", expected));
            prop_assert_eq!(group.number_of_participants, *size);
        }
        prop_assert_eq!(store.group_chat_count(), sizes.len() as u32);
    }

    #[test]
    fn prop_removal_counter_matches_remaining_state(
        size in 3usize..6,
        sends in prop::collection::vec((0usize..6, any::<bool>()), 0..20),
    ) {
        let mut store = DirectoryStore::default();
        let members = users("m", size);
        for member in &members {
            store.create_user(member.name.clone(), member.mobile.clone()).unwrap();
        }
        let group = store.create_group(&members).unwrap();
        for (sender, attach) in &sends {
            let id = store.create_message("x".to_string());
            if *attach {
                let message = store.load_message(id).unwrap().to_message();
                store.send_message(&message, &members[sender % size], &group).unwrap();
            }
        }

        let leaver = &members[size - 1];
        let authored = store.user_message_ids(&leaver.key()).len();
        let group_before = store.group_message_count(&group.name);
        let total_before = store.message_count();

        let counter = store.remove_user(leaver).unwrap();
        prop_assert_eq!(store.group_message_count(&group.name), group_before - authored);
        prop_assert_eq!(store.message_count(), total_before - authored);
        prop_assert_eq!(
            counter,
            (size - 1) + (group_before - authored) + (total_before - authored) + 1
        );
        prop_assert!(store.load_user(&leaver.key()).is_none());
    }
}
