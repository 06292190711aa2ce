//! Integration tests wiring the dispatcher to a real store: updates go in,
//! trust edges come out. No network is involved — plain-text and member
//! updates never touch the Telegram client.

use safefolks_bot::Bot;
use safefolks_store::TrustStore;
use safefolks_telegram::{Chat, ChatMember, ChatMemberUpdated, Message, TelegramClient, Update, User};
use safefolks_types::{GroupId, UserId};

fn test_bot(dir: &tempfile::TempDir) -> Bot {
    let store = TrustStore::open(dir.path().join("trust.json"));
    // Points nowhere; handlers under test never issue requests.
    let client = TelegramClient::with_base_url("test-token", "http://127.0.0.1:1");
    Bot::new(store, client, 1)
}

fn group_chat(id: i64) -> Chat {
    Chat {
        id,
        kind: "supergroup".to_string(),
        title: Some("Test Group".to_string()),
    }
}

fn user(id: i64, name: &str) -> User {
    User {
        id,
        first_name: name.to_string(),
        last_name: None,
        username: None,
    }
}

fn text_update(update_id: i64, chat: Chat, from: User, text: &str) -> Update {
    Update {
        update_id,
        message: Some(Message {
            chat,
            from: Some(from),
            text: Some(text.to_string()),
        }),
        chat_member: None,
    }
}

fn join_update(update_id: i64, chat: Chat, joiner: User, status: &str) -> Update {
    Update {
        update_id,
        message: None,
        chat_member: Some(ChatMemberUpdated {
            chat,
            new_chat_member: ChatMember {
                status: status.to_string(),
                user: joiner,
            },
        }),
    }
}

#[tokio::test]
async fn member_message_records_owner_trust() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trust.json");

    let mut store = TrustStore::open(&path);
    store.upsert_group(GroupId::new(-100), "Test Group", UserId::new(1), "Owner");
    let client = TelegramClient::with_base_url("test-token", "http://127.0.0.1:1");
    let mut bot = Bot::new(store, client, 1);

    bot.handle_update(text_update(1, group_chat(-100), user(2, "Bob"), "hello")).await;

    let trusts = bot.store().trusts_for_group(GroupId::new(-100));
    assert_eq!(trusts.len(), 1);
    assert_eq!(trusts[0].truster_id, UserId::new(1));
    assert_eq!(trusts[0].trustee_id, UserId::new(2));
    assert_eq!(trusts[0].trustee_name, "Bob");
}

#[tokio::test]
async fn owner_message_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TrustStore::open(dir.path().join("trust.json"));
    store.upsert_group(GroupId::new(-100), "Test Group", UserId::new(1), "Owner");
    let client = TelegramClient::with_base_url("test-token", "http://127.0.0.1:1");
    let mut bot = Bot::new(store, client, 1);

    bot.handle_update(text_update(1, group_chat(-100), user(1, "Owner"), "hi all")).await;

    assert!(bot.store().trusts().is_empty());
}

#[tokio::test]
async fn unregistered_group_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut bot = test_bot(&dir);

    bot.handle_update(text_update(1, group_chat(-100), user(2, "Bob"), "hello")).await;

    assert!(bot.store().trusts().is_empty());
}

#[tokio::test]
async fn repeated_messages_record_one_edge() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TrustStore::open(dir.path().join("trust.json"));
    store.upsert_group(GroupId::new(-100), "Test Group", UserId::new(1), "Owner");
    let client = TelegramClient::with_base_url("test-token", "http://127.0.0.1:1");
    let mut bot = Bot::new(store, client, 1);

    for i in 0..3 {
        bot.handle_update(text_update(i, group_chat(-100), user(2, "Bob"), "spam")).await;
    }

    assert_eq!(bot.store().trusts_for_group(GroupId::new(-100)).len(), 1);
}

#[tokio::test]
async fn member_join_records_trust_but_leave_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TrustStore::open(dir.path().join("trust.json"));
    store.upsert_group(GroupId::new(-100), "Test Group", UserId::new(1), "Owner");
    let client = TelegramClient::with_base_url("test-token", "http://127.0.0.1:1");
    let mut bot = Bot::new(store, client, 1);

    bot.handle_update(join_update(1, group_chat(-100), user(3, "Carol"), "member")).await;
    bot.handle_update(join_update(2, group_chat(-100), user(4, "Dave"), "left")).await;

    let trusts = bot.store().trusts_for_group(GroupId::new(-100));
    assert_eq!(trusts.len(), 1);
    assert_eq!(trusts[0].trustee_name, "Carol");
}

#[tokio::test]
async fn private_chat_messages_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TrustStore::open(dir.path().join("trust.json"));
    store.upsert_group(GroupId::new(-100), "Test Group", UserId::new(1), "Owner");
    let client = TelegramClient::with_base_url("test-token", "http://127.0.0.1:1");
    let mut bot = Bot::new(store, client, 1);

    let private = Chat {
        id: 55,
        kind: "private".to_string(),
        title: None,
    };
    bot.handle_update(text_update(1, private, user(2, "Bob"), "hello")).await;

    assert!(bot.store().trusts().is_empty());
}
