use super::*;
use market::{Role, Session, SessionStore, User};

fn scratch_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("neighbourcare-test-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

fn alice() -> Session {
    Session {
        token: "tok-1".to_owned(),
        user: User {
            id: Some("u1".to_owned()),
            name: "Alice".to_owned(),
            email: Some("alice@example.com".to_owned()),
            role: Role::User,
        },
    }
}

#[test]
fn missing_file_opens_empty() {
    let store = FileStore::open(scratch_path()).unwrap();
    assert_eq!(store.get("token"), None);
}

#[test]
fn saved_session_survives_reopen() {
    let path = scratch_path();
    let mut sessions = SessionStore::new(FileStore::open(&path).unwrap());
    sessions.save(&alice()).unwrap();

    let reopened = SessionStore::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.load(), Some(alice()));

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["token"], "tok-1");
    assert!(raw["user"].is_string());
}

#[test]
fn clear_removes_both_keys_on_disk() {
    let path = scratch_path();
    let mut sessions = SessionStore::new(FileStore::open(&path).unwrap());
    sessions.save(&alice()).unwrap();
    sessions.clear().unwrap();

    let reopened = SessionStore::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.load(), None);
    assert!(reopened.store().get("user").is_none());
}

#[test]
fn removing_absent_key_does_not_create_file() {
    let path = scratch_path();
    let mut store = FileStore::open(&path).unwrap();
    store.remove("token").unwrap();
    assert!(!path.exists());
}

#[test]
fn corrupt_file_opens_as_signed_out() {
    let path = scratch_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json").unwrap();
    let sessions = SessionStore::new(FileStore::open(&path).unwrap());
    assert_eq!(sessions.load(), None);
}

#[test]
fn clear_overwrites_a_corrupt_file() {
    let path = scratch_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{\"token\": 42").unwrap();
    let mut sessions = SessionStore::new(FileStore::open(&path).unwrap());
    sessions.clear().unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({}));
}

#[test]
fn login_replaces_a_corrupt_file() {
    let path = scratch_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[1, 2, 3]").unwrap();
    let mut sessions = SessionStore::new(FileStore::open(&path).unwrap());
    sessions.save(&alice()).unwrap();

    let reopened = SessionStore::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.load(), Some(alice()));
}

#[test]
fn corrupt_user_reads_as_anonymous() {
    let path = scratch_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"token":"tok-1","user":"{broken"}"#).unwrap();
    let sessions = SessionStore::new(FileStore::open(&path).unwrap());
    assert_eq!(sessions.load(), None);
}
