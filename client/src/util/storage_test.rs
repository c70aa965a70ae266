use super::*;
use market::{Role, Session, User};

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

#[cfg(not(feature = "hydrate"))]
#[test]
fn off_browser_store_reads_nothing() {
    let store = LocalStorageStore;
    assert_eq!(store.get("token"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn off_browser_writes_are_accepted_and_dropped() {
    let mut sessions = browser_session_store();
    assert_eq!(sessions.save(&alice()), Ok(()));
    assert_eq!(sessions.load(), None);
    assert_eq!(sessions.clear(), Ok(()));
}
