use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_session() -> Session {
    Session {
        token: "tok-1".to_owned(),
        user: User {
            id: Some("u-1".to_owned()),
            name: "E2E User".to_owned(),
            email: Some("e2e@example.com".to_owned()),
            role: Role::User,
        },
    }
}

// =============================================================
// SessionStore lifecycle
// =============================================================

#[test]
fn empty_store_loads_anonymous() {
    let store = SessionStore::new(MemoryStore::new());
    assert_eq!(store.load(), None);
}

#[test]
fn save_then_fresh_load_restores_session() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&make_session()).unwrap();

    // A new page load builds a new SessionStore over the same storage.
    let reloaded = SessionStore::new(store.into_inner());
    let session = reloaded.load().unwrap();
    assert_eq!(session, make_session());
    assert_eq!(session.user.name, "E2E User");
}

#[test]
fn save_writes_token_and_user_keys() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&make_session()).unwrap();
    assert_eq!(store.store().get(TOKEN_KEY).as_deref(), Some("tok-1"));
    let raw = store.store().get(USER_KEY).unwrap();
    let user: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(user.name, "E2E User");
}

#[test]
fn clear_removes_both_keys() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&make_session()).unwrap();
    store.clear().unwrap();
    assert!(store.store().is_empty());

    let reloaded = SessionStore::new(store.into_inner());
    assert_eq!(reloaded.load(), None);
}

#[test]
fn token_without_user_is_anonymous() {
    let mut kv = MemoryStore::new();
    kv.set(TOKEN_KEY, "tok").unwrap();
    assert_eq!(SessionStore::new(kv).load(), None);
}

#[test]
fn user_without_token_is_anonymous() {
    let mut kv = MemoryStore::new();
    kv.set(USER_KEY, r#"{"name":"A","role":"user"}"#).unwrap();
    assert_eq!(SessionStore::new(kv).load(), None);
}

#[test]
fn corrupted_user_is_anonymous() {
    let mut kv = MemoryStore::new();
    kv.set(TOKEN_KEY, "tok").unwrap();
    kv.set(USER_KEY, "{not json").unwrap();
    assert_eq!(SessionStore::new(kv).load(), None);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn user_accepts_mongo_style_id() {
    let user: User = serde_json::from_str(r#"{"_id":"u-9","name":"Pat","role":"provider"}"#).unwrap();
    assert_eq!(user.id.as_deref(), Some("u-9"));
    assert_eq!(user.role, Role::Provider);
}

#[test]
fn user_role_defaults_to_user() {
    let user: User = serde_json::from_str(r#"{"name":"Pat"}"#).unwrap();
    assert_eq!(user.role, Role::User);
}

#[test]
fn auth_response_converts_into_session() {
    let json = r#"{"token":"t","user":{"id":"u","name":"Sam","role":"user"}}"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    let session = Session::from(resp);
    assert_eq!(session.token, "t");
    assert_eq!(session.user.name, "Sam");
}

#[test]
fn signup_request_serializes_lowercase_role() {
    let req = SignupRequest {
        name: "Sam".to_owned(),
        email: "s@example.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Provider,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"name":"Sam","email":"s@example.com","password":"pw","role":"provider"})
    );
}

#[test]
fn role_from_param_defaults_to_user() {
    assert_eq!(Role::from_param("provider"), Role::Provider);
    assert_eq!(Role::from_param("admin"), Role::User);
    assert_eq!(Role::Provider.label(), "Provide Services");
}
