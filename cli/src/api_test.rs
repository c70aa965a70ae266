use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::FixedOffset;
use market::{BookingDraft, Category, CategoryFilter, Role};
use serde_json::{Value, json};

use super::*;

// =============================================================
// Mock marketplace API
// =============================================================

#[derive(Clone, Default)]
struct Recorded {
    bookings: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

fn listing_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "category": "Plumbing",
        "description": "Leaks fixed fast",
        "pricePerHour": 40,
        "images": [],
        "availability": ["Mon 9-5"],
        "providerId": { "_id": "p1", "name": "Pat", "rating": 4.5 }
    })
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "alice@example.com" && body["password"] == "pw" {
        let user = json!({ "_id": "u1", "name": "Alice", "email": "alice@example.com", "role": "user" });
        (StatusCode::OK, Json(json!({ "token": "tok-1", "user": user })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
    }
}

async fn signup(Json(body): Json<Value>) -> Json<Value> {
    let user = json!({ "_id": "u2", "name": body["name"], "email": body["email"], "role": body["role"] });
    Json(json!({ "token": "tok-2", "user": user }))
}

async fn listings(State(rec): State<Recorded>, RawQuery(query): RawQuery) -> Json<Value> {
    rec.queries.lock().unwrap().push(query);
    Json(json!([listing_json("abc123", "Pipe repair")]))
}

async fn listing(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if id == "abc123" {
        Ok(Json(listing_json("abc123", "Pipe repair")))
    } else if id == "odd/id?x=1" {
        Ok(Json(listing_json(&id, "Odd id")))
    } else {
        Err((StatusCode::NOT_FOUND, Json(json!({ "message": "Listing not found" }))))
    }
}

async fn bookings(State(rec): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer tok-1");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Not authorized" })));
    }
    if body["listingId"] == "gone" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Listing has been removed" })));
    }
    rec.bookings.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({ "_id": "b1", "status": "pending", "price": 80 })))
}

async fn spawn_mock() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/listings", get(listings))
        .route("/api/listings/{id}", get(listing))
        .route("/api/bookings", post(bookings))
        .with_state(recorded.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), recorded)
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_returns_token_and_user() {
    let (base, _) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    let resp = client
        .login(&LoginRequest {
            email: "alice@example.com".to_owned(),
            password: "pw".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(resp.token, "tok-1");
    assert_eq!(resp.user.name, "Alice");
}

#[tokio::test]
async fn rejected_login_keeps_server_message() {
    let (base, _) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    let err = client
        .login(&LoginRequest {
            email: "alice@example.com".to_owned(),
            password: "wrong".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn signup_sends_role() {
    let (base, _) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    let resp = client
        .signup(&SignupRequest {
            name: "Pat".to_owned(),
            email: "pat@example.com".to_owned(),
            password: "pw".to_owned(),
            role: Role::Provider,
        })
        .await
        .unwrap();
    assert_eq!(resp.user.role, Role::Provider);
}

// =============================================================
// Listings
// =============================================================

#[tokio::test]
async fn listings_sends_encoded_filters() {
    let (base, recorded) = spawn_mock().await;
    let client = ApiClient::new(&format!("{base}/"), None).unwrap();
    let query = ListingQuery::new("deep clean", CategoryFilter::Only(Category::HomeRepair));
    let items = client.listings(&query).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        recorded.queries.lock().unwrap().as_slice(),
        [Some("q=deep%20clean&category=Home%20Repair".to_owned())]
    );
}

#[tokio::test]
async fn listings_without_filters_sends_no_query() {
    let (base, recorded) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    client.listings(&ListingQuery::default()).await.unwrap();
    assert_eq!(recorded.queries.lock().unwrap().as_slice(), [None]);
}

#[tokio::test]
async fn listing_decodes_provider() {
    let (base, _) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    let listing = client.listing("abc123").await.unwrap();
    assert_eq!(listing.provider.name, "Pat");
    assert_eq!(listing.price_label(), "$40/hr");
}

#[tokio::test]
async fn missing_listing_is_not_found() {
    let (base, _) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    assert_eq!(client.listing("nope").await.unwrap_err(), ApiError::NotFound);
}

#[tokio::test]
async fn listing_id_stays_one_path_segment() {
    let (base, recorded) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    let listing = client.listing("odd/id?x=1").await.unwrap();
    assert_eq!(listing.id, "odd/id?x=1");
    assert!(recorded.queries.lock().unwrap().is_empty());
}

// =============================================================
// Bookings
// =============================================================

fn request_for(listing_id: &str) -> BookingRequest {
    let mut draft = BookingDraft::default();
    draft.set_date("2024-06-01");
    draft.set_time("14:00");
    draft.set_duration("2");
    BookingRequest::prepare(listing_id, &draft, &FixedOffset::east_opt(0).unwrap()).unwrap()
}

fn request_for_abc123() -> BookingRequest {
    request_for("abc123")
}

#[tokio::test]
async fn booking_posts_once_with_bearer_token() {
    let (base, recorded) = spawn_mock().await;
    let client = ApiClient::new(&base, Some("tok-1".to_owned())).unwrap();
    let confirmation = client.create_booking(&request_for_abc123()).await.unwrap();
    assert_eq!(confirmation.id.as_deref(), Some("b1"));
    assert_eq!(confirmation.status(), Some("pending"));
    assert_eq!(confirmation.body["price"], 80);

    let bookings = recorded.bookings.lock().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(
        bookings[0],
        json!({
            "listingId": "abc123",
            "startTime": "2024-06-01T14:00:00+00:00",
            "endTime": "2024-06-01T16:00:00+00:00"
        })
    );
}

#[tokio::test]
async fn anonymous_booking_is_rejected() {
    let (base, recorded) = spawn_mock().await;
    let client = ApiClient::new(&base, None).unwrap();
    let err = client.create_booking(&request_for_abc123()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Not authorized".to_owned()
        }
    );
    assert!(recorded.bookings.lock().unwrap().is_empty());
}

#[tokio::test]
async fn booking_404_keeps_the_server_message() {
    let (base, recorded) = spawn_mock().await;
    let client = ApiClient::new(&base, Some("tok-1".to_owned())).unwrap();
    let err = client.create_booking(&request_for("gone")).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: "Listing has been removed".to_owned()
        }
    );
    assert_eq!(err.user_message(), "Listing has been removed");
    assert!(recorded.bookings.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:9/api", None).unwrap();
    let err = client.listing("abc123").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
