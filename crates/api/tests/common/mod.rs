//! Shared fixtures for API integration tests.
//!
//! Requests go through the real router and middleware stack; the database
//! and SMS gateway are replaced by in-memory fakes that record every call.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use makeup_api::config::ServerConfig;
use makeup_api::router::build_app_router;
use makeup_api::state::AppState;
use makeup_db::models::appointment::{Appointment, CreateAppointment};
use makeup_db::models::artist::Artist;
use makeup_db::{BookingStore, StoreError};
use makeup_notify::SmsSender;
use tower::ServiceExt;

/// API key accepted by the test app.
pub const TEST_API_KEY: &str = "test-api-key";

/// Confirmation page prefix used in notification texts.
pub const TEST_VIEW_URL: &str = "https://booking.example.com/t/";

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A [`BookingStore`] over plain vectors.
#[derive(Default)]
pub struct InMemoryStore {
    pub artists: Mutex<Vec<Artist>>,
    pub appointments: Mutex<Vec<Appointment>>,
    /// Number of trait calls that reached the store (categories excluded).
    pub calls: AtomicUsize,
    /// When set, every call fails with a database error.
    pub fail_database: AtomicBool,
    /// Number of upcoming inserts to reject as token collisions.
    pub collisions_remaining: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_artists(artists: Vec<Artist>) -> Self {
        Self {
            artists: Mutex::new(artists),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.lock().unwrap().len()
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_database.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn list_artists(&self) -> Result<Vec<Artist>, StoreError> {
        self.enter()?;
        Ok(self.artists.lock().unwrap().clone())
    }

    async fn find_artist(&self, short_key: &str) -> Result<Option<Artist>, StoreError> {
        self.enter()?;
        Ok(self
            .artists
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.short_key == short_key)
            .cloned())
    }

    async fn create_appointment(
        &self,
        input: &CreateAppointment,
    ) -> Result<Appointment, StoreError> {
        self.enter()?;
        if self
            .collisions_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(StoreError::DuplicateTransactionId);
        }

        let mut appointments = self.appointments.lock().unwrap();
        if appointments
            .iter()
            .any(|a| a.transaction_id == input.transaction_id)
        {
            return Err(StoreError::DuplicateTransactionId);
        }

        let appointment = Appointment {
            id: appointments.len() as i64 + 1,
            makeup_artist_id: input.makeup_artist_id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            phone_number: input.phone_number.clone(),
            email: input.email.clone(),
            district: input.district.clone(),
            due_date: input.due_date,
            message: input.message.clone(),
            prefer_time_period_in_day: input.prefer_time_period_in_day.clone(),
            transaction_id: input.transaction_id.clone(),
            is_viewed: false,
            created_at: Utc::now(),
        };
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn find_appointment(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Appointment>, StoreError> {
        self.enter()?;
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.transaction_id == transaction_id)
            .cloned())
    }

    async fn mark_appointment_viewed(&self, transaction_id: &str) -> Result<bool, StoreError> {
        self.enter()?;
        let mut appointments = self.appointments.lock().unwrap();
        match appointments
            .iter_mut()
            .find(|a| a.transaction_id == transaction_id && !a.is_viewed)
        {
            Some(a) => {
                a.is_viewed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter()
    }
}

// ---------------------------------------------------------------------------
// Recording SMS sender
// ---------------------------------------------------------------------------

/// An [`SmsSender`] that records each send and returns a fixed outcome.
pub struct RecordingSms {
    pub succeed: bool,
    pub sent: Mutex<Vec<(Vec<String>, String)>>,
}

impl RecordingSms {
    pub fn new(succeed: bool) -> Self {
        Self {
            succeed,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(Vec<String>, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsSender for RecordingSms {
    async fn send(&self, destinations: &[String], text: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .push((destinations.to_vec(), text.to_string()));
        self.succeed
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        api_key: TEST_API_KEY.to_string(),
        appointment_view_url: TEST_VIEW_URL.to_string(),
        sms_recipients: vec!["+905550000001".to_string(), "+905550000002".to_string()],
    }
}

/// The router plus handles on its fakes.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub sms: Arc<RecordingSms>,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router, exactly as `main.rs` does.
pub fn build_test_app(store: InMemoryStore, sms: RecordingSms) -> TestApp {
    let store = Arc::new(store);
    let sms = Arc::new(sms);

    let state = AppState {
        store: store.clone(),
        sms: sms.clone(),
        config: Arc::new(test_config()),
    };

    TestApp {
        router: build_app_router(state),
        store,
        sms,
    }
}

/// An app with no artists and an SMS gateway that accepts everything.
pub fn default_test_app() -> TestApp {
    build_test_app(InMemoryStore::default(), RecordingSms::new(true))
}

pub fn artist(id: i64, short_key: &str) -> Artist {
    Artist {
        id,
        first_name: "Elif".to_string(),
        last_name: "Kaya".to_string(),
        image_url: format!("https://cdn.example.com/{short_key}.jpg"),
        short_key: short_key.to_string(),
        service_params: r#"{"bridal":true}"#.to_string(),
    }
}

/// A well-formed booking request body.
pub fn appointment_body() -> serde_json::Value {
    serde_json::json!({
        "makeUpArtistID": 1,
        "firstName": "Ayse",
        "lastName": "Yilmaz",
        "phoneNumber": "+905551112233",
        "email": "ayse@example.com",
        "district": "Kadikoy",
        "message": "Bridal trial",
        "preferTimePeriodInDay": "morning",
        "dueDate": "2024-06-15 10:00:00"
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// GET with the valid API key.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-api-key", TEST_API_KEY)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with no API key header at all.
pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a JSON body with the valid API key.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// POST a raw body labelled as JSON with the valid API key.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", TEST_API_KEY)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
