use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use chrono::{TimeZone, Utc};
use portfolio_site::contact::{
    ContactError, ContactFormController, Feedback, Field, FormFields, HttpMailer, Mailer,
    SubmissionPayload, Timer,
};
use serde_json::{json, Value};
use tokio::task::{JoinHandle, LocalSet};

type Received = Arc<Mutex<Vec<(Option<String>, Value)>>>;

#[derive(Clone)]
struct Relay {
    status: StatusCode,
    received: Received,
}

async fn send_email(
    State(relay): State<Relay>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    relay.received.lock().unwrap().push((content_type, body));
    (relay.status, "Email sent successfully")
}

async fn spawn_relay(status: StatusCode) -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/send-email", post(send_email))
        .with_state(Relay {
            status,
            received: received.clone(),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/send-email"), received)
}

// Runs reverts on the current LocalSet.
struct TokioTimer;

impl Timer for TokioTimer {
    type Handle = JoinHandle<()>;

    fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Option<Self::Handle> {
        Some(tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        }))
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}

fn payload() -> SubmissionPayload {
    let fields = FormFields {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "".to_string(),
        message: "Hi".to_string(),
    };
    SubmissionPayload::new(fields, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap())
}

#[tokio::test]
async fn test_posts_json_to_relay() {
    let (endpoint, received) = spawn_relay(StatusCode::OK).await;
    let mailer = HttpMailer::new(endpoint);

    mailer.send(&payload()).await.expect("relay should accept");

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        &json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "",
            "message": "Hi",
            "submissionTime": "2024-05-01T12:30:00.000Z",
        })
    );
}

#[tokio::test]
async fn test_relay_rejection() {
    let (endpoint, received) = spawn_relay(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mailer = HttpMailer::new(endpoint);

    let res = mailer.send(&payload()).await;
    assert_eq!(
        res,
        Err(ContactError::Rejected(StatusCode::INTERNAL_SERVER_ERROR))
    );
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_relay() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mailer = HttpMailer::new(format!("http://{addr}/send-email"));

    let res = mailer.send(&payload()).await;
    assert!(matches!(res, Err(ContactError::Transport(_))), "{res:?}");
}

#[tokio::test]
async fn test_contact_form_end_to_end() {
    let (endpoint, received) = spawn_relay(StatusCode::OK).await;

    LocalSet::new()
        .run_until(async move {
            let controller = ContactFormController::new(HttpMailer::new(endpoint), TokioTimer)
                .with_feedback_timeout(Duration::from_millis(100));
            controller.update_field(Field::Name, "Ada");
            controller.update_field(Field::Email, "ada@example.com");
            controller.update_field(Field::Subject, "");
            controller.update_field(Field::Message, "Hi");

            assert_eq!(controller.submit().await, Feedback::Success);
            assert_eq!(controller.fields(), FormFields::default());
            assert_eq!(received.lock().unwrap().len(), 1);

            tokio::time::sleep(Duration::from_millis(300)).await;
            assert_eq!(controller.feedback(), Feedback::Idle);
        })
        .await;
}

#[tokio::test]
async fn test_contact_form_relay_down() {
    let (endpoint, _received) = spawn_relay(StatusCode::BAD_GATEWAY).await;

    LocalSet::new()
        .run_until(async move {
            let controller = ContactFormController::new(HttpMailer::new(endpoint), TokioTimer)
                .with_feedback_timeout(Duration::from_millis(100));
            controller.update_field(Field::Name, "Ada");
            controller.update_field(Field::Email, "ada@example.com");
            controller.update_field(Field::Message, "Hi");

            assert_eq!(controller.submit().await, Feedback::Error);
            assert_eq!(controller.fields().message, "Hi");

            tokio::time::sleep(Duration::from_millis(300)).await;
            assert_eq!(controller.feedback(), Feedback::Idle);
        })
        .await;
}
