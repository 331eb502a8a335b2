use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{MailError, Mailer, OutboundMessage},
  state::SharedAppState,
};

/// In-memory transport that records every message and optionally fails
/// with a fixed classification.
pub struct MockMailer {
  sent: Mutex<Vec<OutboundMessage>>,
  failure: Option<MailError>,
}

impl MockMailer {
  pub fn new() -> Arc<Self> {
    Arc::new(Self {
      sent: Mutex::new(Vec::new()),
      failure: None,
    })
  }

  pub fn failing(failure: MailError) -> Arc<Self> {
    Arc::new(Self {
      sent: Mutex::new(Vec::new()),
      failure: Some(failure),
    })
  }

  pub fn sent_count(&self) -> usize {
    self.sent.lock().expect("lock mock mailer").len()
  }

  pub fn last_message(&self) -> Option<OutboundMessage> {
    self.sent.lock().expect("lock mock mailer").last().cloned()
  }
}

#[async_trait]
impl Mailer for MockMailer {
  async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
    if let Some(failure) = &self.failure {
      return Err(failure.clone());
    }

    self.sent.lock().expect("lock mock mailer").push(message.clone());
    Ok(())
  }
}

pub fn app_with_mailer(mailer: Arc<MockMailer>) -> Router {
  let state = SharedAppState::new(
    mailer,
    "noreply@bytetobeacon.test".to_string(),
    "inbox@bytetobeacon.test".to_string(),
  );
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn request(app: Router, method: Method, uri: &str, body: Option<Vec<u8>>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.map(Body::from).unwrap_or_else(Body::empty))
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
