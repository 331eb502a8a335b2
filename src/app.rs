use axum::{
  http::{header, Method},
  response::Html,
  routing::get,
  Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{domains::submission::rest::submission_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE]);

  Router::new()
    .route("/", get(hello_world_handler))
    .nest("/api/v1", submission_routes())
    .layer(cors)
    .with_state(state)
}

pub async fn hello_world_handler() -> Html<String> {
  Html("<h1>ByteToBeacon Submission API</h1>".to_string())
}
