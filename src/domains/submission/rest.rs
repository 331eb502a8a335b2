use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::model::{SubmissionDecodeError, SubmissionRequest, SubmissionResponse};
use super::service::SubmissionServiceError;
use crate::email::MailError;
use crate::state::{AppState, SharedAppState};

const GENERIC_FAILURE_MESSAGE: &str = "Failed to send email";
const AUTH_FAILURE_MESSAGE: &str = "❌ Email authentication failed. Please check email settings.";
const CONNECTION_FAILURE_MESSAGE: &str = "❌ Connection failed. Please try again.";

pub fn submission_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/submissions",
    post(submit_handler)
      .options(preflight_handler)
      .fallback(method_not_allowed_handler),
  )
}

pub async fn submit_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<SubmissionResponse>, crate::AppError> {
  let request = SubmissionRequest::from_json(&body).map_err(map_decode_error)?;

  state
    .submit(request)
    .await
    .map(JsonResponse)
    .map_err(map_submission_service_error)
}

// The CORS layer answers true preflights itself; this keeps a plain OPTIONS
// (no preflight headers) at 200 as well.
async fn preflight_handler() -> &'static str {
  "OK"
}

async fn method_not_allowed_handler() -> crate::AppError {
  crate::AppError::method_not_allowed("Method not allowed")
}

fn map_decode_error(e: SubmissionDecodeError) -> crate::AppError {
  match e {
    SubmissionDecodeError::MalformedBody => {
      tracing::error!("Rejected submission with malformed JSON body");
      crate::AppError::internal_server_error(GENERIC_FAILURE_MESSAGE)
    }
    SubmissionDecodeError::InvalidType => crate::AppError::bad_request("Invalid submission type"),
    SubmissionDecodeError::MissingFields => crate::AppError::bad_request("Missing required fields"),
  }
}

fn map_submission_service_error(e: SubmissionServiceError) -> crate::AppError {
  match e {
    SubmissionServiceError::MissingFields => crate::AppError::bad_request("Missing required fields"),
    SubmissionServiceError::Transport(MailError::Authentication) => {
      crate::AppError::internal_server_error(AUTH_FAILURE_MESSAGE)
    }
    SubmissionServiceError::Transport(MailError::Connection) => {
      crate::AppError::internal_server_error(CONNECTION_FAILURE_MESSAGE)
    }
    SubmissionServiceError::Transport(_) => crate::AppError::internal_server_error(GENERIC_FAILURE_MESSAGE),
  }
}
