use std::sync::Arc;

use crate::domains::submission::{
  model::{SubmissionRequest, SubmissionResponse},
  service::{SubmissionService, SubmissionServiceError, SubmissionServiceImpl},
};
use crate::email::Mailer;

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit(
    &self,
    request: SubmissionRequest,
  ) -> impl std::future::Future<Output = Result<SubmissionResponse, SubmissionServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub submission_service: Arc<SubmissionServiceImpl>,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>, from_email: String, to_email: String) -> Self {
    let submission_service = Arc::new(SubmissionServiceImpl::new(mailer, from_email, to_email));

    Self { submission_service }
  }
}

impl AppState for SharedAppState {
  async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionResponse, SubmissionServiceError> {
    self.submission_service.submit(request).await
  }
}
