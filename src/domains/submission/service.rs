use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use validator::Validate;

use super::model::{ArticleSubmission, ContactSubmission, SubmissionRequest, SubmissionResponse};
use super::template;
use crate::email::{EmailAttachment, MailError, Mailer, OutboundMessage};

pub const ARTICLE_SUCCESS_MESSAGE: &str = "✅ Article sent successfully! We'll review your submission.";
pub const CONTACT_SUCCESS_MESSAGE: &str = "✅ Message sent successfully! We'll get back to you soon.";

const ATTACHMENT_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug)]
pub enum SubmissionServiceError {
  MissingFields,
  Transport(MailError),
}

impl Error for SubmissionServiceError {}

impl std::fmt::Display for SubmissionServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SubmissionServiceError::MissingFields => write!(f, "Missing required fields"),
      SubmissionServiceError::Transport(err) => write!(f, "Transport error: {}", err),
    }
  }
}

impl From<MailError> for SubmissionServiceError {
  fn from(err: MailError) -> Self {
    SubmissionServiceError::Transport(err)
  }
}

#[async_trait]
pub trait SubmissionService: Send + Sync {
  async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionResponse, SubmissionServiceError>;
}

pub struct SubmissionServiceImpl {
  mailer: Arc<dyn Mailer>,
  from_email: String,
  to_email: String,
}

impl SubmissionServiceImpl {
  pub fn new(mailer: Arc<dyn Mailer>, from_email: String, to_email: String) -> Self {
    Self {
      mailer,
      from_email,
      to_email,
    }
  }

  fn article_message(&self, article: &ArticleSubmission) -> Result<OutboundMessage, SubmissionServiceError> {
    article
      .validate()
      .map_err(|_| SubmissionServiceError::MissingFields)?;

    let mut attachments = Vec::new();
    if let Some(attachment) = &article.attachment {
      if let (Some(filename), Some(payload)) = (&attachment.filename, &attachment.base64) {
        let content = BASE64_STANDARD
          .decode(payload)
          .map_err(|e| MailError::BadMessage(format!("invalid attachment payload: {}", e)))?;
        attachments.push(EmailAttachment {
          filename: filename.clone(),
          content,
          content_type: ATTACHMENT_CONTENT_TYPE.to_string(),
        });
      }
    }

    Ok(OutboundMessage {
      from: format!("ByteToBeacon Submissions <{}>", self.from_email),
      to: self.to_email.clone(),
      reply_to: article.author_email.clone(),
      subject: format!("[ByteToBeacon] New Article: {}", article.article_title),
      html_body: template::render_article_email(article),
      attachments,
    })
  }

  fn contact_message(&self, contact: &ContactSubmission) -> Result<OutboundMessage, SubmissionServiceError> {
    contact
      .validate()
      .map_err(|_| SubmissionServiceError::MissingFields)?;

    Ok(OutboundMessage {
      from: format!("ByteToBeacon Contact <{}>", self.from_email),
      to: self.to_email.clone(),
      reply_to: contact.email.clone(),
      subject: format!("[ByteToBeacon Contact] {}", contact.subject),
      html_body: template::render_contact_email(contact),
      attachments: Vec::new(),
    })
  }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
  async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionResponse, SubmissionServiceError> {
    let message = match &request {
      SubmissionRequest::Article(article) => self.article_message(article)?,
      SubmissionRequest::Contact(contact) => self.contact_message(contact)?,
    };

    self.mailer.send(&message).await.map_err(|e| {
      tracing::error!("Failed to relay {} submission: {}", request.kind(), e);
      SubmissionServiceError::Transport(e)
    })?;

    tracing::info!("Relayed {} submission to {}", request.kind(), self.to_email);

    let confirmation = match &request {
      SubmissionRequest::Article(_) => ARTICLE_SUCCESS_MESSAGE,
      SubmissionRequest::Contact(_) => CONTACT_SUCCESS_MESSAGE,
    };

    Ok(SubmissionResponse {
      success: true,
      message: confirmation.to_string(),
    })
  }
}
