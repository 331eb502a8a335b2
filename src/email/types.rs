use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
  pub to_email: String,
}

/// A fully composed email, built once per submission and discarded after
/// the send attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
  pub from: String,
  pub to: String,
  pub reply_to: String,
  pub subject: String,
  pub html_body: String,
  pub attachments: Vec<EmailAttachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAttachment {
  pub filename: String,
  pub content: Vec<u8>,
  pub content_type: String,
}
