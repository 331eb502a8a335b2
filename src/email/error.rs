use std::error::Error;

/// Transport failure classification surfaced to the submission handler.
///
/// Authentication and connection failures get dedicated user-facing
/// messages; everything else falls through to the generic failure path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailError {
  Authentication,
  Connection,
  BadMessage(String),
  Other(String),
}

impl Error for MailError {}

impl std::fmt::Display for MailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailError::Authentication => write!(f, "SMTP authentication rejected"),
      MailError::Connection => write!(f, "SMTP connection failed"),
      MailError::BadMessage(msg) => write!(f, "Failed to build message: {}", msg),
      MailError::Other(msg) => write!(f, "SMTP error: {}", msg),
    }
  }
}
