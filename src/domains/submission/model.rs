use serde::{Deserialize, Serialize};
use validator::Validate;

/// A form post from the static site, discriminated by the `type` field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubmissionRequest {
  Article(ArticleSubmission),
  Contact(ContactSubmission),
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSubmission {
  #[validate(length(min = 1))]
  pub author_name: String,
  #[validate(length(min = 1))]
  pub author_email: String,
  #[validate(length(min = 1))]
  pub article_title: String,
  #[validate(length(min = 1))]
  pub article_content: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attachment: Option<AttachmentPayload>,
}

/// Optional PDF upload accompanying an article. Both fields must be present
/// for the file to be attached; a partial payload still shows the notice
/// block in the email body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttachmentPayload {
  #[serde(default)]
  pub filename: Option<String>,
  #[serde(default)]
  pub base64: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
  #[validate(length(min = 1))]
  pub name: String,
  #[validate(length(min = 1))]
  pub email: String,
  #[validate(length(min = 1))]
  pub subject: String,
  #[validate(length(min = 1))]
  pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionResponse {
  pub success: bool,
  pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDecodeError {
  MalformedBody,
  InvalidType,
  MissingFields,
}

impl SubmissionRequest {
  /// Decodes a raw request body, failing closed: an unknown or missing
  /// `type` never partially populates a variant.
  pub fn from_json(body: &[u8]) -> Result<Self, SubmissionDecodeError> {
    let value: serde_json::Value =
      serde_json::from_slice(body).map_err(|_| SubmissionDecodeError::MalformedBody)?;

    let kind = value
      .get("type")
      .and_then(serde_json::Value::as_str)
      .map(str::to_owned);

    match kind.as_deref() {
      Some("article") => serde_json::from_value(value)
        .map(SubmissionRequest::Article)
        .map_err(|_| SubmissionDecodeError::MissingFields),
      Some("contact") => serde_json::from_value(value)
        .map(SubmissionRequest::Contact)
        .map_err(|_| SubmissionDecodeError::MissingFields),
      _ => Err(SubmissionDecodeError::InvalidType),
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      SubmissionRequest::Article(_) => "article",
      SubmissionRequest::Contact(_) => "contact",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_json_article() {
    let body = serde_json::json!({
      "type": "article",
      "authorName": "Ann",
      "authorEmail": "a@x.com",
      "articleTitle": "Title",
      "articleContent": "Content",
    });

    let request = SubmissionRequest::from_json(body.to_string().as_bytes()).expect("decode article");
    match request {
      SubmissionRequest::Article(article) => {
        assert_eq!(article.author_name, "Ann");
        assert_eq!(article.article_title, "Title");
        assert!(article.attachment.is_none());
      }
      other => panic!("expected article, got {:?}", other),
    }
  }

  #[test]
  fn test_from_json_contact() {
    let body = serde_json::json!({
      "type": "contact",
      "name": "Ann",
      "email": "a@x.com",
      "subject": "Hi",
      "message": "Hello there",
    });

    let request = SubmissionRequest::from_json(body.to_string().as_bytes()).expect("decode contact");
    assert_eq!(request.kind(), "contact");
  }

  #[test]
  fn test_from_json_unknown_type() {
    let body = serde_json::json!({ "type": "newsletter" });
    let result = SubmissionRequest::from_json(body.to_string().as_bytes());
    assert!(matches!(result, Err(SubmissionDecodeError::InvalidType)));
  }

  #[test]
  fn test_from_json_missing_type() {
    let body = serde_json::json!({ "name": "Ann" });
    let result = SubmissionRequest::from_json(body.to_string().as_bytes());
    assert!(matches!(result, Err(SubmissionDecodeError::InvalidType)));
  }

  #[test]
  fn test_from_json_missing_fields() {
    let body = serde_json::json!({ "type": "contact", "name": "Ann" });
    let result = SubmissionRequest::from_json(body.to_string().as_bytes());
    assert!(matches!(result, Err(SubmissionDecodeError::MissingFields)));
  }

  #[test]
  fn test_from_json_malformed_body() {
    let result = SubmissionRequest::from_json(b"{not json");
    assert!(matches!(result, Err(SubmissionDecodeError::MalformedBody)));
  }
}
