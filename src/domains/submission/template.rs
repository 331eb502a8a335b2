//! Branded HTML bodies for the relayed submission emails.
//!
//! Field values embed verbatim, matching the forms on the static site.

use super::model::{ArticleSubmission, ContactSubmission};

pub fn render_article_email(article: &ArticleSubmission) -> String {
  let attachment_notice = match &article.attachment {
    Some(attachment) => format!(
      r#"
      <div style="background: #e7f3ff; border: 1px solid #b3d9ff; padding: 15px; border-radius: 8px; margin: 20px 0;">
        <p style="margin: 0; color: #0066cc;"><strong>📎 PDF Attachment:</strong> {filename}</p>
      </div>
      "#,
      filename = attachment.filename.as_deref().unwrap_or_default()
    ),
    None => String::new(),
  };

  format!(
    r#"
    <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
      <div style="background: #00ab6c; color: white; padding: 20px; text-align: center;">
        <h1 style="margin: 0; font-size: 24px;">📝 ByteToBeacon</h1>
        <p style="margin: 5px 0 0 0; opacity: 0.9;">New Article Submission</p>
      </div>

      <div style="padding: 30px;">
        <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px; border-left: 4px solid #00ab6c;">
          <h2 style="margin-top: 0; color: #333;">{title}</h2>
          <p style="margin: 10px 0 5px 0; color: #666;"><strong>👤 Author:</strong> {author}</p>
          <p style="margin: 5px 0; color: #666;"><strong>📧 Email:</strong> <a href="mailto:{email}" style="color: #00ab6c;">{email}</a></p>
        </div>

        <div style="margin: 20px 0;">
          <h3 style="color: #333; border-bottom: 2px solid #00ab6c; padding-bottom: 10px;">📖 Article Content</h3>
          <div style="background: #ffffff; border: 2px solid #e9ecef; padding: 20px; border-radius: 8px; white-space: pre-wrap; line-height: 1.6; color: #333;">{content}</div>
        </div>
        {attachment_notice}
        <div style="background: #f1f1f1; padding: 15px; border-radius: 8px; margin-top: 30px; text-align: center;">
          <p style="margin: 0; color: #666; font-size: 14px;">
            💡 <em>Reply to respond directly to {author}</em><br>
            🚀 <em>Powered by ByteToBeacon</em>
          </p>
        </div>
      </div>
    </div>
    "#,
    title = article.article_title,
    author = article.author_name,
    email = article.author_email,
    content = article.article_content,
    attachment_notice = attachment_notice,
  )
}

pub fn render_contact_email(contact: &ContactSubmission) -> String {
  format!(
    r#"
    <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
      <div style="background: #00ab6c; color: white; padding: 20px; text-align: center;">
        <h1 style="margin: 0; font-size: 24px;">📧 ByteToBeacon</h1>
        <p style="margin: 5px 0 0 0; opacity: 0.9;">Contact Form Message</p>
      </div>

      <div style="padding: 30px;">
        <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px; border-left: 4px solid #00ab6c;">
          <h2 style="margin-top: 0; color: #333;">{subject}</h2>
          <p style="margin: 10px 0 5px 0; color: #666;"><strong>👤 Name:</strong> {name}</p>
          <p style="margin: 5px 0; color: #666;"><strong>📧 Email:</strong> <a href="mailto:{email}" style="color: #00ab6c;">{email}</a></p>
        </div>

        <div style="margin: 20px 0;">
          <h3 style="color: #333; border-bottom: 2px solid #00ab6c; padding-bottom: 10px;">💬 Message</h3>
          <div style="background: #ffffff; border: 2px solid #e9ecef; padding: 20px; border-radius: 8px; white-space: pre-wrap; line-height: 1.6; color: #333;">{message}</div>
        </div>

        <div style="background: #f1f1f1; padding: 15px; border-radius: 8px; margin-top: 30px; text-align: center;">
          <p style="margin: 0; color: #666; font-size: 14px;">
            💡 <em>Reply to respond directly to {name}</em><br>
            🚀 <em>Powered by ByteToBeacon</em>
          </p>
        </div>
      </div>
    </div>
    "#,
    subject = contact.subject,
    name = contact.name,
    email = contact.email,
    message = contact.message,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domains::submission::model::AttachmentPayload;

  fn article() -> ArticleSubmission {
    ArticleSubmission {
      author_name: "Ann".to_string(),
      author_email: "a@x.com".to_string(),
      article_title: "Rust at the Edge".to_string(),
      article_content: "line one\n\nline two".to_string(),
      attachment: None,
    }
  }

  #[test]
  fn test_article_email_embeds_fields_verbatim() {
    let html = render_article_email(&article());

    assert!(html.contains("Rust at the Edge"));
    assert!(html.contains("Ann"));
    assert!(html.contains("mailto:a@x.com"));
    assert!(html.contains("line one\n\nline two"));
    assert!(!html.contains("PDF Attachment"));
  }

  #[test]
  fn test_article_email_attachment_notice() {
    let mut submission = article();
    submission.attachment = Some(AttachmentPayload {
      filename: Some("draft.pdf".to_string()),
      base64: Some("aGVsbG8=".to_string()),
    });

    let html = render_article_email(&submission);
    assert!(html.contains("PDF Attachment"));
    assert!(html.contains("draft.pdf"));
  }

  #[test]
  fn test_contact_email_embeds_fields_verbatim() {
    let contact = ContactSubmission {
      name: "Ann".to_string(),
      email: "a@x.com".to_string(),
      subject: "Hi".to_string(),
      message: "Hello there".to_string(),
    };

    let html = render_contact_email(&contact);
    assert!(html.contains("Hi"));
    assert!(html.contains("Ann"));
    assert!(html.contains("mailto:a@x.com"));
    assert!(html.contains("Hello there"));
  }
}
