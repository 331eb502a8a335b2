use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::error::MailError;
use crate::email::types::{OutboundMessage, SmtpConfig};

/// The outbound mail capability. The submission service talks to this
/// trait so tests can substitute a recording transport.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
    let email = build_message(message)?;

    tracing::debug!("Sending message via {}:{}", self.smtp_config.host, self.smtp_config.port);

    self
      .transporter
      .send(email)
      .await
      .map(|_| ())
      .map_err(|e| classify_smtp_error(&e))
  }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
  address
    .parse()
    .map_err(|e| MailError::BadMessage(format!("invalid address {:?}: {}", address, e)))
}

fn build_message(message: &OutboundMessage) -> Result<Message, MailError> {
  let builder = Message::builder()
    .from(parse_mailbox(&message.from)?)
    .to(parse_mailbox(&message.to)?)
    .reply_to(parse_mailbox(&message.reply_to)?)
    .subject(message.subject.clone());

  let html = SinglePart::html(message.html_body.clone());

  let email = if message.attachments.is_empty() {
    builder.singlepart(html)
  } else {
    let mut multipart = MultiPart::mixed().singlepart(html);
    for attachment in &message.attachments {
      let content_type = ContentType::parse(&attachment.content_type)
        .map_err(|e| MailError::BadMessage(format!("invalid content type: {}", e)))?;
      multipart =
        multipart.singlepart(Attachment::new(attachment.filename.clone()).body(attachment.content.clone(), content_type));
    }
    builder.multipart(multipart)
  };

  email.map_err(|e| MailError::BadMessage(e.to_string()))
}

fn classify_smtp_error(err: &lettre::transport::smtp::Error) -> MailError {
  // 535 is the relay rejecting the configured credentials.
  if let Some(code) = err.status() {
    if code.to_string() == "535" {
      return MailError::Authentication;
    }
  }

  if err.is_timeout() {
    return MailError::Connection;
  }

  let mut source = std::error::Error::source(err);
  while let Some(inner) = source {
    if inner.is::<std::io::Error>() {
      return MailError::Connection;
    }
    source = inner.source();
  }

  MailError::Other(err.to_string())
}
