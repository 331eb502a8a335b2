pub mod error;

use crate::email::SmtpConfig;

/// Reads the SMTP relay configuration from the environment.
///
/// Every variable has a documented placeholder default so the server can
/// start without configuration; sends against the placeholders will fail at
/// the relay.
pub fn load_smtp_config() -> SmtpConfig {
  use std::env;

  let username = env::var("SMTP_USERNAME").unwrap_or_else(|_| "your-email@gmail.com".to_string());

  SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
    port: env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .unwrap_or(587),
    password: env::var("SMTP_PASSWORD").unwrap_or_else(|_| "your-16-char-app-password".to_string()),
    from_email: env::var("SMTP_FROM_EMAIL").unwrap_or_else(|_| username.clone()),
    to_email: env::var("TO_EMAIL").unwrap_or_else(|_| "your-receiving-email@gmail.com".to_string()),
    username,
  }
}
