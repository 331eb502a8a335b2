//! Email relay functionality module
//!
//! This module provides the outbound mail capability using lettre,
//! a popular email library for Rust. Submissions are rendered into
//! an [`OutboundMessage`] and handed to a [`Mailer`] exactly once.

mod error;
mod service;
mod types;

pub use error::MailError;
pub use service::{EmailService, Mailer};
pub use types::{EmailAttachment, OutboundMessage, SmtpConfig};
