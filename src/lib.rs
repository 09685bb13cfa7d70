//! # Outbox
//!
//! Outbox is an in-memory model of the email message lifecycle.
//!
//! It covers address validation, message preparation, and a simulated
//! send that fans a multi-recipient message out into one copy per
//! recipient. There is no networking and no persistence; "delivery" is
//! object copying plus a status field.
//!
//! ## Quick Start
//!
//! ```rust
//! use outbox::{Email, EmailService, Status};
//!
//! // Addresses are validated on construction.
//! let mut email = Email::new(
//!     "Weekly update",
//!     "Everything is\n\ton  track.",
//!     "alice@example.com",
//!     vec!["bob@example.net", "carol@example.ru"],
//! )
//! .unwrap();
//!
//! // Preparation cleans the text and checks readiness.
//! email.prepare();
//! assert_eq!(email.status, Status::Ready);
//! assert_eq!(email.body, "Everything is on track.");
//!
//! // Sending yields one independent copy per recipient.
//! let sent = EmailService::send_email(&email);
//! assert_eq!(sent.len(), 2);
//! assert!(sent.iter().all(|copy| copy.status == Status::Sent));
//! ```
//!
//! ## Lifecycle
//!
//! A message starts as `Draft`. [`Email::prepare`] moves it to `Ready`
//! when subject, body and recipients are all present, or to `Invalid`
//! otherwise; invalidity is a status, never an error, so callers can
//! fix the fields and prepare again. [`EmailService::send_email`]
//! tags each per-recipient copy `Sent` (message was ready) or
//! `Failed` (it was not), and always returns one copy per recipient.
//!
//! ## Notes
//!
//! - Runs in-memory only. No SMTP, no retries, no persistence.
//! - Accepted address suffixes are `.com`, `.ru` and `.net`.
//! - Addresses are lowercased and trimmed; display forms mask all but
//!   the first two characters of the login.

mod mail;

pub use mail::{AddressError, AddressInput, Email, EmailAddress, EmailService, RecipientInput, Status};
