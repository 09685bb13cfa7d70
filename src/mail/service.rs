//! Simulated delivery by per-recipient fan-out

use chrono::Utc;
use log::{debug, warn};

use crate::mail::email::Email;
use crate::mail::status::Status;

/// Stateless delivery simulation.
///
/// "Sending" produces one independent copy of the message per
/// recipient, each carrying exactly that recipient, a send date, and a
/// terminal status. Nothing leaves the process.
pub struct EmailService;

impl EmailService {
    /// Fan a message out into one copy per recipient.
    ///
    /// The input is never mutated. If it is not already
    /// [`Status::Ready`], preparation runs on an internal clone; a
    /// message that still is not ready afterwards yields one
    /// [`Status::Failed`] copy per recipient rather than an error.
    /// Ready messages yield [`Status::Sent`] copies. With no
    /// recipients the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outbox::{Email, EmailService, Status};
    ///
    /// let email = Email::new(
    ///     "Hello",
    ///     "A short note.",
    ///     "alice@example.com",
    ///     vec!["bob@example.net", "carol@example.ru"],
    /// )
    /// .unwrap();
    ///
    /// let sent = EmailService::send_email(&email);
    /// assert_eq!(sent.len(), 2);
    /// assert!(sent.iter().all(|copy| copy.status == Status::Sent));
    /// ```
    pub fn send_email(email: &Email) -> Vec<Email> {
        let mut prepared = email.clone();
        if prepared.status != Status::Ready {
            prepared.prepare();
        }

        let delivered = if prepared.is_valid() {
            Status::Sent
        } else {
            warn!(
                "email from {} is not ready, marking copies as failed",
                prepared.sender.masked()
            );
            Status::Failed
        };

        let sent: Vec<Email> = prepared
            .recipients
            .iter()
            .map(|recipient| {
                let mut copy = prepared.clone();
                copy.recipients = vec![recipient.clone()];
                copy.date = Some(Utc::now());
                copy.status = delivered;
                copy
            })
            .collect();

        debug!(
            "sent email from {} to {} recipient(s) with status {delivered}",
            prepared.sender.masked(),
            sent.len()
        );

        sent
    }

    /// Send several messages, returning one result vector per input.
    pub fn send_batch(emails: &[Email]) -> Vec<Vec<Email>> {
        emails.iter().map(Self::send_email).collect()
    }
}
