//! Email message model

use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fmt;

use crate::mail::address::EmailAddress;
use crate::mail::error::AddressError;
use crate::mail::status::Status;

/// Sender or recipient given either as a raw string (parsed on
/// construction) or as an already-validated [`EmailAddress`].
#[derive(Debug, Clone)]
pub enum AddressInput {
    Raw(String),
    Parsed(EmailAddress),
}

impl AddressInput {
    fn resolve(self) -> Result<EmailAddress, AddressError> {
        match self {
            AddressInput::Raw(raw) => EmailAddress::parse(&raw),
            AddressInput::Parsed(addr) => Ok(addr),
        }
    }
}

impl From<&str> for AddressInput {
    fn from(raw: &str) -> Self {
        AddressInput::Raw(raw.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(raw: String) -> Self {
        AddressInput::Raw(raw)
    }
}

impl From<EmailAddress> for AddressInput {
    fn from(addr: EmailAddress) -> Self {
        AddressInput::Parsed(addr)
    }
}

/// Recipient list in any of the shapes [`Email::new`] accepts: absent,
/// a single address, or an ordered sequence.
#[derive(Debug, Clone, Default)]
pub enum RecipientInput {
    #[default]
    None,
    One(AddressInput),
    Many(Vec<AddressInput>),
}

impl RecipientInput {
    fn resolve(self) -> Result<Vec<EmailAddress>, AddressError> {
        match self {
            RecipientInput::None => Ok(Vec::new()),
            RecipientInput::One(input) => Ok(vec![input.resolve()?]),
            RecipientInput::Many(inputs) => {
                inputs.into_iter().map(AddressInput::resolve).collect()
            }
        }
    }
}

impl From<&str> for RecipientInput {
    fn from(raw: &str) -> Self {
        RecipientInput::One(raw.into())
    }
}

impl From<String> for RecipientInput {
    fn from(raw: String) -> Self {
        RecipientInput::One(raw.into())
    }
}

impl From<EmailAddress> for RecipientInput {
    fn from(addr: EmailAddress) -> Self {
        RecipientInput::One(addr.into())
    }
}

impl From<Vec<&str>> for RecipientInput {
    fn from(raws: Vec<&str>) -> Self {
        RecipientInput::Many(raws.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for RecipientInput {
    fn from(raws: &[&str]) -> Self {
        RecipientInput::Many(raws.iter().copied().map(Into::into).collect())
    }
}

impl From<Vec<String>> for RecipientInput {
    fn from(raws: Vec<String>) -> Self {
        RecipientInput::Many(raws.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<EmailAddress>> for RecipientInput {
    fn from(addrs: Vec<EmailAddress>) -> Self {
        RecipientInput::Many(addrs.into_iter().map(Into::into).collect())
    }
}

/// An email message, possibly with many recipients.
///
/// Messages are constructed as [`Status::Draft`] and must go through
/// [`Email::prepare`] before they count as ready. Preparation never
/// fails with an error; missing content is reported via
/// [`Status::Invalid`] and can be fixed and re-prepared.
#[derive(Debug, Clone)]
pub struct Email {
    pub subject: String,
    pub body: String,
    pub sender: EmailAddress,
    /// Recipients in the order they were supplied
    pub recipients: Vec<EmailAddress>,
    pub status: Status,
    /// Set on the per-recipient copies during a send, never on the
    /// original message
    pub date: Option<DateTime<Utc>>,
    /// Excerpt of the cleaned body, recomputed on every prepare
    pub short_body: String,
}

impl Email {
    /// Maximum excerpt length used by [`Email::prepare`]
    pub const SHORT_BODY_LEN: usize = 50;

    /// Create a draft message.
    ///
    /// Sender and recipients may be raw strings or pre-built
    /// [`EmailAddress`] values; recipients additionally accept a
    /// sequence or [`RecipientInput::None`]. Raw strings are parsed
    /// here, so an invalid address fails construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outbox::Email;
    ///
    /// let email = Email::new(
    ///     "Hello",
    ///     "A short note.",
    ///     "alice@example.com",
    ///     vec!["bob@example.net", "carol@example.ru"],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(email.recipients.len(), 2);
    /// ```
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        sender: impl Into<AddressInput>,
        recipients: impl Into<RecipientInput>,
    ) -> Result<Self, AddressError> {
        Ok(Self {
            subject: subject.into(),
            body: body.into(),
            sender: sender.into().resolve()?,
            recipients: recipients.into().resolve()?,
            status: Status::default(),
            date: None,
            short_body: String::new(),
        })
    }

    /// Collapse all whitespace runs (including tabs and newlines) to
    /// single spaces and trim the ends.
    pub fn clean_text(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Recompute [`Email::short_body`] from the current body.
    ///
    /// The body is cleaned first; if the cleaned text is longer than
    /// `max_len` characters it is cut there and `"..."` is appended,
    /// so the result may be up to `max_len + 3` characters.
    pub fn add_short_body(&mut self, max_len: usize) {
        let cleaned = Self::clean_text(&self.body);

        if cleaned.chars().count() <= max_len {
            self.short_body = cleaned;
        } else {
            let mut excerpt: String = cleaned.chars().take(max_len).collect();
            excerpt.push_str("...");
            self.short_body = excerpt;
        }
    }

    /// Clean the message up and decide whether it is ready to send.
    ///
    /// Subject and body are cleaned in place, the status moves to
    /// [`Status::Ready`] when subject, body and recipients are all
    /// present, otherwise to [`Status::Invalid`], and the short body
    /// is recomputed. Idempotent for unchanged fields.
    pub fn prepare(&mut self) {
        self.subject = Self::clean_text(&self.subject);
        self.body = Self::clean_text(&self.body);

        // Sender presence is guaranteed by construction.
        if !self.subject.is_empty() && !self.body.is_empty() && !self.recipients.is_empty() {
            self.status = Status::Ready;
        } else {
            self.status = Status::Invalid;
            warn!(
                "email from {} failed preparation: subject, body or recipients missing",
                self.sender.masked()
            );
        }

        self.add_short_body(Self::SHORT_BODY_LEN);

        debug!(
            "prepared email from {}: status={}",
            self.sender.masked(),
            self.status
        );
    }

    /// Whether the message is ready to send
    pub fn is_valid(&self) -> bool {
        self.status == Status::Ready
    }
}

impl fmt::Display for Email {
    /// Summary form; the sender is masked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipients = self
            .recipients
            .iter()
            .map(EmailAddress::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "To: {recipients}")?;
        writeln!(f, "From: {}", self.sender.masked())?;
        writeln!(f, "Subject: {}", self.subject)?;
        write!(f, "Status: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_raw_strings() {
        let email = Email::new("Hi", "Body", "a@x.com", "b@x.com").unwrap();

        assert_eq!(email.sender, "a@x.com");
        assert_eq!(email.recipients.len(), 1);
        assert_eq!(email.recipients[0], "b@x.com");
        assert_eq!(email.status, Status::Draft);
        assert_eq!(email.date, None);
        assert_eq!(email.short_body, "");
    }

    #[test]
    fn test_new_from_parsed_addresses() {
        let sender = EmailAddress::parse("a@x.com").unwrap();
        let recipient = EmailAddress::parse("b@x.com").unwrap();
        let email = Email::new("Hi", "Body", sender, recipient).unwrap();

        assert_eq!(email.recipients, vec![EmailAddress::parse("b@x.com").unwrap()]);
    }

    #[test]
    fn test_new_without_recipients() {
        let email = Email::new("Hi", "Body", "a@x.com", RecipientInput::None).unwrap();
        assert!(email.recipients.is_empty());
    }

    #[test]
    fn test_new_preserves_recipient_order() {
        let email = Email::new(
            "Hi",
            "Body",
            "a@x.com",
            vec!["c@x.com", "b@x.com", "d@x.com"],
        )
        .unwrap();

        let order: Vec<&str> = email.recipients.iter().map(EmailAddress::as_str).collect();
        assert_eq!(order, vec!["c@x.com", "b@x.com", "d@x.com"]);
    }

    #[test]
    fn test_new_propagates_address_errors() {
        assert!(Email::new("Hi", "Body", "not-an-address", "b@x.com").is_err());
        assert!(Email::new("Hi", "Body", "a@x.com", vec!["b@x.com", "bad"]).is_err());
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(Email::clean_text("a\tb\nc   d"), "a b c d");
        assert_eq!(Email::clean_text("  hello  world  "), "hello world");
        assert_eq!(Email::clean_text(""), "");
        assert_eq!(Email::clean_text(" \t\n "), "");
    }

    #[test]
    fn test_add_short_body_truncates() {
        let mut email = Email::new("Hi", "hello world", "a@x.com", "b@x.com").unwrap();

        email.add_short_body(5);
        assert_eq!(email.short_body, "hello...");
    }

    #[test]
    fn test_add_short_body_keeps_short_bodies_verbatim() {
        let mut email = Email::new("Hi", "hello", "a@x.com", "b@x.com").unwrap();

        email.add_short_body(5);
        assert_eq!(email.short_body, "hello");
    }

    #[test]
    fn test_add_short_body_zero_length() {
        let mut email = Email::new("Hi", "hello", "a@x.com", "b@x.com").unwrap();

        email.add_short_body(0);
        assert_eq!(email.short_body, "...");
    }

    #[test]
    fn test_prepare_ready() {
        let mut email = Email::new("Hi", "test message", "a@x.com", "b@x.com").unwrap();

        email.prepare();
        assert_eq!(email.status, Status::Ready);
        assert!(email.is_valid());
        assert_eq!(email.short_body, "test message");
    }

    #[test]
    fn test_prepare_cleans_fields() {
        let mut email =
            Email::new("  Hi\tthere ", "line one\nline two", "a@x.com", "b@x.com").unwrap();

        email.prepare();
        assert_eq!(email.subject, "Hi there");
        assert_eq!(email.body, "line one line two");
    }

    #[test]
    fn test_prepare_empty_subject_is_invalid() {
        let mut email = Email::new("   ", "Body", "a@x.com", "b@x.com").unwrap();

        email.prepare();
        assert_eq!(email.status, Status::Invalid);
        assert!(!email.is_valid());
    }

    #[test]
    fn test_prepare_no_recipients_is_invalid() {
        let mut email = Email::new("Hi", "Body", "a@x.com", RecipientInput::None).unwrap();

        email.prepare();
        assert_eq!(email.status, Status::Invalid);
    }

    #[test]
    fn test_prepare_recovers_after_fix() {
        let mut email = Email::new("", "Body", "a@x.com", "b@x.com").unwrap();

        email.prepare();
        assert_eq!(email.status, Status::Invalid);

        email.subject = "Fixed".to_string();
        email.prepare();
        assert_eq!(email.status, Status::Ready);
    }

    #[test]
    fn test_prepare_truncates_long_bodies() {
        let body = "word ".repeat(20);
        let mut email = Email::new("Hi", body, "a@x.com", "b@x.com").unwrap();

        email.prepare();
        assert_eq!(email.short_body.chars().count(), Email::SHORT_BODY_LEN + 3);
        assert!(email.short_body.ends_with("..."));
    }

    #[test]
    fn test_display_masks_sender() {
        let mut email = Email::new("Hi", "Body", "alice@example.com", "b@x.com").unwrap();
        email.prepare();

        let shown = email.to_string();
        assert!(shown.contains("From: al***@example.com"));
        assert!(shown.contains("To: b@x.com"));
        assert!(shown.contains("Status: ready"));
        assert!(!shown.contains("alice@example.com"));
    }
}
