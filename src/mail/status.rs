//! Message lifecycle states

use std::fmt;

/// Lifecycle state of an [`Email`](crate::Email).
///
/// Messages start as `Draft`, move to `Ready` or `Invalid` when
/// prepared, and end as `Sent` or `Failed` on the per-recipient copies
/// produced by a send. `Invalid` is terminal only until the caller
/// fixes the fields and prepares again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Freshly constructed, not yet prepared
    #[default]
    Draft,
    /// Prepared and ready to send
    Ready,
    /// Delivered copy
    Sent,
    /// Copy produced from a message that was not ready
    Failed,
    /// Preparation found missing content
    Invalid,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Draft => "draft",
            Status::Ready => "ready",
            Status::Sent => "sent",
            Status::Failed => "failed",
            Status::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_draft() {
        assert_eq!(Status::default(), Status::Draft);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Status::Draft.to_string(), "draft");
        assert_eq!(Status::Ready.to_string(), "ready");
        assert_eq!(Status::Sent.to_string(), "sent");
        assert_eq!(Status::Failed.to_string(), "failed");
        assert_eq!(Status::Invalid.to_string(), "invalid");
    }
}
