/// Notification request and rendered message models
use crate::constants::*;
use serde::Serialize;
use std::fmt;

/// The supported account emails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Verification,
    PasswordReset,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verification => "verification",
            Self::PasswordReset => "password-reset",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            Self::Verification => VERIFICATION_SUBJECT,
            Self::PasswordReset => PASSWORD_RESET_SUBJECT,
        }
    }

    /// Frontend route that consumes the token
    pub fn action_path(&self) -> &'static str {
        match self {
            Self::Verification => VERIFY_EMAIL_PATH,
            Self::PasswordReset => RESET_PASSWORD_PATH,
        }
    }

    pub fn expiry_hours(&self) -> u32 {
        match self {
            Self::Verification => VERIFICATION_EXPIRY_HOURS,
            Self::PasswordReset => PASSWORD_RESET_EXPIRY_HOURS,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dispatch call's input. Never persisted.
#[derive(Clone)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub recipient: String,
    pub token: String,
    pub display_name: String,
}

impl NotificationRequest {
    pub fn new(
        kind: NotificationKind,
        recipient: impl Into<String>,
        token: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            recipient: recipient.into(),
            token: token.into(),
            display_name: display_name.into(),
        }
    }
}

// Tokens are single-use credentials and stay out of debug output
impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("kind", &self.kind)
            .field("recipient", &self.recipient)
            .field("token", &"[redacted]")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Output of the template renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    /// Absolute link embedded in both bodies
    pub action_url: String,
}
