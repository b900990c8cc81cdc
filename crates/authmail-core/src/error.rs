/// Error types for authmail
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Message composition error: {0}")]
    Compose(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl MailError {
    /// Short machine-readable label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Template(_) => "template",
            Self::Compose(_) => "compose",
            Self::Transport(_) => "transport",
        }
    }
}

impl From<tera::Error> for MailError {
    fn from(err: tera::Error) -> Self {
        Self::Template(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Compose(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
