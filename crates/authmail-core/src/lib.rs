/// Authmail Core - account email dispatch
///
/// Resolves one outbound mail transport from the environment, renders the
/// verification and password reset emails, and delivers them through the
/// live transport or echoes them to the log when no transport is configured.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::MailError;
pub use models::{MailEnv, NotificationKind, NotificationRequest, RenderedMessage, TransportConfig};
pub use services::{Delivery, EchoReason, MailTransport, Mailer, TransportHandle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
