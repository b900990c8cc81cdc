/// Transport resolution, transport handle and dispatch
pub mod dispatcher;
pub mod resolver;
pub mod transport;

// Re-export service types
pub use dispatcher::{Delivery, Mailer};
pub use resolver::{CredentialSource, EchoReason, Resolution, resolve};
pub use transport::{MailTransport, SmtpMailTransport, TransportHandle};
