/// Transport handle - the single live mail transport of the process
use crate::error::MailError;
use crate::models::TransportConfig;
use crate::services::resolver::{EchoReason, Resolution};
use async_trait::async_trait;
use lettre::message::Message;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::fmt;
use std::sync::Arc;

/// Sends one composed message to a relay
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send_raw(&self, message: Message) -> Result<(), MailError>;
}

/// SMTP transport built from a resolved [`TransportConfig`]
pub struct SmtpMailTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Builds the transport. No connection is opened until the first send.
    ///
    /// `secure` selects implicit TLS; otherwise STARTTLS is used when the
    /// relay offers it.
    pub fn from_config(config: &TransportConfig) -> Result<Self, MailError> {
        let tls_parameters = TlsParameters::new(config.host().to_string()).map_err(|e| {
            MailError::Config(format!(
                "Failed to build TLS parameters for {}: {}",
                config.host(),
                e
            ))
        })?;

        let tls = if config.secure() {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Opportunistic(tls_parameters)
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host())
            .port(config.port())
            .tls(tls);

        if let Some(auth) = config.auth() {
            builder = builder.credentials(Credentials::new(auth.user.clone(), auth.pass.clone()));
        }

        Ok(Self {
            inner: builder.build(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send_raw(&self, message: Message) -> Result<(), MailError> {
        self.inner.send(message).await?;
        Ok(())
    }
}

/// Process-wide delivery mode, fixed at startup
#[derive(Clone)]
pub enum TransportHandle {
    Live(Arc<dyn MailTransport>),
    Echo(EchoReason),
}

impl TransportHandle {
    /// Builds the handle from the resolver's outcome. Called once at startup.
    pub fn init(resolution: &Resolution) -> Result<Self, MailError> {
        match resolution {
            Resolution::Live { config, .. } => {
                let transport = SmtpMailTransport::from_config(config)?;
                Ok(Self::Live(Arc::new(transport)))
            }
            Resolution::Echo(reason) => Ok(Self::Echo(*reason)),
        }
    }

    /// Wraps an already-built transport
    pub fn live(transport: Arc<dyn MailTransport>) -> Self {
        Self::Live(transport)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn echo_reason(&self) -> Option<EchoReason> {
        match self {
            Self::Live(_) => None,
            Self::Echo(reason) => Some(*reason),
        }
    }

    pub async fn send_raw(&self, message: Message) -> Result<(), MailError> {
        match self {
            Self::Live(transport) => transport.send_raw(message).await,
            Self::Echo(reason) => Err(MailError::Transport(format!(
                "No live transport ({})",
                reason
            ))),
        }
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live(_) => f.write_str("TransportHandle::Live"),
            Self::Echo(reason) => f.debug_tuple("TransportHandle::Echo").field(reason).finish(),
        }
    }
}
