/// Dispatcher - renders account emails and sends or echoes them
///
/// Every dispatch ends in a boolean for the caller. Template, composition and
/// transport failures are logged and contained here; the token never reaches
/// the log on the live path. The echo path records the action link without
/// rendering the bodies.
use crate::constants::{LOG_TARGET_DELIVERY, LOG_TARGET_ECHO};
use crate::email::composer::{compose, parse_mailbox};
use crate::email::templates::TemplateRenderer;
use crate::error::MailError;
use crate::models::{MailEnv, NotificationKind, NotificationRequest};
use crate::services::resolver::{EchoReason, resolve};
use crate::services::transport::TransportHandle;
use crate::utils::logging::redact_email;
use serde::Serialize;
use tracing::{error, info};

/// Internal outcome of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Echoed(EchoReason),
    Failed,
}

impl Delivery {
    /// Echoed emails count as delivered: the echo path is a mode, not a failure
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Record written to the log when an email is echoed instead of sent
#[derive(Serialize)]
struct EchoRecord<'a> {
    reason: EchoReason,
    kind: NotificationKind,
    to: &'a str,
    subject: &'a str,
    action_url: &'a str,
}

/// Account email dispatcher.
///
/// Build it once at startup with [`Mailer::init`] and share it (e.g. behind an
/// `Arc`); it holds no mutable state.
#[derive(Debug, Clone)]
pub struct Mailer {
    handle: TransportHandle,
    renderer: TemplateRenderer,
}

impl Mailer {
    /// Resolves the transport from `env` and builds the mailer
    pub fn init(env: &MailEnv) -> Result<Self, MailError> {
        let renderer = TemplateRenderer::from_env(env)?;
        let handle = TransportHandle::init(&resolve(env))?;

        if handle.is_live() {
            parse_mailbox(renderer.sender())
                .map_err(|e| MailError::Config(format!("Invalid EMAIL_FROM: {}", e)))?;
        }

        Ok(Self::new(handle, renderer))
    }

    pub fn new(handle: TransportHandle, renderer: TemplateRenderer) -> Self {
        Self { handle, renderer }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_live()
    }

    pub fn handle(&self) -> &TransportHandle {
        &self.handle
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Sends the email verification link
    pub async fn send_verification(&self, email: &str, token: &str, first_name: &str) -> bool {
        let request = NotificationRequest::new(NotificationKind::Verification, email, token, first_name);
        self.dispatch(&request).await.is_success()
    }

    /// Sends the password reset link
    pub async fn send_password_reset(&self, email: &str, token: &str, first_name: &str) -> bool {
        let request =
            NotificationRequest::new(NotificationKind::PasswordReset, email, token, first_name);
        self.dispatch(&request).await.is_success()
    }

    pub async fn dispatch(&self, request: &NotificationRequest) -> Delivery {
        if let Some(reason) = self.handle.echo_reason() {
            let action_url = self.renderer.action_url(request.kind, &request.token);
            echo(reason, request, &action_url);
            return Delivery::Echoed(reason);
        }

        match self.deliver(request).await {
            Ok(()) => {
                info!(
                    target: LOG_TARGET_DELIVERY,
                    kind = %request.kind,
                    to = %redact_email(&request.recipient),
                    "Email sent"
                );
                Delivery::Sent
            }
            Err(e) => {
                error!(
                    target: LOG_TARGET_DELIVERY,
                    kind = %request.kind,
                    recipient = %request.recipient,
                    error_kind = e.kind(),
                    error = %e,
                    "Failed to send email"
                );
                Delivery::Failed
            }
        }
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), MailError> {
        let message = self.renderer.render(
            request.kind,
            &request.recipient,
            &request.token,
            &request.display_name,
        )?;
        let email = compose(&message)?;
        self.handle.send_raw(email).await
    }
}

fn echo(reason: EchoReason, request: &NotificationRequest, action_url: &str) {
    let record = EchoRecord {
        reason,
        kind: request.kind,
        to: &request.recipient,
        subject: request.kind.subject(),
        action_url,
    };

    match serde_json::to_string(&record) {
        Ok(json) => info!(target: LOG_TARGET_ECHO, "Email not sent ({}): {}", reason, json),
        Err(_) => info!(
            target: LOG_TARGET_ECHO,
            "Email not sent ({}): {} email to {}, link: {}",
            reason,
            request.kind,
            request.recipient,
            action_url
        ),
    }
}
