/// Configuration models
use crate::constants::*;
use crate::utils::logging::mask_secret;
use std::collections::HashMap;
use std::fmt;

/// Snapshot of every environment input the mailer reads.
///
/// Captured once at startup. Blank values are treated as absent so that an
/// exported-but-empty variable never completes a credential source.
#[derive(Clone, Default)]
pub struct MailEnv {
    pub smtp_host: Option<String>,
    pub smtp_port: Option<String>,
    pub smtp_secure: Option<String>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub mailgun_api_key: Option<String>,
    pub mailgun_domain: Option<String>,
    pub mailgun_smtp_login: Option<String>,
    pub app_env: Option<String>,
    pub frontend_url: Option<String>,
    pub api_url: Option<String>,
    pub email_from: Option<String>,
    pub app_name: Option<String>,
}

impl MailEnv {
    /// Reads the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the snapshot from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            smtp_host: get(ENV_SMTP_HOST),
            smtp_port: get(ENV_SMTP_PORT),
            smtp_secure: get(ENV_SMTP_SECURE),
            smtp_user: get(ENV_SMTP_USER),
            smtp_pass: get(ENV_SMTP_PASS),
            sendgrid_api_key: get(ENV_SENDGRID_API_KEY),
            mailgun_api_key: get(ENV_MAILGUN_API_KEY),
            mailgun_domain: get(ENV_MAILGUN_DOMAIN),
            mailgun_smtp_login: get(ENV_MAILGUN_SMTP_LOGIN),
            app_env: get(ENV_APP_ENV),
            frontend_url: get(ENV_FRONTEND_URL),
            api_url: get(ENV_API_URL),
            email_from: get(ENV_EMAIL_FROM),
            app_name: get(ENV_APP_NAME),
        }
    }

    /// Builds the snapshot from `(name, value)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let map: HashMap<&str, &str> = pairs.into_iter().collect();
        Self::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    /// Whether the process runs in development mode
    pub fn is_development(&self) -> bool {
        self.app_env
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case(DEVELOPMENT_MODE))
    }
}

impl fmt::Debug for MailEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = |v: &Option<String>| v.as_deref().map(mask_secret);

        f.debug_struct("MailEnv")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_secure", &self.smtp_secure)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &masked(&self.smtp_pass))
            .field("sendgrid_api_key", &masked(&self.sendgrid_api_key))
            .field("mailgun_api_key", &masked(&self.mailgun_api_key))
            .field("mailgun_domain", &self.mailgun_domain)
            .field("mailgun_smtp_login", &self.mailgun_smtp_login)
            .field("app_env", &self.app_env)
            .field("frontend_url", &self.frontend_url)
            .field("api_url", &self.api_url)
            .field("email_from", &self.email_from)
            .field("app_name", &self.app_name)
            .finish()
    }
}

/// SMTP credential pair
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpAuth {
    pub user: String,
    pub pass: String,
}

impl SmtpAuth {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

impl fmt::Debug for SmtpAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpAuth")
            .field("user", &self.user)
            .field("pass", &mask_secret(&self.pass))
            .finish()
    }
}

/// Immutable description of how to reach a mail relay.
///
/// Service-based configs (a named preset relay) still carry the concrete
/// host and port of that preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    host: String,
    port: u16,
    secure: bool,
    service: Option<String>,
    auth: Option<SmtpAuth>,
}

impl TransportConfig {
    /// Config pointing at an explicit relay host
    pub fn host_based(host: impl Into<String>, port: u16, secure: bool, auth: Option<SmtpAuth>) -> Self {
        Self {
            host: host.into(),
            port,
            secure,
            service: None,
            auth,
        }
    }

    /// Config for a named preset relay
    pub fn service_based(
        service: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        secure: bool,
        auth: Option<SmtpAuth>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            secure,
            service: Some(service.into()),
            auth,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Implicit TLS on connect
    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn auth(&self) -> Option<&SmtpAuth> {
        self.auth.as_ref()
    }

    pub fn is_service_based(&self) -> bool {
        self.service.is_some()
    }
}
