/// Transport resolver - picks exactly one mail transport from the environment
///
/// Sources are checked in a fixed order and the first complete one wins:
///
/// 1. explicit `SMTP_HOST` / `SMTP_USER` / `SMTP_PASS`
/// 2. `SENDGRID_API_KEY`
/// 3. `MAILGUN_API_KEY` + `MAILGUN_DOMAIN`
/// 4. development mode (echo)
///
/// Nothing is merged across sources, and a later source is never consulted
/// once an earlier one is complete.
use crate::constants::*;
use crate::models::{MailEnv, SmtpAuth, TransportConfig};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Why the mailer logs emails instead of sending them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoReason {
    /// Intentional local run
    DevMode,
    /// No complete credential source outside development mode
    Unconfigured,
}

impl fmt::Display for EchoReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DevMode => f.write_str("development mode"),
            Self::Unconfigured => f.write_str("no email transport configured"),
        }
    }
}

/// Credential source that produced a live config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    ExplicitSmtp,
    SendGrid,
    Mailgun,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitSmtp => f.write_str("smtp"),
            Self::SendGrid => f.write_str("sendgrid"),
            Self::Mailgun => f.write_str("mailgun"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Live {
        source: CredentialSource,
        config: TransportConfig,
    },
    Echo(EchoReason),
}

type SourceBuilder = fn(&MailEnv) -> Option<TransportConfig>;

/// Precedence order. Do not reorder: it decides which relay a deployment uses.
const SOURCES: [(CredentialSource, SourceBuilder); 3] = [
    (CredentialSource::ExplicitSmtp, explicit_smtp),
    (CredentialSource::SendGrid, sendgrid),
    (CredentialSource::Mailgun, mailgun),
];

/// Resolves the transport for this process
pub fn resolve(env: &MailEnv) -> Resolution {
    for (source, build) in SOURCES {
        if let Some(config) = build(env) {
            info!(
                source = %source,
                host = %config.host(),
                port = config.port(),
                secure = config.secure(),
                service = config.service().unwrap_or("-"),
                "Email transport configured"
            );
            return Resolution::Live { source, config };
        }
    }

    if env.is_development() {
        info!("Development mode: emails will be logged instead of sent");
        return Resolution::Echo(EchoReason::DevMode);
    }

    warn!("No email transport configured: email delivery is disabled, emails will only be logged");
    Resolution::Echo(EchoReason::Unconfigured)
}

fn explicit_smtp(env: &MailEnv) -> Option<TransportConfig> {
    let (Some(host), Some(user), Some(pass)) = (&env.smtp_host, &env.smtp_user, &env.smtp_pass)
    else {
        if env.smtp_host.is_some() {
            debug!("SMTP_HOST is set without SMTP_USER/SMTP_PASS, skipping explicit SMTP");
        }
        return None;
    };

    Some(TransportConfig::host_based(
        host.clone(),
        parse_port(env.smtp_port.as_deref()),
        parse_flag(env.smtp_secure.as_deref()),
        Some(SmtpAuth::new(user.clone(), pass.clone())),
    ))
}

fn sendgrid(env: &MailEnv) -> Option<TransportConfig> {
    let key = env.sendgrid_api_key.as_ref()?;

    Some(TransportConfig::service_based(
        SENDGRID_SERVICE,
        SENDGRID_SMTP_HOST,
        SENDGRID_SMTP_PORT,
        false,
        Some(SmtpAuth::new(SENDGRID_SMTP_USER, key.clone())),
    ))
}

fn mailgun(env: &MailEnv) -> Option<TransportConfig> {
    let (Some(key), Some(domain)) = (&env.mailgun_api_key, &env.mailgun_domain) else {
        if env.mailgun_api_key.is_some() {
            debug!("MAILGUN_API_KEY is set without MAILGUN_DOMAIN, skipping Mailgun");
        }
        return None;
    };

    let login = env
        .mailgun_smtp_login
        .clone()
        .unwrap_or_else(|| format!("{}@{}", MAILGUN_DEFAULT_LOGIN_LOCAL_PART, domain));

    Some(TransportConfig::host_based(
        MAILGUN_SMTP_HOST,
        MAILGUN_SMTP_PORT,
        false,
        Some(SmtpAuth::new(login, key.clone())),
    ))
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        None => DEFAULT_SMTP_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(
                port = raw,
                default_port = DEFAULT_SMTP_PORT,
                "Invalid SMTP_PORT, using default"
            );
            DEFAULT_SMTP_PORT
        }),
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}
