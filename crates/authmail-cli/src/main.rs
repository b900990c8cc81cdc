use anyhow::{Context, Result};
use authmail_core::{MailEnv, Mailer, NotificationKind, NotificationRequest};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Send one account email using the transport configured in the environment
#[derive(Parser, Debug)]
#[command(name = "authmail", author, version, about, long_about = None)]
struct Args {
    /// Which account email to send
    #[arg(value_enum)]
    kind: KindArg,

    /// Recipient address
    email: String,

    /// Name used in the greeting
    first_name: String,

    /// Token embedded in the link (a random one is generated when omitted)
    token: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Verification,
    PasswordReset,
}

impl From<KindArg> for NotificationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Verification => Self::Verification,
            KindArg::PasswordReset => Self::PasswordReset,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with code 2
    let args = Args::parse();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(args: Args) -> Result<bool> {
    info!(version = authmail_core::VERSION, "Starting authmail");

    // The environment is read and the transport resolved exactly once, here
    let mailer = Mailer::init(&MailEnv::from_env()).context("Failed to initialize mailer")?;

    let token = args
        .token
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
    let request = NotificationRequest::new(args.kind.into(), args.email, token, args.first_name);

    Ok(mailer.dispatch(&request).await.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["authmail", "verification", "u@x.com", "Ann"]).unwrap();
        assert_eq!(args.kind, KindArg::Verification);
        assert_eq!(args.email, "u@x.com");
        assert_eq!(args.first_name, "Ann");
        assert!(args.token.is_none());

        let args =
            Args::try_parse_from(["authmail", "password-reset", "u@x.com", "Ann", "tok"]).unwrap();
        assert_eq!(NotificationKind::from(args.kind), NotificationKind::PasswordReset);
        assert_eq!(args.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_parse_args_errors() {
        let err = Args::try_parse_from(["authmail"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);

        let err = Args::try_parse_from(["authmail", "verification", "u@x.com"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Args::try_parse_from(["authmail", "welcome", "u@x.com", "Ann"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.exit_code(), 2);

        let err = Args::try_parse_from(["authmail", "verification", "u@x.com", "Ann", "t", "extra"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
