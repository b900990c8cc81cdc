/// Transport resolution precedence tests
#[path = "common/mod.rs"]
mod common;

use authmail_core::services::{CredentialSource, EchoReason, Resolution, resolve};
use authmail_core::{MailEnv, TransportConfig};

const EXPLICIT: [(&str, &str); 3] = [
    ("SMTP_HOST", "mail.x.com"),
    ("SMTP_USER", "a"),
    ("SMTP_PASS", "b"),
];
const SENDGRID: [(&str, &str); 1] = [("SENDGRID_API_KEY", "SG.key")];
const MAILGUN: [(&str, &str); 2] = [("MAILGUN_API_KEY", "mg-key"), ("MAILGUN_DOMAIN", "foo.com")];
const DEV: [(&str, &str); 1] = [("APP_ENV", "development")];

fn env_of(groups: &[&[(&'static str, &'static str)]]) -> MailEnv {
    MailEnv::from_pairs(groups.iter().flat_map(|g| g.iter().copied()))
}

fn live(resolution: Resolution) -> (CredentialSource, TransportConfig) {
    match resolution {
        Resolution::Live { source, config } => (source, config),
        other => panic!("expected live transport, got {:?}", other),
    }
}

#[test]
fn explicit_smtp_host_is_selected() {
    let (source, config) = live(resolve(&env_of(&[&EXPLICIT])));

    assert_eq!(source, CredentialSource::ExplicitSmtp);
    assert!(!config.is_service_based());
    assert_eq!(config.host(), "mail.x.com");
}

#[test]
fn sendgrid_key_yields_service_config() {
    let (source, config) = live(resolve(&env_of(&[&SENDGRID])));

    assert_eq!(source, CredentialSource::SendGrid);
    assert!(config.is_service_based());
    let auth = config.auth().expect("sendgrid config carries credentials");
    assert_eq!(auth.user, "apikey");
    assert_eq!(auth.pass, "SG.key");
}

#[test]
fn mailgun_principal_defaults_to_postmaster() {
    let (source, config) = live(resolve(&env_of(&[&MAILGUN])));

    assert_eq!(source, CredentialSource::Mailgun);
    let auth = config.auth().expect("mailgun config carries credentials");
    assert_eq!(auth.user, "postmaster@foo.com");
    assert_eq!(auth.pass, "mg-key");
}

#[test]
fn explicit_smtp_wins_over_every_other_source() {
    let combinations: [&[&[(&str, &str)]]; 4] = [
        &[&EXPLICIT, &SENDGRID],
        &[&EXPLICIT, &MAILGUN],
        &[&EXPLICIT, &SENDGRID, &MAILGUN],
        &[&EXPLICIT, &SENDGRID, &MAILGUN, &DEV],
    ];

    for groups in combinations {
        let (source, config) = live(resolve(&env_of(groups)));
        assert_eq!(source, CredentialSource::ExplicitSmtp);
        assert_eq!(config.host(), "mail.x.com");
    }
}

#[test]
fn sendgrid_wins_over_mailgun() {
    // Order of the groups in the input does not matter
    let orders: [&[&[(&str, &str)]]; 2] = [&[&SENDGRID, &MAILGUN], &[&MAILGUN, &SENDGRID]];

    for groups in orders {
        let (source, config) = live(resolve(&env_of(groups)));
        assert_eq!(source, CredentialSource::SendGrid);
        assert_eq!(config.host(), "smtp.sendgrid.net");
    }
}

#[test]
fn no_complete_source_without_dev_mode_is_unconfigured() {
    let partials: [&[(&str, &str)]; 4] = [
        &[],
        &[("SMTP_HOST", "mail.x.com"), ("SMTP_USER", "a")],
        &[("MAILGUN_API_KEY", "mg-key")],
        &[("MAILGUN_DOMAIN", "foo.com"), ("SMTP_PASS", "b")],
    ];

    for partial in partials {
        assert_eq!(
            resolve(&MailEnv::from_pairs(partial.iter().copied())),
            Resolution::Echo(EchoReason::Unconfigured)
        );
    }
}

#[test]
fn dev_mode_short_circuits_partial_sources() {
    let env = MailEnv::from_pairs([
        ("APP_ENV", "development"),
        ("SMTP_HOST", "mail.x.com"),
        ("MAILGUN_API_KEY", "mg-key"),
    ]);
    assert_eq!(resolve(&env), Resolution::Echo(EchoReason::DevMode));
}

#[test]
fn dev_and_unconfigured_log_differently() {
    let logs = common::LogCapture::default();
    let _guard = logs.install();

    resolve(&env_of(&[&DEV]));
    resolve(&MailEnv::default());

    let output = logs.contents();
    assert!(output.contains("emails will be logged instead of sent"));
    assert!(output.contains("email delivery is disabled"));
    assert!(output.contains("WARN"));
}

#[test]
fn resolution_logs_do_not_contain_secrets() {
    let logs = common::LogCapture::default();
    let _guard = logs.install();

    resolve(&env_of(&[&EXPLICIT]));
    resolve(&MailEnv::from_pairs([("SENDGRID_API_KEY", "SG.do-not-log-me")]));

    let output = logs.contents();
    assert!(output.contains("Email transport configured"));
    assert!(!output.contains("SG.do-not-log-me"));
}
