/// Template renderer for account emails
///
/// Paired `.html` / `.txt` templates are embedded with `include_str!` and
/// rendered with tera. Both bodies receive the same action URL and expiry
/// sentence, so the two representations never disagree. HTML templates are
/// autoescaped; the action URL is marked safe because [`TemplateRenderer::new`]
/// only accepts base URLs without HTML-special characters and the token is
/// form-urlencoded.
use crate::constants::{
    API_PATH_SUFFIX, DEFAULT_APP_NAME, DEFAULT_EMAIL_FROM, DEFAULT_FRONTEND_URL,
};
use crate::error::MailError;
use crate::models::{MailEnv, NotificationKind, RenderedMessage};
use crate::utils::sanitization::{encode_query_value, trim_base_url};
use chrono::Datelike;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 4] = [
    ("verification.html", include_str!("../../templates/verification.html")),
    ("verification.txt", include_str!("../../templates/verification.txt")),
    ("password_reset.html", include_str!("../../templates/password_reset.html")),
    ("password_reset.txt", include_str!("../../templates/password_reset.txt")),
];

/// Characters that would need escaping inside an HTML attribute
const HTML_SPECIAL_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Expiry sentence shared by both bodies
pub fn expiry_statement(hours: u32) -> String {
    if hours == 1 {
        "This link will expire in 1 hour.".to_string()
    } else {
        format!("This link will expire in {} hours.", hours)
    }
}

/// Resolves the frontend base URL.
///
/// Order: `FRONTEND_URL`, then `API_URL` with its `/api` suffix removed,
/// then the local default.
pub fn resolve_base_url(env: &MailEnv) -> String {
    if let Some(url) = &env.frontend_url {
        return trim_base_url(url).to_string();
    }

    if let Some(api_url) = &env.api_url {
        let trimmed = trim_base_url(api_url);
        let base = trimmed.strip_suffix(API_PATH_SUFFIX).unwrap_or(trimmed);
        return trim_base_url(base).to_string();
    }

    DEFAULT_FRONTEND_URL.to_string()
}

fn template_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Verification => "verification",
        NotificationKind::PasswordReset => "password_reset",
    }
}

fn greeting(display_name: &str) -> String {
    let name = display_name.trim();
    if name.is_empty() {
        "Hi there,".to_string()
    } else {
        format!("Hi {},", name)
    }
}

/// Renders account emails for a fixed base URL and sender
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    engine: Tera,
    base_url: String,
    from: String,
    app_name: String,
}

impl TemplateRenderer {
    /// Registers the embedded templates.
    ///
    /// Fails with [`MailError::Config`] when the base URL contains `&`, `<`,
    /// `>`, `"` or `'`.
    pub fn new(
        base_url: impl AsRef<str>,
        from: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Result<Self, MailError> {
        Self::with_templates(base_url, from, app_name, &TEMPLATES)
    }

    pub(crate) fn with_templates(
        base_url: impl AsRef<str>,
        from: impl Into<String>,
        app_name: impl Into<String>,
        templates: &[(&str, &str)],
    ) -> Result<Self, MailError> {
        let base_url = trim_base_url(base_url.as_ref());
        if base_url.contains(HTML_SPECIAL_CHARS) {
            return Err(MailError::Config(format!(
                "Base URL must not contain HTML-special characters: {}",
                base_url
            )));
        }

        let mut engine = Tera::default();
        engine
            .add_raw_templates(templates.iter().copied())?;

        Ok(Self {
            engine,
            base_url: base_url.to_string(),
            from: from.into(),
            app_name: app_name.into(),
        })
    }

    pub fn from_env(env: &MailEnv) -> Result<Self, MailError> {
        Self::new(
            resolve_base_url(env),
            env.email_from.as_deref().unwrap_or(DEFAULT_EMAIL_FROM),
            env.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sender identity placed in the `From` header
    pub fn sender(&self) -> &str {
        &self.from
    }

    /// Absolute link the recipient follows, with the token query-encoded
    pub fn action_url(&self, kind: NotificationKind, token: &str) -> String {
        format!(
            "{}{}?token={}",
            self.base_url,
            kind.action_path(),
            encode_query_value(token)
        )
    }

    pub fn render(
        &self,
        kind: NotificationKind,
        recipient: &str,
        token: &str,
        display_name: &str,
    ) -> Result<RenderedMessage, MailError> {
        let action_url = self.action_url(kind, token);

        let mut context = Context::new();
        context.insert("subject", kind.subject());
        context.insert("greeting", &greeting(display_name));
        context.insert("app_name", &self.app_name);
        context.insert("action_url", &action_url);
        context.insert("expiry", &expiry_statement(kind.expiry_hours()));
        context.insert("year", &chrono::Utc::now().year());

        let name = template_name(kind);
        let html_body = self.engine.render(&format!("{name}.html"), &context)?;
        let text_body = self.engine.render(&format!("{name}.txt"), &context)?;

        Ok(RenderedMessage {
            from: self.from.clone(),
            to: recipient.to_string(),
            subject: kind.subject().to_string(),
            html_body,
            text_body,
            action_url,
        })
    }
}
