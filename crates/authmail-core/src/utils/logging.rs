/// Logging helpers that keep secrets and PII out of log output

/// Masks a secret for logging, keeping a short prefix for identification
///
/// # Examples
/// ```
/// use authmail_core::utils::logging::mask_secret;
///
/// assert_eq!(mask_secret("SG.abcdefghijkl"), "SG.***");
/// assert_eq!(mask_secret("short"), "***");
/// ```
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE_PREFIX: usize = 3;
    const MIN_LENGTH_TO_SHOW_PREFIX: usize = 12;

    if secret.chars().count() < MIN_LENGTH_TO_SHOW_PREFIX {
        "***".to_string()
    } else {
        let prefix: String = secret.chars().take(VISIBLE_PREFIX).collect();
        format!("{}***", prefix)
    }
}

/// Redacts the local part of an email address, preserving the domain
///
/// # Examples
/// ```
/// use authmail_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("invalid"), "***");
/// ```
pub fn redact_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => format!("***@{}", domain),
        _ => "***".to_string(),
    }
}
