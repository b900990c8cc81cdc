/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Environment Variables
// ============================================================================
/// Explicit SMTP relay host
pub const ENV_SMTP_HOST: &str = "SMTP_HOST";

/// Explicit SMTP relay port
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";

/// Whether the explicit relay expects implicit TLS ("true" / "1")
pub const ENV_SMTP_SECURE: &str = "SMTP_SECURE";

pub const ENV_SMTP_USER: &str = "SMTP_USER";
pub const ENV_SMTP_PASS: &str = "SMTP_PASS";

pub const ENV_SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";

pub const ENV_MAILGUN_API_KEY: &str = "MAILGUN_API_KEY";
pub const ENV_MAILGUN_DOMAIN: &str = "MAILGUN_DOMAIN";
pub const ENV_MAILGUN_SMTP_LOGIN: &str = "MAILGUN_SMTP_LOGIN";

/// Process mode; `development` switches delivery to the echo path
pub const ENV_APP_ENV: &str = "APP_ENV";

pub const ENV_FRONTEND_URL: &str = "FRONTEND_URL";
pub const ENV_API_URL: &str = "API_URL";
pub const ENV_EMAIL_FROM: &str = "EMAIL_FROM";
pub const ENV_APP_NAME: &str = "APP_NAME";

// ============================================================================
// Relay Presets
// ============================================================================

/// Default submission port when `SMTP_PORT` is not set
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Service identifier for the SendGrid preset
pub const SENDGRID_SERVICE: &str = "sendgrid";
pub const SENDGRID_SMTP_HOST: &str = "smtp.sendgrid.net";
pub const SENDGRID_SMTP_PORT: u16 = 587;

/// SendGrid authenticates every API key with this fixed user name
pub const SENDGRID_SMTP_USER: &str = "apikey";

pub const MAILGUN_SMTP_HOST: &str = "smtp.mailgun.org";
pub const MAILGUN_SMTP_PORT: u16 = 587;

/// Local part of the default Mailgun login (`postmaster@<domain>`)
pub const MAILGUN_DEFAULT_LOGIN_LOCAL_PART: &str = "postmaster";

// ============================================================================
// Rendering Defaults
// ============================================================================

/// Value of `APP_ENV` that enables development mode
pub const DEVELOPMENT_MODE: &str = "development";

/// Suffix stripped from `API_URL` to derive the frontend URL
pub const API_PATH_SUFFIX: &str = "/api";

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

pub const DEFAULT_EMAIL_FROM: &str = "Accounts <no-reply@example.com>";

pub const DEFAULT_APP_NAME: &str = "Accounts";

/// Frontend route that consumes verification tokens
pub const VERIFY_EMAIL_PATH: &str = "/verify-email";

/// Frontend route that consumes password reset tokens
pub const RESET_PASSWORD_PATH: &str = "/reset-password";

/// Verification link lifetime in hours
pub const VERIFICATION_EXPIRY_HOURS: u32 = 24;

/// Password reset link lifetime in hours
pub const PASSWORD_RESET_EXPIRY_HOURS: u32 = 1;

pub const VERIFICATION_SUBJECT: &str = "Verify your email address";
pub const PASSWORD_RESET_SUBJECT: &str = "Reset your password";

// ============================================================================
// Logging
// ============================================================================

/// Log target for echoed (not sent) emails
pub const LOG_TARGET_ECHO: &str = "authmail::echo";

/// Log target for delivery outcomes
pub const LOG_TARGET_DELIVERY: &str = "authmail::delivery";

// ============================================================================
// Testing Constants
// ============================================================================

#[cfg(test)]
pub mod test_constants {
    /// Test recipient address
    pub const TEST_EMAIL: &str = "test@example.com";

    /// Test token
    pub const TEST_TOKEN: &str = "tok123";
}
