/// MIME composition using the lettre crate
use crate::error::MailError;
use crate::models::RenderedMessage;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message, MultiPart, SinglePart};

/// Parses a sender or recipient into a mailbox (`Name <addr>` or bare address)
pub fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::Compose(format!("Invalid mailbox '{}': {}", address, e)))
}

/// Builds a `multipart/alternative` message with the plain-text part first
pub fn compose(message: &RenderedMessage) -> Result<Message, MailError> {
    let email = Message::builder()
        .from(parse_mailbox(&message.from)?)
        .to(parse_mailbox(&message.to)?)
        .subject(&message.subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(message.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(message.html_body.clone()),
                ),
        )?;

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(to: &str) -> RenderedMessage {
        RenderedMessage {
            from: "Acme <no-reply@acme.com>".to_string(),
            to: to.to_string(),
            subject: "Verify your email address".to_string(),
            html_body: "<p>Hi</p>".to_string(),
            text_body: "Hi".to_string(),
            action_url: "https://app.acme.com/verify-email?token=t".to_string(),
        }
    }

    #[test]
    fn test_compose_multipart() {
        let email = compose(&rendered("ann@example.com")).unwrap();
        let raw = String::from_utf8(email.formatted()).unwrap();

        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
        assert!(raw.contains("To: ann@example.com"));
        assert!(raw.contains("Subject: Verify your email address"));
    }

    #[test]
    fn test_compose_invalid_recipient() {
        let err = compose(&rendered("not an address")).unwrap_err();
        assert!(matches!(err, MailError::Compose(_)));
    }

    #[test]
    fn test_parse_mailbox_with_name() {
        let mailbox = parse_mailbox("Acme <no-reply@acme.com>").unwrap();
        assert_eq!(mailbox.name.as_deref(), Some("Acme"));
        assert_eq!(mailbox.email.to_string(), "no-reply@acme.com");
    }
}
