//! Interactive mail-composition element appended by the `message` command.

use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::error::{HacktermError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailLink {
    pub recipient: String,
    pub subject: String,
}

impl MailLink {
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }

    /// `mailto:` URL with the subject percent-encoded; spaces become `%20`, not `+`.
    pub fn mailto_url(&self) -> Result<Url> {
        let subject = byte_serialize(self.subject.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        Url::parse(&format!("mailto:{}?subject={subject}", self.recipient)).map_err(|source| {
            HacktermError::MailLink {
                recipient: self.recipient.clone(),
                source,
            }
        })
    }
}

/// Host capability that hands a mail link to the default composer.
pub trait MailComposer {
    fn compose(&mut self, link: &MailLink) -> std::io::Result<()>;
}
