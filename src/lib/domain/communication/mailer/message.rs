//! Email message

use std::path::PathBuf;

use crate::domain::communication::email_addresses::EmailAddress;

/// Plain-text part sent alongside an HTML body
pub const HTML_FALLBACK: &str = "Please use an HTML-capable email client to view this message.";

/// The body of an email, kept as the raw bytes that were read
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// A `text/plain` body
    Plain(Vec<u8>),

    /// A `text/html` body, sent as an alternative to [`HTML_FALLBACK`]
    Html(Vec<u8>),
}

impl Body {
    /// Whether the body is HTML
    pub fn is_html(&self) -> bool {
        matches!(self, Body::Html(_))
    }
}

/// Email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The sender of the email
    pub from: EmailAddress,

    /// The primary recipients
    pub to: Vec<EmailAddress>,

    /// Carbon copy recipients
    pub cc: Vec<EmailAddress>,

    /// Blind carbon copy recipients, never written as a header
    pub bcc: Vec<EmailAddress>,

    /// The subject of the email
    pub subject: String,

    /// The body of the email
    pub body: Body,

    /// Files to attach, in order
    pub attachments: Vec<PathBuf>,
}

impl Message {
    /// Total number of envelope recipients
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}
