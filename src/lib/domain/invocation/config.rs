//! Invocation config

use std::path::PathBuf;

use crate::domain::communication::email_addresses::EmailAddress;

use super::{Password, Server};

/// Unvalidated flag values, as handed over by the argument parser
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFlags {
    /// `--from`
    pub from: Option<String>,

    /// Positional recipients
    pub to: Vec<String>,

    /// `--cc`, repeatable
    pub cc: Vec<String>,

    /// `--bcc`, repeatable
    pub bcc: Vec<String>,

    /// `--subject`
    pub subject: Option<String>,

    /// `--message`; `None` or `-` means standard input
    pub message: Option<PathBuf>,

    /// `--attach`, repeatable
    pub attachments: Vec<PathBuf>,

    /// `--html`
    pub html: bool,

    /// `--user`
    pub username: Option<String>,

    /// `--pass`
    pub password: Option<String>,

    /// `--server`, as `HOST:PORT`
    pub server: String,
}

/// Validated parameters of one invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Sender address
    pub from: EmailAddress,

    /// Primary recipients, never empty
    pub to: Vec<EmailAddress>,

    /// Carbon copy recipients
    pub cc: Vec<EmailAddress>,

    /// Blind carbon copy recipients
    pub bcc: Vec<EmailAddress>,

    /// Subject line, possibly empty
    pub subject: String,

    /// Message body bytes
    pub message: Vec<u8>,

    /// Attachment paths, each openable when the config was built
    pub attachments: Vec<PathBuf>,

    /// Whether the body is HTML
    pub is_html: bool,

    /// SMTP username
    pub username: Option<String>,

    /// SMTP password
    pub password: Option<Password>,

    /// SMTP server
    pub server: Server,
}
