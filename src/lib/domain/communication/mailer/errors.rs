//! Mailer errors

use std::{io, path::PathBuf};

use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// An attachment could not be read while composing the message
    #[error("failed to read attachment {}", path.display())]
    Attachment {
        /// Path of the attachment
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The message could not be assembled
    #[error("failed to compose message")]
    Compose(#[source] anyhow::Error),

    /// An error occurred while sending the email
    #[error("failed to send message via {server}")]
    SendError {
        /// The SMTP server, as `host:port`
        server: String,

        /// Underlying transport error
        #[source]
        source: anyhow::Error,
    },
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::Compose(err.into())
    }
}
