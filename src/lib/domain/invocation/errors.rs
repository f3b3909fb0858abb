//! Error types for config resolution

use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

use crate::domain::communication::email_addresses::EmailAddressError;

/// Errors that can occur while resolving a [`Config`](super::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The current user could not be determined for the default sender
    #[error("could not determine the current user")]
    UnknownUser(#[source] io::Error),

    /// The hostname could not be determined for the default sender
    #[error("could not determine the hostname")]
    UnknownHostname(#[source] io::Error),

    /// A sender or recipient address failed to parse
    #[error("Error parsing email address {address} - {reason}")]
    InvalidAddress {
        /// The address as given
        address: String,

        /// Why it was rejected
        reason: EmailAddressError,
    },

    /// No primary recipient was given
    #[error("at least one recipient is required")]
    NoRecipients,

    /// The message body could not be read from standard input
    #[error("failed to read message from standard input")]
    ReadStdin(#[source] io::Error),

    /// The message body file could not be read
    #[error("failed to read message file {}", path.display())]
    ReadMessage {
        /// Path of the message file
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An attachment could not be opened
    #[error("failed to open attachment {}", path.display())]
    OpenAttachment {
        /// Path of the attachment
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The server parameter is not `HOST:PORT`
    #[error("Invalid format of server parameter: {0}")]
    InvalidServer(String),

    /// The port in the server parameter is not a number
    #[error("Invalid port in server parameter {server} - {reason}")]
    InvalidPort {
        /// The server parameter as given
        server: String,

        /// Why the port was rejected
        reason: ParseIntError,
    },
}
