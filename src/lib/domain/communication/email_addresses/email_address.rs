//! Email Address

use std::{fmt, str::FromStr};

use lettre::{address::AddressError, message::Mailbox};
use thiserror::Error;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is not a valid RFC 5322 mailbox
    #[error("email is invalid: {0}")]
    InvalidEmailAddress(AddressError),
}

/// An email address, optionally with a display name (`Alice <alice@example.com>`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress {
    raw: String,
    mailbox: Mailbox,
}

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmailAddress);
        }

        let mailbox = Mailbox::from_str(trimmed).map_err(InvalidEmailAddress)?;

        Ok(Self {
            raw: trimmed.to_string(),
            mailbox,
        })
    }

    /// The parsed mailbox
    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    /// The address as it was given
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
