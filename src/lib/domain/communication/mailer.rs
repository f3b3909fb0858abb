//! Email service module

mod errors;
mod message;

#[cfg(test)]
use mockall::mock;

pub use errors::MailerError;
pub use message::{Body, Message, HTML_FALLBACK};

/// Email service
pub trait Mailer {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver, recipients included.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure. Delivery is attempted once.
    fn send_email(&self, message: &Message) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Mailer for Mailer {
        fn send_email(&self, message: &Message) -> Result<(), MailerError>;
    }
}
