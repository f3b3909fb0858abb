//! Email addresses, messages and the mailer seam

pub mod dispatcher;
pub mod email_addresses;
pub mod mailer;
