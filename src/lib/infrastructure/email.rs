//! Email composition and SMTP delivery via lettre

pub mod compose;
pub mod smtp;
