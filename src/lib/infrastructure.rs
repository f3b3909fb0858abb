//! Adapters for the command line, the host system and SMTP delivery

pub mod cli;
pub mod email;
pub mod system;
