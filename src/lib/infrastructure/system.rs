//! The real process environment

use std::io::{self, Read};

use crate::domain::invocation::Environment;

/// [`Environment`] backed by the operating system and the process' stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn username(&self) -> io::Result<String> {
        whoami::fallible::username()
    }

    fn hostname(&self) -> io::Result<String> {
        hostname::get()?.into_string().map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("hostname {:?} is not valid UTF-8", raw),
            )
        })
    }

    fn read_stdin(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;

        Ok(buf)
    }
}
