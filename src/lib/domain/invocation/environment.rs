//! Process environment the resolver depends on

use std::io;

#[cfg(test)]
use mockall::mock;

/// Facts about the running process used to fill in defaults
pub trait Environment {
    /// The login name of the current user
    fn username(&self) -> io::Result<String>;

    /// The hostname of this machine
    fn hostname(&self) -> io::Result<String>;

    /// Read standard input to the end
    fn read_stdin(&self) -> io::Result<Vec<u8>>;
}

#[cfg(test)]
mock! {
    pub Environment {}

    impl Environment for Environment {
        fn username(&self) -> io::Result<String>;
        fn hostname(&self) -> io::Result<String>;
        fn read_stdin(&self) -> io::Result<Vec<u8>>;
    }
}
