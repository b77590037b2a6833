use std::io;
use thiserror::Error;

/// Error type for mvdict operations.
///
/// The message text of the store-level variants is part of the command
/// protocol: the shell renders `to_string()` directly to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MvError {
    /// The requested key is not present in the store.
    #[error("key does not exist")]
    KeyNotFound,

    /// The key exists but does not contain the requested member.
    #[error("value does not exist")]
    ValueNotFound,

    /// The member is already present under the key.
    #[error("value already exists")]
    ValueExists,

    /// A known verb was given the wrong number of arguments.
    #[error("Incorrect number of arguments")]
    BadArity,

    /// The verb is not part of the protocol.
    #[error("Unsupported operation; please try again")]
    UnknownCommand(String),

    /// IO error on the input or output stream. The only fatal class:
    /// the shell propagates this instead of rendering it.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<io::Error> for MvError {
    fn from(err: io::Error) -> Self {
        MvError::Io(err.to_string())
    }
}

/// Result type alias for mvdict operations.
pub type Result<T> = std::result::Result<T, MvError>;
