//! Error types used by this crate.

use std::io;

use thiserror::Error;

/// Custom error type returned when an operation on the profile store fails.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No profile exists at the given position in the store
    #[error("no profile at index {0}")]
    ProfileNotFound(usize),

    /// No game exists at the given position in the profile's library
    #[error("no game at index {0}")]
    GameNotFound(usize),

    /// The external process for a game could not be started
    #[error("failed to launch '{name}': {source}")]
    Launch {
        name: String,
        #[source]
        source: io::Error,
    },
}
