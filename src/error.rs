//! Unified error type.

use thiserror::Error;

/// The error type returned by quickpaste's fallible server operations.
///
/// Per-request failures (bad identifiers, missing pastes, store faults while
/// serving) are HTTP [`Response`](crate::Response) values, not `Error`s. This
/// type surfaces infrastructure failures: binding a port or accepting a
/// connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
