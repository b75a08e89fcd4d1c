use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The hashing engine was unable to produce a tree hash root for some value, e.g. because the
    /// value has no representation under SSZ merkleization.
    ComputationError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ComputationError(reason) => {
                write!(f, "unable to compute tree hash root: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}
