use core::fmt;

/// Errors that can occur during verifier derivation
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The digest primitive failed to produce any output.
    HashUnavailable,
    /// Group modulus smaller than 1 supplied at group construction.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HashUnavailable => write!(f, "digest primitive produced no output"),
            Error::InvalidModulus => write!(f, "group modulus must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type
pub type Result<T> = core::result::Result<T, Error>;
