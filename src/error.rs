use std::fmt;

/// Result alias for `apclust`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any clustering work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A preference policy name outside the supported set.
    InvalidPreference(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPreference(name) => {
                write!(
                    f,
                    "invalid preference policy '{}', expected one of median/min/max/average/constant",
                    name
                )
            }
        }
    }
}

impl std::error::Error for Error {}
