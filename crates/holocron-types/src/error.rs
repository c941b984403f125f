use std::fmt;

/// Result type for holocron-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A user-supplied birth year was neither a signed integer nor `<n>BBY`/`<n>ABY`
    InvalidBirthYear(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBirthYear(raw) => write!(
                f,
                "Invalid birth year '{}': expected e.g. -19, 19BBY or 8ABY",
                raw
            ),
        }
    }
}

impl std::error::Error for Error {}
