use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur in the caption parser
#[derive(Debug)]
pub enum CaptionParserError {
    Caption(CaptionError),
    Other(io::Error),
}

/// Caption extraction specific errors
#[derive(Debug)]
pub struct CaptionError {
    pub message: String,
}

impl CaptionError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CaptionParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptionParserError::Other(err) => write!(f, "I/O error: {}", err),
            CaptionParserError::Caption(err) => write!(f, "Caption error: {}", err),
        }
    }
}

impl fmt::Display for CaptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CaptionParserError {}
impl Error for CaptionError {}

// Conversion implementations
impl From<io::Error> for CaptionParserError {
    fn from(err: io::Error) -> Self {
        CaptionParserError::Other(err)
    }
}

impl From<CaptionError> for CaptionParserError {
    fn from(err: CaptionError) -> Self {
        CaptionParserError::Caption(err)
    }
}

// Conversion to io::Error for backward compatibility
impl From<CaptionParserError> for io::Error {
    fn from(err: CaptionParserError) -> Self {
        io::Error::other(err)
    }
}

impl From<CaptionError> for io::Error {
    fn from(err: CaptionError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with CaptionParserError
pub type CaptionParserResult<T> = Result<T, CaptionParserError>;
