use std::fmt;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArgsError>;

/// The quote character that opened an unterminated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Single,
    Double,
}

impl QuoteKind {
    pub fn as_char(self) -> char {
        match self {
            QuoteKind::Single => '\'',
            QuoteKind::Double => '"',
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuoteKind::Single => "single",
            QuoteKind::Double => "double",
        };
        write!(f, "{} quote ({})", name, self.as_char())
    }
}

/// Everything that can stop an argument vector from being produced.
///
/// None of these are recoverable at the process boundary; see
/// [`get_main_args`](crate::get_main_args).
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("could not retrieve the raw command line: {}", .0)]
    RawCommandLineUnavailable(io::Error),

    #[error("unterminated {} opened at byte {}", .quote, .offset)]
    MalformedQuoting { quote: QuoteKind, offset: usize },

    #[error("the raw command line is not valid UTF-16")]
    InvalidEncoding,
}

impl ArgsError {
    pub fn malformed_quoting(quote: QuoteKind, offset: usize) -> Self {
        Self::MalformedQuoting { quote, offset }
    }
}
