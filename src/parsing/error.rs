use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,
    #[error("Unknown pattern letter '{letter}' at position {position}")]
    UnknownLetter { letter: char, position: usize },
    #[error("Pattern letter '{letter}' can not be repeated {width} times")]
    UnsupportedWidth { letter: char, width: usize },
    #[error("Unterminated quoted literal starting at position {position}")]
    UnterminatedLiteral { position: usize },
}

/// Reasons a text was rejected by one of the exact parsers.
///
/// These are swallowed by the detection cascade and only surface in debug logs or
/// when a parser is called directly.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("Expected {expected} at position {position} of '{text}'")]
    Unexpected {
        text: String,
        position: usize,
        expected: String,
    },
    #[error("Input '{text}' ended before the pattern was complete")]
    InputTooShort { text: String },
    #[error("Input '{text}' has trailing characters after position {position}")]
    InputTooLong { text: String, position: usize },
    #[error("'{text}' does not encode a valid calendar date")]
    InvalidDate { text: String },
    #[error("'{text}' does not encode a valid time of day")]
    InvalidTime { text: String },
}
