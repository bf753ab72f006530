pub mod error;
pub use self::error::{ParseError, PatternError};
mod exact_parser;
pub use self::exact_parser::{ExactParser, PatternParser};
pub mod pattern;
pub use self::pattern::Pattern;
