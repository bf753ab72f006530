use crate::parsing::error::PatternError;
use std::str::FromStr;
use strum_macros::Display;

/// A calendar or clock field that a pattern letter refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Field {
    pub fn is_time(&self) -> bool {
        matches!(
            self,
            Field::Hour | Field::Minute | Field::Second | Field::Millisecond
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Field {
        field: Field,
        min_digits: usize,
        max_digits: usize,
    },
    Literal(char),
}

impl PatternToken {
    /// Maps a run of identical pattern letters to a field token.
    ///
    /// A doubled letter demands exactly that many digits, a single letter accepts one or two.
    fn field(letter: char, width: usize, position: usize) -> Result<Self, PatternError> {
        let field = match letter {
            'y' => Field::Year,
            'M' => Field::Month,
            'd' => Field::Day,
            'H' => Field::Hour,
            'm' => Field::Minute,
            's' => Field::Second,
            'S' => Field::Millisecond,
            _ => return Err(PatternError::UnknownLetter { letter, position }),
        };

        let (min_digits, max_digits) = match (field, width) {
            (Field::Year, 4) => (4, 4),
            (Field::Millisecond, 3) => (3, 3),
            (Field::Year | Field::Millisecond, _) => {
                return Err(PatternError::UnsupportedWidth { letter, width });
            }
            (_, 1) => (1, 2),
            (_, 2) => (2, 2),
            _ => return Err(PatternError::UnsupportedWidth { letter, width }),
        };

        Ok(PatternToken::Field {
            field,
            min_digits,
            max_digits,
        })
    }
}

/// A compiled layout pattern such as `yyyy-MM-dd'T'HH:mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let mut idx = 0;

        while idx < chars.len() {
            let ch = chars[idx];
            if ch == '\'' {
                let start = idx;
                idx += 1;
                if chars.get(idx) == Some(&'\'') {
                    tokens.push(PatternToken::Literal('\''));
                    idx += 1;
                    continue;
                }
                loop {
                    match chars.get(idx) {
                        None => return Err(PatternError::UnterminatedLiteral { position: start }),
                        Some('\'') if chars.get(idx + 1) == Some(&'\'') => {
                            tokens.push(PatternToken::Literal('\''));
                            idx += 2;
                        }
                        Some('\'') => {
                            idx += 1;
                            break;
                        }
                        Some(quoted) => {
                            tokens.push(PatternToken::Literal(*quoted));
                            idx += 1;
                        }
                    }
                }
            } else if ch.is_ascii_alphabetic() {
                let start = idx;
                while idx < chars.len() && chars[idx] == ch {
                    idx += 1;
                }
                tokens.push(PatternToken::field(ch, idx - start, start)?);
            } else {
                tokens.push(PatternToken::Literal(ch));
                idx += 1;
            }
        }

        Ok(Pattern { tokens })
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn has_time_component(&self) -> bool {
        self.tokens.iter().any(|token| {
            matches!(token, PatternToken::Field { field, .. } if field.is_time())
        })
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::compile(s)
    }
}

/// Compile-time check for hour, minute, second or fraction letters outside quoted literals.
///
/// Agrees with [`Pattern::has_time_component`] for every well-formed pattern.
pub(crate) const fn mentions_time_field(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    let mut quoted = false;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\'' => quoted = !quoted,
            b'H' | b'm' | b's' | b'S' if !quoted => return true,
            _ => {}
        }
        idx += 1;
    }
    false
}
