use crate::constants::{DEFAULT_DAY, DEFAULT_MONTH, DEFAULT_YEAR};
use crate::parsing::error::ParseError;
use crate::parsing::pattern::{Field, Pattern, PatternToken};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Strict parsing primitives the detection cascade is built on.
///
/// Both methods must accept `text` only if it matches `pattern` exactly: every field at its
/// declared width, every literal in place, nothing left over, and a real calendar date
/// (and time of day, where present).
pub trait ExactParser {
    fn parse_date(&self, text: &str, pattern: &str) -> Result<NaiveDate, ParseError>;
    fn parse_datetime(&self, text: &str, pattern: &str) -> Result<NaiveDateTime, ParseError>;
}

/// The built-in [`ExactParser`] for the layout language understood by [`Pattern`].
///
/// Fields missing from a pattern fall back to 1970-01-01 00:00:00.000, so a time-only
/// pattern yields a date-time on the epoch day.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser;

impl ExactParser for PatternParser {
    fn parse_date(&self, text: &str, pattern: &str) -> Result<NaiveDate, ParseError> {
        let fields = scan(text, &Pattern::compile(pattern)?)?;
        let date = fields.date(text)?;
        fields.time(text)?;
        Ok(date)
    }

    fn parse_datetime(&self, text: &str, pattern: &str) -> Result<NaiveDateTime, ParseError> {
        let fields = scan(text, &Pattern::compile(pattern)?)?;
        Ok(NaiveDateTime::new(fields.date(text)?, fields.time(text)?))
    }
}

#[derive(Debug, Default)]
struct ScannedFields {
    year: Option<u32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    millisecond: Option<u32>,
}

impl ScannedFields {
    fn set(&mut self, field: Field, value: u32) {
        let slot = match field {
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
            Field::Hour => &mut self.hour,
            Field::Minute => &mut self.minute,
            Field::Second => &mut self.second,
            Field::Millisecond => &mut self.millisecond,
        };
        *slot = Some(value);
    }

    fn date(&self, text: &str) -> Result<NaiveDate, ParseError> {
        let year = self.year.map_or(DEFAULT_YEAR, |year| year as i32);
        NaiveDate::from_ymd_opt(
            year,
            self.month.unwrap_or(DEFAULT_MONTH),
            self.day.unwrap_or(DEFAULT_DAY),
        )
        .ok_or_else(|| ParseError::InvalidDate {
            text: text.to_string(),
        })
    }

    fn time(&self, text: &str) -> Result<NaiveTime, ParseError> {
        NaiveTime::from_hms_milli_opt(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.millisecond.unwrap_or(0),
        )
        .ok_or_else(|| ParseError::InvalidTime {
            text: text.to_string(),
        })
    }
}

/// Walks the pattern tokens and "chews" the matching characters off the front of `text`.
fn scan(text: &str, pattern: &Pattern) -> Result<ScannedFields, ParseError> {
    let chars: Vec<char> = text.chars().collect();
    let mut fields = ScannedFields::default();
    let mut pos = 0;

    for token in pattern.tokens() {
        match token {
            PatternToken::Literal(expected) => match chars.get(pos) {
                None => {
                    return Err(ParseError::InputTooShort {
                        text: text.to_string(),
                    });
                }
                Some(found) if found == expected => pos += 1,
                Some(_) => {
                    return Err(ParseError::Unexpected {
                        text: text.to_string(),
                        position: pos,
                        expected: format!("'{expected}'"),
                    });
                }
            },
            PatternToken::Field {
                field,
                min_digits,
                max_digits,
            } => {
                let digits: String = chars[pos..]
                    .iter()
                    .take(*max_digits)
                    .take_while(|ch| ch.is_ascii_digit())
                    .collect();

                if digits.len() < *min_digits {
                    if pos + digits.len() == chars.len() {
                        return Err(ParseError::InputTooShort {
                            text: text.to_string(),
                        });
                    }
                    return Err(ParseError::Unexpected {
                        text: text.to_string(),
                        position: pos + digits.len(),
                        expected: format!("{min_digits} digit(s) for the {field}"),
                    });
                }

                // At most four ASCII digits, so this always fits.
                let value = digits.parse::<u32>().map_err(|_| ParseError::Unexpected {
                    text: text.to_string(),
                    position: pos,
                    expected: format!("a number for the {field}"),
                })?;
                fields.set(*field, value);
                pos += digits.len();
            }
        }
    }

    if pos < chars.len() {
        return Err(ParseError::InputTooLong {
            text: text.to_string(),
            position: pos,
        });
    }

    Ok(fields)
}
