use crate::parsing::error::PatternError;
use crate::parsing::pattern::{Pattern, mentions_time_field};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum_macros::{Display, EnumString};

/// Whether a layout describes a calendar date or a date with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum FormatKind {
    Date,
    DateTime,
}

/// One recognized textual layout: its pattern, its symbolic name and its classification.
///
/// `has_time_component` is derived from the pattern once, when the candidate is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCandidate {
    name: Cow<'static, str>,
    pattern: Cow<'static, str>,
    has_time_component: bool,
}

impl FormatCandidate {
    /// Creates a candidate from static strings at compile time.
    ///
    /// Only for patterns that are known to be well-formed; the built-in table is checked by
    /// the test-suite.
    pub(crate) const fn builtin(name: &'static str, pattern: &'static str) -> Self {
        FormatCandidate {
            name: Cow::Borrowed(name),
            pattern: Cow::Borrowed(pattern),
            has_time_component: mentions_time_field(pattern),
        }
    }

    pub fn try_new(
        name: impl Into<Cow<'static, str>>,
        pattern: impl Into<Cow<'static, str>>,
    ) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        let has_time_component = Pattern::compile(&pattern)?.has_time_component();
        Ok(FormatCandidate {
            name: name.into(),
            pattern,
            has_time_component,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_time_component(&self) -> bool {
        self.has_time_component
    }

    pub fn kind(&self) -> FormatKind {
        if self.has_time_component {
            FormatKind::DateTime
        } else {
            FormatKind::Date
        }
    }
}
