use crate::catalog::FormatCandidate;
use crate::constants::BUILTIN_FORMATS;
use std::borrow::Cow;

/// The ordered, read-only list of layouts the detector walks through.
///
/// A catalog is assembled once and never changes afterwards. The built-in catalog borrows
/// the static table; a catalog extended from configuration owns a copy with the extra
/// layouts appended behind the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCatalog {
    candidates: Cow<'static, [FormatCandidate]>,
}

impl FormatCatalog {
    pub fn builtin() -> Self {
        FormatCatalog {
            candidates: Cow::Borrowed(BUILTIN_FORMATS),
        }
    }

    /// Returns the built-in catalog followed by `additional` in the given order.
    pub fn with_additional(additional: impl IntoIterator<Item = FormatCandidate>) -> Self {
        let mut candidates = BUILTIN_FORMATS.to_vec();
        candidates.extend(additional);
        FormatCatalog {
            candidates: Cow::Owned(candidates),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatCandidate> {
        self.candidates.iter()
    }

    pub fn candidates(&self) -> &[FormatCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&FormatCandidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.candidates
            .iter()
            .position(|candidate| candidate.name() == name)
    }
}

impl Default for FormatCatalog {
    fn default() -> Self {
        FormatCatalog::builtin()
    }
}

/// A catalog with exactly these candidates, in this order, without the built-in layouts.
impl From<Vec<FormatCandidate>> for FormatCatalog {
    fn from(candidates: Vec<FormatCandidate>) -> Self {
        FormatCatalog {
            candidates: Cow::Owned(candidates),
        }
    }
}

impl<'a> IntoIterator for &'a FormatCatalog {
    type Item = &'a FormatCandidate;
    type IntoIter = std::slice::Iter<'a, FormatCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
