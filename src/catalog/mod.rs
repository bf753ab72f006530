mod format_candidate;
pub use self::format_candidate::{FormatCandidate, FormatKind};
mod format_catalog;
pub use self::format_catalog::FormatCatalog;
