use crate::catalog::FormatCandidate;

/// The built-in layouts, in the order they are tried.
///
/// The order is the only tie-breaker between layouts that fit the same text. US layouts
/// come before EU layouts, so an ambiguous `01/02/2024` is reported as `US_DATE`
/// (January 2nd). Nothing looks at the field values to decide otherwise.
pub static BUILTIN_FORMATS: &[FormatCandidate] = &[
    // ISO
    FormatCandidate::builtin("ISO_DATETIME_MS", "yyyy-MM-dd'T'HH:mm:ss.SSS"),
    FormatCandidate::builtin("ISO_DATETIME", "yyyy-MM-dd'T'HH:mm:ss"),
    FormatCandidate::builtin("ISO_DATETIME_SPACE", "yyyy-MM-dd HH:mm:ss"),
    FormatCandidate::builtin("ISO_DATE", "yyyy-MM-dd"),
    // US
    FormatCandidate::builtin("US_DATETIME", "MM/dd/yyyy HH:mm:ss"),
    FormatCandidate::builtin("US_DATETIME_NO_SECONDS", "MM/dd/yyyy HH:mm"),
    FormatCandidate::builtin("US_DATE", "MM/dd/yyyy"),
    FormatCandidate::builtin("US_DATE_DASH", "MM-dd-yyyy"),
    FormatCandidate::builtin("US_DATETIME_SHORT", "M/d/yyyy H:mm:ss"),
    FormatCandidate::builtin("US_DATE_SHORT", "M/d/yyyy"),
    // EU
    FormatCandidate::builtin("EU_DATETIME", "dd/MM/yyyy HH:mm:ss"),
    FormatCandidate::builtin("EU_DATETIME_NO_SECONDS", "dd/MM/yyyy HH:mm"),
    FormatCandidate::builtin("EU_DATE", "dd/MM/yyyy"),
    FormatCandidate::builtin("EU_DATE_DASH", "dd-MM-yyyy"),
    FormatCandidate::builtin("EU_DATETIME_DOT", "dd.MM.yyyy HH:mm:ss"),
    FormatCandidate::builtin("EU_DATE_DOT", "dd.MM.yyyy"),
    FormatCandidate::builtin("EU_DATE_SHORT", "d/M/yyyy"),
    FormatCandidate::builtin("EU_DATE_DOT_SHORT", "d.M.yyyy"),
    // Misc
    FormatCandidate::builtin("ISO_DATETIME_SLASH", "yyyy/MM/dd HH:mm:ss"),
    FormatCandidate::builtin("ISO_DATE_SLASH", "yyyy/MM/dd"),
    FormatCandidate::builtin("COMPACT_DATETIME", "yyyyMMdd'T'HHmmss"),
    FormatCandidate::builtin("COMPACT_DATE", "yyyyMMdd"),
    FormatCandidate::builtin("TIME_MS", "HH:mm:ss.SSS"),
    FormatCandidate::builtin("TIME", "HH:mm:ss"),
    FormatCandidate::builtin("TIME_SHORT", "HH:mm"),
    FormatCandidate::builtin("YEAR_MONTH", "yyyy-MM"),
    FormatCandidate::builtin("MONTH_YEAR", "MM/yyyy"),
    FormatCandidate::builtin("YEAR", "yyyy"),
];

pub(crate) const DEFAULT_YEAR: i32 = 1970;
pub(crate) const DEFAULT_MONTH: u32 = 1;
pub(crate) const DEFAULT_DAY: u32 = 1;

pub(crate) const FORMAT_NAME_PATTERN: &str = r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$";
