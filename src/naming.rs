//! Filename building blocks derived from a file's mtime.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// ISO-8601 instant (UTC, milliseconds) with `.` and `:` replaced by `-`.
///
/// `2023-05-01T10:00:00.000Z` -> `2023-05-01T10-00-00-000Z`. Sub-millisecond
/// digits are truncated, so two mtimes within the same millisecond share a prefix.
pub fn timestamp_prefix(modified_at: OffsetDateTime) -> Result<String, time::error::Format> {
    let iso = modified_at.to_offset(UtcOffset::UTC).format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))?;
    Ok(iso.replace(['.', ':'], "-"))
}

/// Year folder name. Uses the UTC year so it always agrees with the prefix.
pub fn year_bucket(modified_at: OffsetDateTime) -> String {
    format!("{:04}", modified_at.to_offset(UtcOffset::UTC).year())
}

/// Last extension component only: `a.tar.gz` -> `gz`, `.bashrc` -> none,
/// `a.` -> empty (the name keeps its trailing dot).
pub fn last_extension(path: &Path) -> Option<&OsStr> {
    path.extension()
}

/// `<prefix>[-<suffix>][.<ext>]`; the suffix is only written for collisions.
pub fn build_file_name(prefix: &str, suffix: u32, extension: Option<&OsStr>) -> OsString {
    let mut name = OsString::from(prefix);
    if suffix > 1 {
        name.push(format!("-{suffix}"));
    }
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn prefix_is_filesystem_safe_iso_instant() {
        let p = timestamp_prefix(datetime!(2023-05-01 10:00:00 UTC)).unwrap();
        assert_eq!(p, "2023-05-01T10-00-00-000Z");
        assert!(!p.contains('.') && !p.contains(':'));
    }

    #[test]
    fn prefix_truncates_below_milliseconds() {
        let base = datetime!(2023-05-01 10:00:00 UTC);
        let a = timestamp_prefix(base.replace_nanosecond(123_456_789).unwrap()).unwrap();
        let b = timestamp_prefix(base.replace_nanosecond(123_000_001).unwrap()).unwrap();
        assert_eq!(a, "2023-05-01T10-00-00-123Z");
        assert_eq!(a, b);
    }

    #[test]
    fn prefix_normalizes_offset_to_utc() {
        let p = timestamp_prefix(datetime!(2024-01-01 01:30:00 +2)).unwrap();
        assert_eq!(p, "2023-12-31T23-30-00-000Z");
        assert_eq!(year_bucket(datetime!(2024-01-01 01:30:00 +2)), "2023");
    }

    #[test]
    fn extension_uses_last_component() {
        assert_eq!(last_extension(Path::new("/in/a.tar.gz")), Some(OsStr::new("gz")));
        assert_eq!(last_extension(Path::new("/in/Photo.JPG")), Some(OsStr::new("JPG")));
        assert_eq!(last_extension(Path::new("/in/.bashrc")), None);
        assert_eq!(last_extension(Path::new("/in/README")), None);
        assert_eq!(last_extension(Path::new("/in/odd.")), Some(OsStr::new("")));
    }

    #[test]
    fn file_name_adds_suffix_only_for_collisions() {
        let ext = Some(OsStr::new("txt"));
        assert_eq!(build_file_name("P", 1, ext), OsString::from("P.txt"));
        assert_eq!(build_file_name("P", 2, ext), OsString::from("P-2.txt"));
        assert_eq!(build_file_name("P", 3, None), OsString::from("P-3"));
        assert_eq!(build_file_name("P", 1, Some(OsStr::new(""))), OsString::from("P."));
    }
}
