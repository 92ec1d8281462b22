use crate::collisions::CollisionTable;
use crate::naming::{build_file_name, last_extension, timestamp_prefix, year_bucket};
use crate::types::Destination;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Folder under the output root that receives every file after the first for a prefix.
pub const COLLISIONS_DIR: &str = "collisions";

/// Destination Resolver: output root + the run's collision table.
#[derive(Debug)]
pub struct Resolver {
    output_path: PathBuf,
    table: CollisionTable,
}

impl Resolver {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            table: CollisionTable::new(),
        }
    }

    /// Compute where `file` goes and bump the collision count for its prefix.
    ///
    /// First file of a prefix -> `<output>/<year>/<prefix>.<ext>`,
    /// Nth (N > 1) -> `<output>/collisions/<prefix>-N.<ext>`.
    /// Nothing is checked on disk; an existing file at the destination is
    /// left to the move.
    pub fn resolve(
        &mut self,
        file: &Path,
        modified_at: OffsetDateTime,
    ) -> Result<Destination, time::error::Format> {
        let prefix = timestamp_prefix(modified_at)?;
        let suffix = self.table.next_suffix(&prefix);

        let directory = if suffix == 1 {
            self.output_path.join(year_bucket(modified_at))
        } else {
            self.output_path.join(COLLISIONS_DIR)
        };

        Ok(Destination {
            directory,
            file_name: build_file_name(&prefix, suffix, last_extension(file)),
            suffix,
        })
    }

    pub fn table(&self) -> &CollisionTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use time::macros::datetime;

    #[test]
    fn first_file_goes_to_year_folder() {
        let mut r = Resolver::new("/out");
        let d = r
            .resolve(Path::new("/in/a.txt"), datetime!(2023-05-01 10:00:00 UTC))
            .unwrap();

        assert_eq!(d.directory, PathBuf::from("/out/2023"));
        assert_eq!(d.file_name, OsString::from("2023-05-01T10-00-00-000Z.txt"));
        assert_eq!(d.path(), PathBuf::from("/out/2023/2023-05-01T10-00-00-000Z.txt"));
        assert!(!d.is_collision());
    }

    #[test]
    fn same_prefix_goes_to_collisions_with_suffix() {
        let mut r = Resolver::new("/out");
        let ts = datetime!(2023-05-01 10:00:00 UTC);

        let first = r.resolve(Path::new("/in/a.txt"), ts).unwrap();
        let second = r.resolve(Path::new("/in/b.txt"), ts).unwrap();
        let third = r.resolve(Path::new("/in/sub/c.jpg"), ts).unwrap();

        assert_eq!(first.suffix, 1);
        assert_eq!(second.suffix, 2);
        assert_eq!(
            second.path(),
            PathBuf::from("/out/collisions/2023-05-01T10-00-00-000Z-2.txt")
        );
        assert_eq!(
            third.path(),
            PathBuf::from("/out/collisions/2023-05-01T10-00-00-000Z-3.jpg")
        );
        assert_eq!(r.table().count("2023-05-01T10-00-00-000Z"), 3);
    }

    #[test]
    fn two_files_with_same_prefix_get_one_then_two() {
        let mut r = Resolver::new("/out");
        let ts = datetime!(2023-05-01 10:00:00 UTC);

        let suffixes: Vec<u32> = ["/in/a.txt", "/in/b.txt"]
            .iter()
            .map(|p| r.resolve(Path::new(p), ts).unwrap().suffix)
            .collect();
        assert_eq!(suffixes, vec![1, 2]);
    }

    #[test]
    fn different_milliseconds_do_not_collide() {
        let mut r = Resolver::new("/out");
        let a = r
            .resolve(Path::new("/in/a"), datetime!(2023-05-01 10:00:00 UTC))
            .unwrap();
        let b = r
            .resolve(
                Path::new("/in/b"),
                datetime!(2023-05-01 10:00:00 UTC).replace_millisecond(1).unwrap(),
            )
            .unwrap();

        assert_eq!(a.suffix, 1);
        assert_eq!(b.suffix, 1);
        assert_eq!(b.file_name, OsString::from("2023-05-01T10-00-00-001Z"));
    }
}
