//! Depth-first recursive copy.

use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::utils::fs::ensure_dir;

/// Counters accumulated across one copy run. Informational only; they
/// never influence copy behavior.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct CopyStats {
    pub files_copied: usize,
    pub dirs_created: usize,
    pub bytes_copied: u64,
}

/// Copy `src` into `dest`, depth-first.
///
/// A `src` that does not exist is a quiet no-op: a node that vanishes
/// between enumeration and access is skipped without aborting the rest of
/// the run. Missing-at-root is the caller's precondition to enforce; this
/// function never reports absence.
///
/// Directories are created as needed (an existing `dest` of any type skips
/// creation and is not inspected before descending). Files are copied
/// byte-for-byte, overwriting whatever is already at `dest`, without
/// backup and without atomicity. The first filesystem error propagates up
/// through the recursion and aborts the run; files already written stay.
///
/// Symlinks and special files get whatever `std::fs::metadata` and
/// `std::fs::copy` do natively, and recursion depth tracks the source
/// tree with no explicit bound.
pub fn copy_recursive(src: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    let meta = match std::fs::metadata(src) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    if meta.is_dir() {
        if ensure_dir(dest)? {
            stats.dirs_created += 1;
            trace!(dir = %dest.display(), "created directory");
        }
        for entry in std::fs::read_dir(src)? {
            let entry = entry?;
            copy_recursive(&entry.path(), &dest.join(entry.file_name()), stats)?;
        }
    } else {
        let bytes = std::fs::copy(src, dest)?;
        stats.files_copied += 1;
        stats.bytes_copied += bytes;
        debug!(src = %src.display(), dest = %dest.display(), bytes, "copied file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::{CopyStats, copy_recursive};

    fn seed_tree(root: &Path) {
        fs::create_dir_all(root.join("skills")).unwrap();
        fs::create_dir_all(root.join("workflows/nested")).unwrap();
        fs::write(root.join("skills/a.txt"), "X").unwrap();
        fs::write(root.join("workflows/audit.md"), "Y").unwrap();
        fs::write(root.join("workflows/nested/deep.md"), "Z").unwrap();
        fs::write(root.join(".hidden"), "h").unwrap();
    }

    #[test]
    fn copies_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        seed_tree(&src);

        let mut stats = CopyStats::default();
        copy_recursive(&src, &dest, &mut stats).unwrap();

        assert_eq!(fs::read_to_string(dest.join("skills/a.txt")).unwrap(), "X");
        assert_eq!(
            fs::read_to_string(dest.join("workflows/audit.md")).unwrap(),
            "Y"
        );
        assert_eq!(
            fs::read_to_string(dest.join("workflows/nested/deep.md")).unwrap(),
            "Z"
        );
        assert_eq!(fs::read_to_string(dest.join(".hidden")).unwrap(), "h");
        assert_eq!(stats.files_copied, 4);
        // dest, skills, workflows, workflows/nested
        assert_eq!(stats.dirs_created, 4);
        assert_eq!(stats.bytes_copied, 4);
    }

    #[test]
    fn missing_src_is_a_quiet_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("vanished");
        let dest = tmp.path().join("dest");

        let mut stats = CopyStats::default();
        copy_recursive(&src, &dest, &mut stats).unwrap();

        assert!(!dest.exists());
        assert_eq!(stats.files_copied, 0);
        assert_eq!(stats.dirs_created, 0);
    }

    #[test]
    fn overwrites_existing_destination_file() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("a.txt"), "new").unwrap();
        fs::write(dest.join("a.txt"), "old content that is longer").unwrap();

        let mut stats = CopyStats::default();
        copy_recursive(&src, &dest, &mut stats).unwrap();

        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "new");
        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.dirs_created, 0);
    }

    #[test]
    fn existing_destination_dirs_are_not_counted() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        seed_tree(&src);
        fs::create_dir_all(dest.join("skills")).unwrap();

        let mut stats = CopyStats::default();
        copy_recursive(&src, &dest, &mut stats).unwrap();

        // dest and dest/skills already existed
        assert_eq!(stats.dirs_created, 2);
        assert_eq!(stats.files_copied, 4);
    }

    #[test]
    fn second_run_copies_over_the_first() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        seed_tree(&src);

        let mut first = CopyStats::default();
        copy_recursive(&src, &dest, &mut first).unwrap();
        let mut second = CopyStats::default();
        copy_recursive(&src, &dest, &mut second).unwrap();

        assert_eq!(second.files_copied, first.files_copied);
        assert_eq!(second.dirs_created, 0);
        assert_eq!(fs::read_to_string(dest.join("skills/a.txt")).unwrap(), "X");
    }
}
