//! Atomic file writes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ExportError, ExportResult};

/// Write a file atomically: stage into a temporary file in the destination
/// directory, then rename over the final path.
///
/// The rename only happens after `write` returns `Ok` and the buffer is
/// flushed, so the destination either keeps its previous content or holds
/// the complete new file.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> ExportResult<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> ExportResult<()>,
{
    // Stage in the destination directory so the rename stays on one
    // filesystem.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(tmp.as_file_mut());
    write(&mut writer)?;
    writer.flush()?;
    drop(writer);

    tmp.persist(path).map_err(|e| ExportError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let result = write_atomic(&path, |_| Err(ExportError::EmptyMesh));
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn successful_write_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, |w| {
            w.write_all(b"new")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");

        let result = write_atomic(&path, |_| Ok(()));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
