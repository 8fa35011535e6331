//! Ref files: plain text files whose trimmed contents name one object.

use std::path::Path;

use loupe_object::ObjectId;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Read a ref file and return the object identifier it names.
///
/// Ref files usually end with a newline; leading and trailing whitespace is
/// trimmed before the identifier is parsed.
pub fn read_ref_file(path: impl AsRef<Path>) -> StoreResult<ObjectId> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading ref file");
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StoreError::RefNotFound(path.to_path_buf())
        } else {
            StoreError::Io(e)
        }
    })?;
    ObjectId::from_hex(text.trim()).map_err(|e| StoreError::InvalidRef {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT_ID: &str = "19b94fa331acbdb1e0b071728f63aedff8ca654d";

    #[test]
    fn trailing_newline_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master");
        std::fs::write(&path, format!("{COMMIT_ID}\n")).unwrap();
        assert_eq!(read_ref_file(&path).unwrap().to_hex(), COMMIT_ID);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master");
        std::fs::write(&path, format!("  {COMMIT_ID}\t\n")).unwrap();
        assert_eq!(read_ref_file(&path).unwrap().to_hex(), COMMIT_ID);
    }

    #[test]
    fn missing_ref_file_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-branch");
        assert!(matches!(
            read_ref_file(&path).unwrap_err(),
            StoreError::RefNotFound(p) if p == path
        ));
    }

    #[test]
    fn garbage_contents_are_an_invalid_ref() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master");
        std::fs::write(&path, "ref: refs/heads/main\n").unwrap();
        assert!(matches!(
            read_ref_file(&path).unwrap_err(),
            StoreError::InvalidRef { .. }
        ));
    }
}
