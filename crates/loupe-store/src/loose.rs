use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::ZlibDecoder;
use loupe_object::{parse_object, ObjectId, ObjectInfo};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Read-only view of a loose object store.
///
/// Objects live under a fixed two-level fan-out below the root: the first
/// two hex characters of the id name the directory, the remaining 38 the
/// file. Objects are immutable once written, so concurrent reads — of the
/// same id or different ones — need no locking. Every call opens, reads,
/// and closes its own file; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct LooseStore {
    root: PathBuf,
}

impl LooseStore {
    /// Open a store rooted at `root` (e.g. `.git/objects`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path for `id`. Pure; existence is not checked here, so an
    /// unknown id only surfaces when the path is actually read.
    pub fn object_path(&self, id: &ObjectId) -> PathBuf {
        let hex = id.to_hex();
        self.root.join(&hex[..2]).join(&hex[2..])
    }

    /// Read and inflate the stored bytes for `id`.
    pub fn read_raw(&self, id: &ObjectId) -> StoreResult<Vec<u8>> {
        let path = self.object_path(id);
        debug!(id = %id, path = %path.display(), "reading loose object");
        let compressed = std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(*id)
            } else {
                StoreError::Io(e)
            }
        })?;
        inflate(&compressed, id)
    }

    /// Decode the object named by `id` into its structured record.
    pub fn cat(&self, id: &ObjectId) -> StoreResult<ObjectInfo> {
        let raw = self.read_raw(id)?;
        Ok(parse_object(&raw)?)
    }
}

/// Inflate one zlib stream; anything else is a decompression failure for
/// the object being read.
fn inflate(compressed: &[u8], id: &ObjectId) -> StoreResult<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|e| StoreError::Decompression {
            id: *id,
            reason: e.to_string(),
        })?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use loupe_object::ObjectKind;

    use super::*;

    const COMMIT_ID: &str = "19b94fa331acbdb1e0b071728f63aedff8ca654d";
    const FIRST_COMMIT: &[u8] = b"commit 58\0tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\nauthor satoruk <x@x.com> 1571298146 +0900\n\nfirst commit";

    fn write_object(root: &Path, hex: &str, raw: &[u8]) {
        let dir = root.join(&hex[..2]);
        std::fs::create_dir_all(&dir).unwrap();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(raw).unwrap();
        std::fs::write(dir.join(&hex[2..]), encoder.finish().unwrap()).unwrap();
    }

    #[test]
    fn object_path_uses_two_level_fanout() {
        let store = LooseStore::new("/repo/.git/objects");
        let id = ObjectId::from_hex(COMMIT_ID).unwrap();
        assert_eq!(
            store.object_path(&id),
            PathBuf::from("/repo/.git/objects/19/b94fa331acbdb1e0b071728f63aedff8ca654d")
        );
    }

    #[test]
    fn cat_decodes_a_stored_commit() {
        let dir = tempfile::tempdir().unwrap();
        write_object(dir.path(), COMMIT_ID, FIRST_COMMIT);

        let store = LooseStore::new(dir.path());
        let id = ObjectId::from_hex(COMMIT_ID).unwrap();
        let info = store.cat(&id).unwrap();

        assert_eq!(info.kind, ObjectKind::Commit);
        assert_eq!(
            info.fields.get("tree").unwrap(),
            ["4b825dc642cb6eb9a060e54bf8d69288fbee4904"]
        );
        assert_eq!(info.message, "first commit");
    }

    #[test]
    fn read_raw_returns_the_inflated_envelope() {
        let dir = tempfile::tempdir().unwrap();
        write_object(dir.path(), COMMIT_ID, FIRST_COMMIT);

        let store = LooseStore::new(dir.path());
        let id = ObjectId::from_hex(COMMIT_ID).unwrap();
        assert_eq!(store.read_raw(&id).unwrap(), FIRST_COMMIT);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LooseStore::new(dir.path());
        let id = ObjectId::from_hex(COMMIT_ID).unwrap();
        let err = store.cat(&id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
    }

    #[test]
    fn uncompressed_bytes_fail_decompression() {
        let dir = tempfile::tempdir().unwrap();
        let obj_dir = dir.path().join(&COMMIT_ID[..2]);
        std::fs::create_dir_all(&obj_dir).unwrap();
        std::fs::write(obj_dir.join(&COMMIT_ID[2..]), b"not zlib at all").unwrap();

        let store = LooseStore::new(dir.path());
        let id = ObjectId::from_hex(COMMIT_ID).unwrap();
        assert!(matches!(
            store.cat(&id).unwrap_err(),
            StoreError::Decompression { .. }
        ));
    }

    #[test]
    fn envelope_without_nul_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_object(dir.path(), COMMIT_ID, b"commit 58 but no boundary");

        let store = LooseStore::new(dir.path());
        let id = ObjectId::from_hex(COMMIT_ID).unwrap();
        assert!(matches!(
            store.cat(&id).unwrap_err(),
            StoreError::Malformed(_)
        ));
    }
}
