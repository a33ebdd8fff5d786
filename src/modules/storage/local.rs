use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Filesystem-backed store for opaque-named blobs under a single root
/// directory. Names are generated by the caller and never derived from user
/// input, so no sharding or escaping is needed.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create the store, creating the root directory if absent.
    pub async fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, storage_name: &str) -> PathBuf {
        self.root.join(storage_name)
    }

    pub async fn save(&self, storage_name: &str, data: &[u8]) -> io::Result<()> {
        fs::write(self.blob_path(storage_name), data).await
    }

    pub async fn read(&self, storage_name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.blob_path(storage_name)).await
    }

    /// Delete a blob. A blob already missing on disk is not an error.
    pub async fn delete(&self, storage_name: &str) -> io::Result<()> {
        match fs::remove_file(self.blob_path(storage_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn store() -> (TempDir, LocalStorage) {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn save_and_read_roundtrip() {
        let (_dir, storage) = store().await;
        storage.save("abc123.pdf", b"hello").await.unwrap();
        assert_eq!(storage.read("abc123.pdf").await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn delete_removes_the_blob() {
        let (_dir, storage) = store().await;
        storage.save("abc123.pdf", b"hello").await.unwrap();
        storage.delete("abc123.pdf").await.unwrap();
        assert!(storage.read("abc123.pdf").await.is_err());
    }

    #[tokio::test]
    async fn delete_of_missing_blob_is_ok() {
        let (_dir, storage) = store().await;
        storage.delete("never-existed.bin").await.unwrap();
    }

    #[tokio::test]
    async fn new_creates_the_root_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = LocalStorage::new(&nested).await.unwrap();
        assert!(storage.root().is_dir());
    }
}
