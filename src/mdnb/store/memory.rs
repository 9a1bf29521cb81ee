use super::{matches_extension, under_checkpoints, DocumentStore};
use crate::error::{MdnbError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory file set for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a text file directly, bypassing the trait's Result plumbing.
    pub fn insert_text(&mut self, path: impl Into<PathBuf>, content: &str) {
        self.files.insert(path.into(), content.as_bytes().to_vec());
    }

    /// Seed raw bytes (for non-UTF-8 and binary fixtures).
    pub fn insert_bytes(&mut self, path: impl Into<PathBuf>, content: &[u8]) {
        self.files.insert(path.into(), content.to_vec());
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

impl DocumentStore for InMemoryStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = self
            .files
            .get(path)
            .ok_or_else(|| MdnbError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|_| MdnbError::Encoding(path.to_path_buf()))
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| MdnbError::NotFound(path.to_path_buf()))
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        self.files
            .get(path)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| MdnbError::NotFound(path.to_path_buf()))
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        if self.files.remove(path).is_none() {
            return Err(MdnbError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }

    fn list_files(&self, dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
        // BTreeMap iteration order keeps the listing sorted.
        Ok(self
            .files
            .keys()
            .filter(|path| path.starts_with(dir))
            .filter(|path| !under_checkpoints(path))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| matches_extension(n, extensions))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        !self.files.contains_key(path)
            && self.files.keys().any(|p| p.starts_with(path))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_document(mut self, path: &str, content: &str) -> Self {
            self.store.insert_text(path, content);
            self
        }
    }
}
