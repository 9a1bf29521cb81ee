use super::{matches_extension, DocumentStore};
use crate::error::{MdnbError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Production store backed by the real filesystem.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn walk(&self, dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir).map_err(MdnbError::Io)? {
            let entry = entry.map_err(MdnbError::Io)?;
            let path = entry.path();

            if path.is_dir() {
                if path
                    .file_name()
                    .map(|n| n == super::CHECKPOINT_DIR)
                    .unwrap_or(false)
                {
                    continue;
                }
                self.walk(&path, extensions, files)?;
            } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if matches_extension(name, extensions) {
                    files.push(path);
                }
            }
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(MdnbError::NotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(MdnbError::Io)?;
        String::from_utf8(bytes).map_err(|_| MdnbError::Encoding(path.to_path_buf()))
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(MdnbError::Io)?;
            }
        }
        fs::write(path, content).map_err(MdnbError::Io)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(MdnbError::NotFound(path.to_path_buf()));
        }
        fs::read(path).map_err(MdnbError::Io)
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let meta = fs::metadata(path).map_err(MdnbError::Io)?;
        Ok(meta.len())
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(MdnbError::Io)
    }

    fn list_files(&self, dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(MdnbError::Store(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }
        let mut files = Vec::new();
        self.walk(dir, extensions, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
