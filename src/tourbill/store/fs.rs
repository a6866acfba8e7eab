use super::StorageBackend;
use crate::error::{Result, TourbillError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-per-key backend. Each key maps to a JSON file directly under the
/// data directory; the directory is created lazily on first write.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TourbillError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TourbillError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), value).map_err(TourbillError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(TourbillError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("data"));
        assert!(backend.get("invoices.json").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_dir_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("nested").join("data"));
        backend.set("invoices.json", "[]").unwrap();
        assert_eq!(backend.get("invoices.json").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().to_path_buf());
        backend.remove("sequence.json").unwrap();
        backend.set("sequence.json", "{}").unwrap();
        backend.remove("sequence.json").unwrap();
        assert!(backend.get("sequence.json").unwrap().is_none());
    }
}
