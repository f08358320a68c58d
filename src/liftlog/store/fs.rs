use super::StorageBackend;
use crate::error::{LiftlogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: one `<key>.json` file per logical key inside a single
/// data directory. The directory is created on first write.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LiftlogError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(LiftlogError::Io)?;
        Ok(Some(payload))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), payload).map_err(LiftlogError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_dir_and_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("data"));

        backend.write("savedTrainings", "[]").unwrap();
        assert_eq!(
            backend.read("savedTrainings").unwrap(),
            Some("[]".to_string())
        );
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.read("dailyFoods").unwrap(), None);
    }

    #[test]
    fn write_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());

        backend.write("appSettings", "{\"darkMode\":true}").unwrap();
        backend.write("appSettings", "{}").unwrap();
        assert_eq!(backend.read("appSettings").unwrap(), Some("{}".to_string()));
    }
}
