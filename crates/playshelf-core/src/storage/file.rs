use std::path::PathBuf;

use anyhow::{Context, Result};

use super::StorageBackend;

/// File-backed storage: each key maps to `<root>/<key>.json`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create the backend, creating `root` if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create storage directory: {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage file: {}", key))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        std::fs::write(self.path_for(key), contents)
            .with_context(|| format!("Failed to write storage file: {}", key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage file: {}", key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.read("missing").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.write("catalog", r#"[{"title":"X"}]"#).unwrap();
        assert_eq!(
            storage.read("catalog").unwrap().as_deref(),
            Some(r#"[{"title":"X"}]"#)
        );
        assert!(dir.path().join("catalog.json").exists());
    }

    #[test]
    fn remove_deletes_and_tolerates_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.write("session", "null").unwrap();
        storage.remove("session").unwrap();
        assert!(storage.read("session").unwrap().is_none());
        storage.remove("session").unwrap();
    }
}
