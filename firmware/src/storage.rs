use alloc::string::String;
use alloc::vec::Vec;

/// Failure to persist a capture file
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage full: {needed} bytes needed, {available} available")]
    Full { needed: usize, available: usize },

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for finished capture files
pub trait CaptureStorage {
    /// Persist `bytes` under `name`, replacing nothing that already exists
    /// in the same session. Must report every failure.
    fn store(&mut self, name: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// In-memory storage with an optional byte budget
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Vec<(String, Vec<u8>)>,
    capacity: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes once `capacity` bytes are used
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            files: Vec::new(),
            capacity: Some(capacity),
        }
    }

    pub fn used(&self) -> usize {
        self.files.iter().map(|(_, bytes)| bytes.len()).sum()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|(stored, _)| stored == name)
            .map(|(_, bytes)| bytes.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(name, _)| name.as_str())
    }
}

impl CaptureStorage for MemoryStorage {
    fn store(&mut self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity {
            let available = capacity.saturating_sub(self.used());
            if bytes.len() > available {
                return Err(StorageError::Full {
                    needed: bytes.len(),
                    available,
                });
            }
        }

        self.files.push((String::from(name), bytes.to_vec()));
        Ok(())
    }
}

/// Storage writing each capture as a file inside a directory
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl DirStorage {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[cfg(feature = "std")]
impl CaptureStorage for DirStorage {
    fn store(&mut self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        use std::io::Write;

        let path = self.root.join(name);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(bytes)?;
        // surface deferred write errors instead of losing them on drop
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_budget() {
        let mut storage = MemoryStorage::with_capacity(10);

        storage.store("a.bin", &[0; 6]).unwrap();
        let err = storage.store("b.bin", &[0; 6]).unwrap_err();

        assert!(matches!(
            err,
            StorageError::Full {
                needed: 6,
                available: 4
            }
        ));
        assert_eq!(storage.used(), 6);
        assert!(storage.get("b.bin").is_none());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_dir_storage_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirStorage::new(dir.path());

        storage.store("screencap-0.bin", b"DSSC").unwrap();
        assert_eq!(
            std::fs::read(dir.path().join("screencap-0.bin")).unwrap(),
            b"DSSC"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_dir_storage_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirStorage::new(dir.path().join("missing"));

        assert!(matches!(
            storage.store("screencap-0.bin", b"DSSC"),
            Err(StorageError::Io(_))
        ));
    }
}
