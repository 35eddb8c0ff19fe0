use std::{path::PathBuf, sync::Arc};

use crate::error::{EdumapError, Result};

/// Read-only access to one JSON document (topology or education records).
pub trait DocumentSource: Send + Sync {
    /// Fetch the whole document.
    fn fetch(&self) -> Result<Arc<[u8]>>;

    /// Human-readable location for logs and errors.
    fn describe(&self) -> String;
}

/// Document stored on local disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<Arc<[u8]>> {
        std::fs::read(&self.path)
            .map(Arc::from)
            .map_err(|e| EdumapError::fetch(self.describe(), e))
    }

    fn describe(&self) -> String { self.path.display().to_string() }
}

/// Document already held in memory.
#[derive(Debug, Clone)]
pub struct MemSource {
    name: String,
    bytes: Arc<[u8]>,
}

impl MemSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }
}

impl DocumentSource for MemSource {
    fn fetch(&self) -> Result<Arc<[u8]>> { Ok(self.bytes.clone()) }

    fn describe(&self) -> String { format!("memory:{}", self.name) }
}

#[inline]
pub(crate) fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(&*source.fetch().unwrap(), b"[1, 2, 3]");
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch(), Err(EdumapError::Fetch { .. })));
    }

    #[test]
    fn remote_locations_are_detected_by_scheme() {
        assert!(is_remote("https://cdn.example.org/counties.json"));
        assert!(is_remote("http://localhost:8000/a.json"));
        assert!(!is_remote("data/counties.json"));
        assert!(!is_remote("/tmp/https-cache.json"));
    }
}
