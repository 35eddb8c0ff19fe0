use std::{fs::File, io::{BufWriter, Write}, path::{Path, PathBuf}};

use tempfile::NamedTempFile;

use crate::error::Result;

/// Write-then-rename wrapper so a failed render never leaves a partial file.
pub struct PendingWrite {
    target: PathBuf,
    tmp: BufWriter<NamedTempFile>,
}

impl PendingWrite {
    /// Open a temp file next to `target`. Refuses to clobber an existing
    /// file unless `force` is set.
    pub fn open(target: &Path, force: bool) -> Result<Self> {
        let parent = target.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        std::fs::create_dir_all(parent)?;
        if !force && target.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("refusing to overwrite existing file: {} (use --force)", target.display()),
            ).into())
        }
        let tmp = NamedTempFile::new_in(parent)?;
        Ok(Self { target: target.to_path_buf(), tmp: BufWriter::new(tmp) })
    }

    /// Flush and atomically move the temp file into place.
    pub fn finalize(self) -> Result<()> {
        let tmp = self.tmp.into_inner().map_err(|e| e.into_error())?;
        tmp.as_file().sync_all().ok(); // best-effort fsync file
        tmp.persist(&self.target).map_err(|e| e.error)?;
        if let Some(dir) = self.target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.tmp.flush() }
}
