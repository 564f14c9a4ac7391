//! Document writes that never expose a partial file

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// A sibling temp file that is removed unless it is committed over its target.
struct StagedFile {
    path: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Stage next to `target` so the final rename stays on one filesystem.
    fn beside(target: &NormalizedPath) -> Self {
        let name = format!(
            ".{}.{}.tmp",
            target.file_name().unwrap_or("document"),
            std::process::id()
        );
        Self {
            path: target.to_native().with_file_name(name),
            committed: false,
        }
    }

    fn fill(&self, lock_path: &Path, content: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;

        file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: lock_path.to_path_buf(),
        })?;
        let written = write_synced(&mut file, content).map_err(|e| Error::io(&self.path, e));
        // Unlock even when the write failed; the write error takes precedence
        let unlocked = FileExt::unlock(&file).map_err(|_| Error::LockFailed {
            path: lock_path.to_path_buf(),
        });
        written.and(unlocked)
    }

    fn commit(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target).map_err(|e| Error::io(target, e))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

fn write_synced(file: &mut File, content: &[u8]) -> std::io::Result<()> {
    file.write_all(content)?;
    file.sync_all()
}

/// Replace the file at `path` with `content`, creating parent directories.
///
/// Readers see either the previous document or the complete new one. On
/// failure the temp file is removed and the target is left untouched.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let staged = StagedFile::beside(path);
    staged.fill(&target, content)?;
    staged.commit(&target)?;

    tracing::debug!(%path, bytes = content.len(), "Replaced document");
    Ok(())
}

/// Read a text document. A missing file yields [`Error::NotFound`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
