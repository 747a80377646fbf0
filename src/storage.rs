use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Writes uploaded files under a single directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        UploadStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves `bytes` as `<dir>/<filename>`. `filename` must already be sanitized.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Reduces a client-supplied filename to a safe single path component.
///
/// Only the last component is kept, whitespace becomes `_`, and anything
/// other than ASCII alphanumerics, `.`, `_`, `-` is dropped. Leading and
/// trailing `.`/`_` are stripped; an empty result becomes `upload`.
pub fn sanitize_filename(raw: &str) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = last
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                Some(c)
            } else {
                None
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        "upload".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories_and_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\scans\\brain.png"), "brain.png");
        assert_eq!(sanitize_filename(".."), "upload");
    }

    #[test]
    fn replaces_whitespace_and_drops_symbols() {
        assert_eq!(sanitize_filename("my scan (1).png"), "my_scan_1.png");
        assert_eq!(sanitize_filename("  .hidden.jpg"), "hidden.jpg");
        assert_eq!(sanitize_filename("résumé.jpeg"), "rsum.jpeg");
    }

    #[test]
    fn empty_name_falls_back() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("???"), "upload");
    }

    #[test]
    fn save_creates_directory_and_writes() {
        let dir = std::env::temp_dir().join(format!("neuroscan-store-{}", std::process::id()));
        let store = UploadStore::new(dir.join("nested"));
        let path = store.save("scan.png", b"bytes").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"bytes");
        std::fs::remove_dir_all(&dir).ok();
    }
}
