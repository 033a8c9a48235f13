//! Image Store
//!
//! Uploaded files on local disk under the work directory, addressed by
//! a relative key and served back through `/api/images/{key}`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File store rooted at `{work_dir}/images`.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
    public_base: String,
}

impl ImageStore {
    pub fn new(root: PathBuf, public_base_url: &str) -> Self {
        Self {
            root,
            public_base: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a key inside the root, rejecting anything that could
    /// escape it.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.starts_with('/') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        if key.contains("..") || key.contains('\\') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    /// Write a new file. Keys are never overwritten; a clash is an
    /// error so a re-upload cannot clobber an image another row uses.
    pub async fn put(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists(key.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(data).await?;
        Ok(())
    }

    pub async fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Absolute URL clients use to fetch the file.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/api/images/{key}", self.public_base)
    }

    /// Reverse of [`ImageStore::public_url`]. None for URLs this store
    /// did not mint.
    pub fn key_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(&self.public_base)
            .and_then(|rest| rest.strip_prefix("/api/images/"))
            .filter(|key| !key.is_empty())
    }

    /// Best-effort file removal for a stored URL. Failures are logged,
    /// never propagated: the database row is already gone.
    pub async fn remove_by_url(&self, url: &str) -> bool {
        let Some(key) = self.key_from_url(url) else {
            tracing::debug!(url = %url, "Skipping removal of foreign image URL");
            return false;
        };
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Refusing to remove image with bad key");
                return false;
            }
        };
        match fs::remove_file(&path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to remove image file");
                false
            }
        }
    }

    /// Key for a fresh upload: `{car_id}/{millis}-{name}` for variant
    /// shots, `{millis}-{name}` otherwise.
    pub fn make_key(car_id: Option<i64>, file_name: &str) -> String {
        let base = sanitize_file_name(file_name);
        let ts = shared::util::now_millis();
        match car_id {
            Some(id) => format!("{id}/{ts}-{base}"),
            None => format!("{ts}-{base}"),
        }
    }
}

/// Strip any path component and anything outside [a-zA-Z0-9._-].
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store(root: &Path) -> ImageStore {
        ImageStore::new(root.to_path_buf(), "http://localhost:3000/")
    }

    #[test]
    fn sanitizes_hostile_file_names() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("photo 1 (2).png"), "photo_1__2_.png");
        assert_eq!(sanitize_file_name("..."), "file");
        assert_eq!(sanitize_file_name("C:\\temp\\shot.jpg"), "shot.jpg");
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        assert!(matches!(
            store.path_for("../outside.png"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.path_for("/absolute.png"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.path_for(""), Err(StoreError::InvalidKey(_))));
        assert!(store.path_for("123/ok.png").is_ok());
    }

    #[test]
    fn url_round_trips_through_key() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        let url = store.public_url("55/cover.png");
        assert_eq!(url, "http://localhost:3000/api/images/55/cover.png");
        assert_eq!(store.key_from_url(&url), Some("55/cover.png"));
        assert_eq!(store.key_from_url("https://elsewhere.example/x.png"), None);
    }

    #[tokio::test]
    async fn put_read_remove_cycle() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        store.put("7/a.png", b"png-bytes").await.unwrap();
        assert_eq!(store.read("7/a.png").await.unwrap(), b"png-bytes");

        // Same key cannot be written twice
        assert!(matches!(
            store.put("7/a.png", b"other").await,
            Err(StoreError::AlreadyExists(_))
        ));

        let url = store.public_url("7/a.png");
        assert!(store.remove_by_url(&url).await);
        assert!(matches!(
            store.read("7/a.png").await,
            Err(StoreError::NotFound(_))
        ));
        // Second removal is a no-op
        assert!(!store.remove_by_url(&url).await);
    }
}
