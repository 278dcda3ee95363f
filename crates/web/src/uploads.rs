//! Image upload handling for logos and signatures.
//!
//! Uploaded files land in a static-served directory and are referenced from
//! the store by public path. Filenames are sanitized before anything touches
//! the filesystem; the allowed extension set is images only.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extensions accepted for uploads (matched case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Errors from the upload handler.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Missing extension, extension outside the allowed set, or a filename
    /// that is empty once sanitized.
    #[error("file type not allowed")]
    InvalidFileType,

    /// The upload field was missing or had no filename.
    #[error("no file provided")]
    NoFileProvided,

    /// Writing the file failed.
    #[error("upload I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes uploads into a fixed directory and hands back public paths.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    public_base: String,
}

impl UploadStore {
    /// Create an upload store writing into `dir`.
    ///
    /// `public_base` is the URL prefix the rendering layer uses to reference
    /// saved files, e.g. `/static/uploads`.
    pub fn new(dir: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base: public_base.into(),
        }
    }

    /// Directory uploads are written into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save an uploaded file and return its public path.
    ///
    /// The filename is sanitized and must carry an allowed image extension.
    /// Re-uploading the same filename overwrites the previous file.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::NoFileProvided` for an empty filename,
    /// `UploadError::InvalidFileType` for a disallowed or unusable name, and
    /// `UploadError::Io` if the write fails.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, UploadError> {
        if filename.trim().is_empty() {
            return Err(UploadError::NoFileProvided);
        }
        if !allowed_file(filename) {
            return Err(UploadError::InvalidFileType);
        }
        let safe = sanitize_filename(filename);
        if safe.is_empty() || !allowed_file(&safe) {
            return Err(UploadError::InvalidFileType);
        }

        std::fs::create_dir_all(&self.dir).map_err(|source| UploadError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let target = self.dir.join(&safe);
        std::fs::write(&target, bytes).map_err(|source| UploadError::Io {
            path: target.clone(),
            source,
        })?;

        tracing::info!(file = %safe, size = bytes.len(), "Stored upload");
        Ok(format!("{}/{safe}", self.public_base))
    }
}

/// Whether a filename carries an allowed image extension.
#[must_use]
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Reduce an untrusted filename to a safe basename.
///
/// Strips any path components (forward or backward slashes), replaces
/// characters outside `[A-Za-z0-9._-]` with underscores, and trims leading
/// dots so the result can never escape the upload directory or hide as a
/// dotfile.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions_any_case() {
        assert!(allowed_file("logo.png"));
        assert!(allowed_file("logo.PNG"));
        assert!(allowed_file("scan.Jpeg"));
        assert!(allowed_file("sig.GIF"));
        assert!(allowed_file("photo.jpg"));
    }

    #[test]
    fn test_disallowed_extensions_rejected() {
        assert!(!allowed_file("payload.exe"));
        assert!(!allowed_file("notes.txt"));
        assert!(!allowed_file("archive.png.zip"));
        assert!(!allowed_file("noextension"));
        assert!(!allowed_file(".png"));
    }

    #[test]
    fn test_sanitize_strips_path_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_filename("/var/tmp/logo.png"), "logo.png");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("my logo (1).png"), "my_logo__1_.png");
        assert_eq!(sanitize_filename("rechnung€.png"), "rechnung_.png");
        assert_eq!(sanitize_filename("...hidden.png"), "hidden.png");
    }

    #[test]
    fn test_save_rejects_exe() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadStore::new(dir.path(), "/static/uploads");
        let err = uploads.save("payload.exe", b"MZ").unwrap_err();
        assert!(matches!(err, UploadError::InvalidFileType));
    }

    #[test]
    fn test_save_rejects_empty_filename() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadStore::new(dir.path(), "/static/uploads");
        let err = uploads.save("", b"data").unwrap_err();
        assert!(matches!(err, UploadError::NoFileProvided));
    }

    #[test]
    fn test_save_writes_file_and_returns_public_path() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadStore::new(dir.path(), "/static/uploads");

        let path = uploads.save("logo.png", b"\x89PNG").unwrap();
        assert_eq!(path, "/static/uploads/logo.png");
        assert_eq!(
            std::fs::read(dir.path().join("logo.png")).unwrap(),
            b"\x89PNG"
        );
    }

    #[test]
    fn test_save_confines_traversal_to_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadStore::new(dir.path().join("uploads"), "/static/uploads");

        let path = uploads.save("../../escape.png", b"data").unwrap();
        assert_eq!(path, "/static/uploads/escape.png");
        assert!(dir.path().join("uploads/escape.png").exists());
        assert!(!dir.path().join("escape.png").exists());
    }

    #[test]
    fn test_save_overwrites_same_filename() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadStore::new(dir.path(), "/static/uploads");

        uploads.save("sig.png", b"first").unwrap();
        uploads.save("sig.png", b"second").unwrap();
        assert_eq!(std::fs::read(dir.path().join("sig.png")).unwrap(), b"second");
    }
}
