//! Download action — serializes a rendered document and persists it to disk.
//!
//! The sink is a trait seam so the session can be exercised without touching
//! the filesystem. The default [`FileSink`] stages content in a named temp
//! file and persists it to the final name; the temp handle is consumed on
//! success and dropped (removing the file) on every failure path.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Derives the output filename from a portfolio name: lowercased, every
/// whitespace run collapsed to a single hyphen (leading and trailing runs
/// included), suffixed `-portfolio.html`.
pub fn document_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_run {
                slug.push('-');
                in_run = true;
            }
        } else {
            slug.push(ch);
            in_run = false;
        }
    }
    format!("{slug}-portfolio.html")
}

/// Destination for a serialized document. Pluggable — the default writes to
/// the local filesystem; tests substitute failing or recording sinks.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Persists `content` under `filename`, returning the final location.
    async fn save(&self, filename: &str, content: Bytes) -> Result<PathBuf, AppError>;
}

/// Filesystem sink: stages the document in a temp file inside the target
/// directory, then persists it to the final name. Repeated saves of the same
/// filename overwrite the previous document.
pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl DocumentSink for FileSink {
    async fn save(&self, filename: &str, content: Bytes) -> Result<PathBuf, AppError> {
        let out_dir = self.out_dir.clone();
        let filename = filename.to_string();

        // Blocking filesystem work runs inside spawn_blocking.
        tokio::task::spawn_blocking(move || -> Result<PathBuf, AppError> {
            std::fs::create_dir_all(&out_dir)?;

            let mut staged = NamedTempFile::new_in(&out_dir)?;
            staged.write_all(&content)?;
            staged.flush()?;

            let target = out_dir.join(&filename);
            staged.persist(&target).map_err(|e| AppError::Io(e.error))?;
            Ok(target)
        })
        .await
        .map_err(|e| AppError::Download(format!("save task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_filename_lowercases_and_hyphenates() {
        assert_eq!(document_filename("Alex Rivera"), "alex-rivera-portfolio.html");
    }

    #[test]
    fn test_document_filename_collapses_whitespace_runs() {
        assert_eq!(
            document_filename("Alex   Q.\tRivera"),
            "alex-q.-rivera-portfolio.html"
        );
    }

    #[test]
    fn test_document_filename_keeps_edge_runs_as_hyphens() {
        assert_eq!(document_filename(" Ada "), "-ada--portfolio.html");
    }

    #[tokio::test]
    async fn test_file_sink_persists_content() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());

        let path = sink
            .save("ada-portfolio.html", Bytes::from_static(b"<html>doc</html>"))
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("ada-portfolio.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>doc</html>");
    }

    #[tokio::test]
    async fn test_file_sink_overwrites_on_repeated_saves() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());

        sink.save("doc.html", Bytes::from_static(b"first")).await.unwrap();
        let path = sink.save("doc.html", Bytes::from_static(b"second")).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        // Only the final document remains — no staged files leak.
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_file_sink_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("nested/out"));

        let path = sink.save("doc.html", Bytes::from_static(b"x")).await.unwrap();
        assert!(path.exists());
    }
}
