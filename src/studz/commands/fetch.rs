use crate::commands::{CmdMessage, CmdResult};
use crate::docs::{self, Downloader};
use crate::error::{Result, StudzError};
use std::fs;
use std::path::Path;

/// Document retrieval: reuse the cached copy when present, otherwise
/// download and cache. Failures propagate with the raw error text; the
/// CLI surfaces them as a blocking error.
pub fn run<D: Downloader>(downloader: &D, cache_dir: &Path, url: &str) -> Result<CmdResult> {
    let path = docs::cache_path(cache_dir, url)?;
    let mut result = CmdResult::default();

    if path.exists() {
        result.add_message(CmdMessage::info(format!(
            "Using cached copy of {}",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| url.to_string())
        )));
        return Ok(result.with_document(path));
    }

    let bytes = downloader
        .download(url)
        .map_err(|e| StudzError::Document(e.to_string()))?;

    fs::create_dir_all(cache_dir).map_err(StudzError::Io)?;
    fs::write(&path, bytes).map_err(StudzError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Downloaded to {}",
        path.display()
    )));
    Ok(result.with_document(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CountingDownloader {
        calls: RefCell<usize>,
        body: Vec<u8>,
    }

    impl CountingDownloader {
        fn new(body: &[u8]) -> Self {
            Self {
                calls: RefCell::new(0),
                body: body.to_vec(),
            }
        }
    }

    impl Downloader for CountingDownloader {
        fn download(&self, _url: &str) -> Result<Vec<u8>> {
            *self.calls.borrow_mut() += 1;
            Ok(self.body.clone())
        }
    }

    struct FailingDownloader;

    impl Downloader for FailingDownloader {
        fn download(&self, _url: &str) -> Result<Vec<u8>> {
            Err(StudzError::Store("connection refused".to_string()))
        }
    }

    #[test]
    fn downloads_into_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = CountingDownloader::new(b"pdf bytes");

        let result = run(
            &downloader,
            dir.path(),
            "https://example.edu/docs/SQL Basics.pdf",
        )
        .unwrap();

        let path = result.document.unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"pdf bytes");
        assert_eq!(*downloader.calls.borrow(), 1);
    }

    #[test]
    fn cached_copies_are_not_downloaded_again() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = CountingDownloader::new(b"pdf bytes");
        let url = "https://example.edu/docs/notes.pdf";

        run(&downloader, dir.path(), url).unwrap();
        let result = run(&downloader, dir.path(), url).unwrap();

        assert_eq!(*downloader.calls.borrow(), 1);
        assert!(result.document.unwrap().exists());
    }

    #[test]
    fn download_failures_carry_the_raw_error_text() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &FailingDownloader,
            dir.path(),
            "https://example.edu/docs/notes.pdf",
        )
        .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn unusable_urls_are_rejected_before_downloading() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = CountingDownloader::new(b"");

        assert!(run(&downloader, dir.path(), "https://example.edu/").is_err());
        assert_eq!(*downloader.calls.borrow(), 0);
    }
}
