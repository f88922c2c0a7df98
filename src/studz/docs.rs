//! Document retrieval.
//!
//! Course documents are fetched by URL into a local cache named after the
//! URL's last path segment; a cached copy is reused without re-downloading.
//! Opening hands the cached path to the platform opener, the CLI stand-in
//! for the mobile share sheet.

use crate::error::{Result, StudzError};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

const REQUEST_TIMEOUT_SECONDS: u64 = 60;

pub trait Downloader {
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .map_err(StudzError::Http)?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .bytes()?;
        Ok(bytes.to_vec())
    }
}

/// Derives the cache file name from a URL: its last path segment, with any
/// query or fragment stripped. Returns None when the URL has no usable
/// segment (e.g. ends in `/`).
pub fn file_name_from_url(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
    let rest = without_query
        .split_once("://")
        .map(|(_, r)| r)
        .unwrap_or(without_query);
    let (_, name) = rest.rsplit_once('/')?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Where a document for `url` lives in the cache, whether or not it exists.
pub fn cache_path(cache_dir: &Path, url: &str) -> Result<PathBuf> {
    let name = file_name_from_url(url)
        .ok_or_else(|| StudzError::Document(format!("Cannot derive a file name from {}", url)))?;
    Ok(cache_dir.join(name))
}

/// Opens a file with the platform's default handler.
pub fn open_with_system(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(target_os = "windows")]
    let opener = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let opener = "xdg-open";

    let status = Command::new(opener)
        .arg(path)
        .status()
        .map_err(|e| StudzError::Document(format!("Failed to launch {}: {}", opener, e)))?;

    if !status.success() {
        return Err(StudzError::Document(format!(
            "{} exited with non-zero status for {}",
            opener,
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_the_last_path_segment() {
        assert_eq!(
            file_name_from_url("https://example.edu/docs/SQL%20Basics.pdf"),
            Some("SQL%20Basics.pdf".to_string())
        );
    }

    #[test]
    fn query_and_fragment_are_stripped() {
        assert_eq!(
            file_name_from_url("https://example.edu/a/notes.pdf?token=abc#page=2"),
            Some("notes.pdf".to_string())
        );
    }

    #[test]
    fn urls_without_a_segment_are_rejected() {
        assert!(file_name_from_url("https://example.edu/").is_none());
        assert!(file_name_from_url("https://example.edu").is_none());
    }
}
