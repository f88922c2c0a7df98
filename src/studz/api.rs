//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all studz operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries the injected backends** (saved-items store, base paths)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! External clients (assistant, course backend, downloader) are passed per
//! call rather than stored: they are only needed by a few operations and
//! keeping them out of the struct means the common catalog operations never
//! construct an HTTP client.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over SavedStore
//!
//! `StudzApi<S: SavedStore>` is generic over the storage backend:
//! - Production: `StudzApi<FileStore>`
//! - Testing: `StudzApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::assistant::CompletionApi;
use crate::backend::{AuthApi, Profile, Registration};
use crate::commands;
use crate::docs::Downloader;
use crate::error::Result;
use crate::filter::Filter;
use crate::store::SavedStore;
use chrono::NaiveDate;

/// The main API facade for studz operations.
///
/// Generic over `SavedStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct StudzApi<S: SavedStore> {
    store: S,
    paths: commands::StudzPaths,
}

impl<S: SavedStore> StudzApi<S> {
    pub fn new(store: S, paths: commands::StudzPaths) -> Self {
        Self { store, paths }
    }

    pub fn home(&self, profile: Option<&Profile>) -> Result<commands::CmdResult> {
        commands::home::run(profile)
    }

    pub fn topics(
        &self,
        query: &str,
        filters: &[Filter],
        popular: bool,
    ) -> Result<commands::CmdResult> {
        commands::topics::run(&self.store, query, filters, popular)
    }

    pub fn events(
        &self,
        query: &str,
        filters: &[Filter],
        date: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        commands::events::run(query, filters, date)
    }

    pub fn explore(&self, school: &str, query: &str) -> Result<commands::CmdResult> {
        commands::explore::run(school, query)
    }

    pub fn subjects(&self, school: &str, query: &str) -> Result<commands::CmdResult> {
        commands::subjects::run(school, query)
    }

    pub fn quizzes(&self, topic: &str) -> Result<commands::CmdResult> {
        commands::quizzes::run(topic)
    }

    pub fn toggle_save(
        &mut self,
        title: &str,
        description: &str,
        icon: &str,
    ) -> Result<commands::CmdResult> {
        commands::saved::toggle(&mut self.store, title, description, icon)
    }

    pub fn remove_saved(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::saved::remove(&mut self.store, title)
    }

    pub fn saved(&self) -> Result<commands::CmdResult> {
        commands::saved::list(&self.store)
    }

    pub fn ask<C: CompletionApi>(&self, client: &C, message: &str) -> Result<commands::CmdResult> {
        commands::ask::run(client, message)
    }

    pub fn fetch_document<D: Downloader>(
        &self,
        downloader: &D,
        url: &str,
    ) -> Result<commands::CmdResult> {
        commands::fetch::run(downloader, &self.paths.cache, url)
    }

    pub fn login<A: AuthApi>(
        &self,
        client: &A,
        email: &str,
        password: &str,
    ) -> Result<commands::CmdResult> {
        commands::login::run(client, &self.paths.config, email, password)
    }

    pub fn signup<A: AuthApi>(
        &self,
        client: &A,
        registration: &Registration,
    ) -> Result<commands::CmdResult> {
        commands::login::signup(client, &self.paths.config, registration)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::StudzPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StudzPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> StudzApi<InMemoryStore> {
        StudzApi::new(
            InMemoryStore::new(),
            StudzPaths {
                config: PathBuf::from("/unused"),
                data: PathBuf::from("/unused"),
                cache: PathBuf::from("/unused"),
            },
        )
    }

    #[test]
    fn topics_dispatches_with_store_state() {
        let mut api = api();
        api.toggle_save("Databases", "SQL and NoSQL systems.", "database")
            .unwrap();

        let result = api.topics("", &[], false).unwrap();
        assert_eq!(result.sections.len(), 3);
        assert_eq!(result.saved_items.len(), 1);
    }

    #[test]
    fn saved_reflects_toggles() {
        let mut api = api();
        api.toggle_save("X", "d", "i").unwrap();
        api.toggle_save("Y", "d", "i").unwrap();
        api.toggle_save("X", "d", "i").unwrap();

        let result = api.saved().unwrap();
        let titles: Vec<_> = result.saved_items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Y"]);
    }
}
