//! # Storage Layer
//!
//! This module defines the saved-items storage abstraction. The
//! [`SavedStore`] trait lets the application work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole saved-items list lives in one `savedItems.json` blob
//!   - Read wholesale on load, rewritten wholesale after every toggle
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! └── savedItems.json     # JSON array of saved items
//! ```
//!
//! There is no incremental update: every mutation serializes and writes the
//! full list. The list is small (user bookmarks), so the simplicity wins.

use crate::error::Result;
use crate::model::SavedItem;

pub mod fs;
pub mod memory;

/// Abstract interface for saved-items storage.
///
/// Implementations must read and write the list as a whole; callers own
/// any merging or de-duplication.
pub trait SavedStore {
    /// Read the full saved-items list. A backend with nothing stored yet
    /// returns an empty list, not an error.
    fn load(&self) -> Result<Vec<SavedItem>>;

    /// Overwrite the stored list with `items`.
    fn save(&mut self, items: &[SavedItem]) -> Result<()>;
}
