//! # Studz Architecture
//!
//! Studz is a **UI-agnostic study-catalog library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Generic over the saved-items store backend               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog & Storage Layer (catalog.rs, store/)               │
//! │  - Bundled catalog tables (read-only)                       │
//! │  - Abstract SavedStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## External Collaborators
//!
//! The assistant endpoint, the course backend, and document downloads live behind
//! small traits ([`assistant::CompletionApi`], [`backend::AuthApi`],
//! [`docs::Downloader`]). Commands receive them as arguments, so every command is
//! testable with stubs—no network, no device storage.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, filter, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web client, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Filter + Commands** (`filter.rs`, `commands/*.rs`): Thorough unit tests of
//!    business logic against `InMemoryStore` and stub clients. This is where the
//!    lion's share of testing lives.
//!
//! 2. **Storage** (`store/`): FileStore round-trips on temp dirs, including the
//!    missing-blob and corrupt-blob paths.
//!
//! 3. **CLI** (`main.rs` + `tests/`): Integration tests drive the real binary
//!    under a `STUDZ_HOME` temp dir and assert on terminal output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The bundled catalog tables
//! - [`filter`]: Query/filter matching over catalog records
//! - [`store`]: Saved-items storage abstraction and implementations
//! - [`model`]: Core data types (`Topic`, `Event`, `SavedItem`, ...)
//! - [`assistant`]: Chat-completion client for the `ask` command
//! - [`backend`]: Course-backend auth client and local session
//! - [`docs`]: Document download cache and platform opener
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod assistant;
pub mod backend;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod docs;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
