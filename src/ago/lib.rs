//! # ago Architecture
//!
//! ago is a small document organizer: it keeps private copies of text files the
//! user registers, numbered by a never-reused id, and is meant to grow a
//! vocabulary-analysis layer on top of them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout and exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bootstrap (init.rs) + API Layer (api.rs)                   │
//! │  - Resolves the metadata root, loads or creates the store   │
//! │  - Owns the collection, flushes it after mutating commands  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / remove / list, batch failure policies              │
//! │  - Operates on an explicit `DocumentsInfo`                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DocStore` trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing prints or exits. Diagnostics go through the
//! `log` facade; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Document` and `DocumentsInfo`
//! - [`config`]: Metadata root resolution and on-disk layout
//! - [`init`]: First-run setup and loading
//! - [`words`]: Word-analysis hook (placeholder)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod words;
