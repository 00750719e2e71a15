//! # Storage Layer
//!
//! [`DocStore`] covers everything ago keeps on disk: the document-info file and
//! the per-document directories holding private copies.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage under the metadata root
//!   - Metadata in `docs/info` (JSON, rewritten whole on every save)
//!   - Copies in `docs/doc{id}/{original name}`
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Can be told to fail writes, to exercise the batch policies
//!
//! The store never holds the live collection. Commands load a
//! [`DocumentsInfo`], mutate it, and hand it back to [`DocStore::save_info`];
//! there is no incremental per-record write.

use crate::error::Result;
use crate::model::DocumentsInfo;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait DocStore {
    /// Read and parse the document-info file.
    fn load_info(&self) -> Result<DocumentsInfo>;

    /// Overwrite the document-info file with `info`.
    fn save_info(&mut self, info: &DocumentsInfo) -> Result<()>;

    /// Create the directory for `id` and write `content` into it as `name`.
    /// Returns the path of the copy.
    fn write_doc(&mut self, id: u64, name: &str, content: &[u8]) -> Result<PathBuf>;

    /// Remove the directory for `id` with everything in it.
    /// A directory that is already gone is not an error.
    fn remove_doc(&mut self, id: u64) -> Result<()>;
}
