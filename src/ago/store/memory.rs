use super::DocStore;
use crate::config::doc_dir_name;
use crate::error::{AgoError, Result};
use crate::model::DocumentsInfo;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    info: Option<DocumentsInfo>,
    docs: BTreeMap<u64, (String, Vec<u8>)>,
    failing_writes: Vec<String>,
    failing_removes: Vec<u64>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `write_doc` fail for documents called `name`.
    pub fn fail_writes_for(mut self, name: &str) -> Self {
        self.failing_writes.push(name.to_string());
        self
    }

    /// Make `remove_doc` fail for `id`, leaving its content in place.
    pub fn fail_removes_for(mut self, id: u64) -> Self {
        self.failing_removes.push(id);
        self
    }

    pub fn fail_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn content(&self, id: u64) -> Option<&[u8]> {
        self.docs.get(&id).map(|(_, bytes)| bytes.as_slice())
    }

    pub fn doc_ids(&self) -> Vec<u64> {
        self.docs.keys().copied().collect()
    }

    pub fn saved_info(&self) -> Option<&DocumentsInfo> {
        self.info.as_ref()
    }

    /// Number of successful `save_info` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DocStore for InMemoryStore {
    fn load_info(&self) -> Result<DocumentsInfo> {
        Ok(self.info.clone().unwrap_or_default())
    }

    fn save_info(&mut self, info: &DocumentsInfo) -> Result<()> {
        if self.fail_saves {
            return Err(AgoError::file_op(
                "write doc info file",
                "memory",
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.info = Some(info.clone());
        self.saves += 1;
        Ok(())
    }

    fn write_doc(&mut self, id: u64, name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = PathBuf::from(doc_dir_name(id)).join(name);
        if self.failing_writes.iter().any(|n| n == name) {
            return Err(AgoError::file_op(
                "write file",
                path,
                io::Error::new(io::ErrorKind::Other, "disk full"),
            ));
        }
        self.docs.insert(id, (name.to_string(), content.to_vec()));
        Ok(path)
    }

    fn remove_doc(&mut self, id: u64) -> Result<()> {
        if self.failing_removes.contains(&id) {
            return Err(AgoError::file_op(
                "remove dir",
                doc_dir_name(id),
                io::Error::new(io::ErrorKind::PermissionDenied, "busy"),
            ));
        }
        self.docs.remove(&id);
        Ok(())
    }
}
