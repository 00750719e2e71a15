use super::DocStore;
use crate::config::AgoPaths;
use crate::error::{AgoError, Result};
use crate::model::DocumentsInfo;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

#[cfg(unix)]
const PRIVATE_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_FILE_MODE: u32 = 0o600;

pub struct FileStore {
    paths: AgoPaths,
}

impl FileStore {
    pub fn new(paths: AgoPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &AgoPaths {
        &self.paths
    }

    /// Whether the documents directory is already there, i.e. this is not a first run.
    pub fn is_initialized(&self) -> bool {
        self.paths.docs_dir.exists()
    }

    /// Create the documents directory and the empty info and words files.
    pub fn create_layout(&self) -> Result<()> {
        create_private_dir(&self.paths.docs_dir)
            .map_err(|e| AgoError::file_op("create docs dir", &self.paths.docs_dir, e))?;

        for file in [&self.paths.doc_info, &self.paths.word_info] {
            write_private(file, b"").map_err(|e| AgoError::file_op("create", file, e))?;
        }
        Ok(())
    }
}

impl DocStore for FileStore {
    fn load_info(&self) -> Result<DocumentsInfo> {
        let path = &self.paths.doc_info;
        let content =
            fs::read_to_string(path).map_err(|e| AgoError::file_op("read doc info file", path, e))?;
        let info: DocumentsInfo = serde_json::from_str(&content)?;
        Ok(info)
    }

    fn save_info(&mut self, info: &DocumentsInfo) -> Result<()> {
        let path = &self.paths.doc_info;
        let content = serde_json::to_vec(info)?;
        write_private(path, &content).map_err(|e| AgoError::file_op("write doc info file", path, e))
    }

    fn write_doc(&mut self, id: u64, name: &str, content: &[u8]) -> Result<PathBuf> {
        let dir = self.paths.doc_dir(id);
        create_private_dir(&dir).map_err(|e| AgoError::file_op("create dir", &dir, e))?;

        let path = dir.join(name);
        write_private(&path, content).map_err(|e| AgoError::file_op("write file", &path, e))?;
        Ok(path)
    }

    fn remove_doc(&mut self, id: u64) -> Result<()> {
        let dir = self.paths.doc_dir(id);
        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AgoError::file_op("remove dir", &dir, e)),
        }
    }
}

fn create_private_dir(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(PRIVATE_DIR_MODE);
    builder.create(path)
}

fn write_private(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(PRIVATE_FILE_MODE);
    let mut file = options.open(path)?;
    file.write_all(content)
}
