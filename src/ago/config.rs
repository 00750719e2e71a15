//! Location and layout of the metadata directory.
//!
//! Everything ago persists lives under a single root:
//!
//! ```text
//! $HOME/.ago/
//! ├── docs/
//! │   ├── info          # document-info file (JSON)
//! │   ├── doc0/a.txt    # private copy of each registered document
//! │   └── doc1/b.txt
//! └── words             # word-info file, reserved
//! ```

use std::path::{Path, PathBuf};

pub const ROOT_DIR_NAME: &str = ".ago";
pub const DOCS_DIR: &str = "docs";
pub const DOC_INFO: &str = "info";
pub const WORD_INFO: &str = "words";
/// Prefix of each per-document directory, followed by the document id.
pub const DOC_DIR_PREFIX: &str = "doc";

const DEFAULT_BASE_DIR: &str = "/tmp";
const ANDROID_OS: &str = "android";
const ANDROID_BASE_DIR: &str = "/data/local/tmp";
const HOME_VAR: &str = "HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgoPaths {
    pub root: PathBuf,
    pub docs_dir: PathBuf,
    pub doc_info: PathBuf,
    pub word_info: PathBuf,
}

impl AgoPaths {
    /// Resolves the metadata root from `$HOME` and the running OS.
    pub fn from_env() -> Self {
        let home = std::env::var(HOME_VAR).ok();
        Self::from_base(resolve_base(std::env::consts::OS, home.as_deref()))
    }

    /// Lays the tree out under `<base>/.ago`.
    pub fn from_base(base: impl AsRef<Path>) -> Self {
        let root = base.as_ref().join(ROOT_DIR_NAME);
        let docs_dir = root.join(DOCS_DIR);
        Self {
            doc_info: docs_dir.join(DOC_INFO),
            word_info: root.join(WORD_INFO),
            docs_dir,
            root,
        }
    }

    pub fn doc_dir(&self, id: u64) -> PathBuf {
        self.docs_dir.join(doc_dir_name(id))
    }
}

pub fn doc_dir_name(id: u64) -> String {
    format!("{}{}", DOC_DIR_PREFIX, id)
}

/// Picks the directory `.ago` is created in.
///
/// `HOME` is checked after the platform default, so when it is set it wins
/// over the Android temp dir as well.
pub fn resolve_base(os: &str, home: Option<&str>) -> PathBuf {
    let mut base = PathBuf::from(DEFAULT_BASE_DIR);
    if os == ANDROID_OS {
        base = PathBuf::from(ANDROID_BASE_DIR);
    }
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        base = PathBuf::from(home);
    }
    base
}
