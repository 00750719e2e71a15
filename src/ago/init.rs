use crate::api::AgoApi;
use crate::config::AgoPaths;
use crate::error::Result;
use crate::model::DocumentsInfo;
use crate::store::fs::FileStore;
use crate::store::DocStore;
use log::debug;

pub struct AgoContext {
    pub api: AgoApi<FileStore>,
}

/// Loads the collection under `paths`, creating the metadata tree first if
/// this is the first run.
///
/// On a first run the documents directory, an empty word-info file and a
/// document-info file holding an empty collection are created, and the
/// collection is then read back from disk like on any other run.
pub fn initialize(paths: AgoPaths) -> Result<AgoContext> {
    let mut store = FileStore::new(paths);

    if !store.is_initialized() {
        debug!("docs dir is not exists. Create it.");
        store.create_layout()?;
        store.save_info(&DocumentsInfo::new())?;
    }

    let info = store.load_info()?;
    debug!(
        "loaded {} docs from {}",
        info.docs.len(),
        store.paths().doc_info.display()
    );

    Ok(AgoContext {
        api: AgoApi::new(store, info),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgoError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_run_creates_layout() {
        let home = TempDir::new().unwrap();
        let paths = AgoPaths::from_base(home.path());

        let ctx = initialize(paths.clone()).unwrap();

        assert!(paths.docs_dir.is_dir());
        assert!(paths.word_info.is_file());
        assert_eq!(fs::read(&paths.word_info).unwrap(), b"");
        assert_eq!(ctx.api.info(), &DocumentsInfo::new());
        let on_disk = fs::read_to_string(&paths.doc_info).unwrap();
        assert_eq!(on_disk, r#"{"Docs":[],"Next_id":0}"#);
    }

    #[test]
    fn later_runs_load_existing_info() {
        let home = TempDir::new().unwrap();
        let paths = AgoPaths::from_base(home.path());
        fs::create_dir_all(&paths.docs_dir).unwrap();
        fs::write(
            &paths.doc_info,
            r#"{"Docs":[{"Name":"x.txt","Id":3}],"Next_id":5}"#,
        )
        .unwrap();

        let ctx = initialize(paths).unwrap();

        assert_eq!(ctx.api.info().docs.len(), 1);
        assert_eq!(ctx.api.info().docs[0].id, 3);
        assert_eq!(ctx.api.info().next_id, 5);
    }

    #[test]
    fn corrupt_info_is_an_error() {
        let home = TempDir::new().unwrap();
        let paths = AgoPaths::from_base(home.path());
        fs::create_dir_all(&paths.docs_dir).unwrap();
        fs::write(&paths.doc_info, "{not json").unwrap();

        assert!(matches!(
            initialize(paths),
            Err(AgoError::Serialization(_))
        ));
    }

    #[test]
    fn existing_docs_dir_without_info_is_an_error() {
        let home = TempDir::new().unwrap();
        let paths = AgoPaths::from_base(home.path());
        fs::create_dir_all(&paths.docs_dir).unwrap();

        assert!(matches!(initialize(paths), Err(AgoError::FileOp { .. })));
    }
}
