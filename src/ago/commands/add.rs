use crate::commands::{run_batch, BatchPolicy, CmdMessage, CmdResult};
use crate::error::{AgoError, Result};
use crate::model::{Document, DocumentsInfo};
use crate::store::DocStore;
use crate::words::WordAnalyzer;
use std::fs;
use std::path::Path;

/// The first file that cannot be added aborts the rest of the batch.
pub const POLICY: BatchPolicy = BatchPolicy::FailFast;

pub fn run<S, P>(
    store: &mut S,
    info: &mut DocumentsInfo,
    analyzer: &dyn WordAnalyzer,
    paths: &[P],
) -> Result<CmdResult>
where
    S: DocStore,
    P: AsRef<Path>,
{
    let mut result = CmdResult::default();

    run_batch(paths, POLICY, &mut result, |path, result| {
        let path: &Path = path.as_ref();
        let doc = add_doc(store, info, analyzer, path).map_err(|e| AgoError::AddDoc {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        result.add_message(CmdMessage::success(format!(
            "Document added ({}): {}",
            doc.id, doc.name
        )));
        result.affected_docs.push(doc);
        Ok(())
    })?;

    Ok(result)
}

/// Copies `source` into the store under the next free id and records it in `info`.
///
/// `info` only changes once the copy is on disk. Nothing is persisted here.
pub fn add_doc<S: DocStore>(
    store: &mut S,
    info: &mut DocumentsInfo,
    analyzer: &dyn WordAnalyzer,
    source: &Path,
) -> Result<Document> {
    if !source.exists() {
        return Err(AgoError::SourceMissing(source.to_path_buf()));
    }
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| AgoError::NoFileName(source.to_path_buf()))?;
    // No directory is created under an id that cannot be recorded
    info.following_id()?;

    let content = fs::read(source).map_err(|e| AgoError::file_op("read file", source, e))?;
    analyzer.analyze(&name, &content)?;

    store.write_doc(info.next_id, &name, &content)?;
    info.push(name)
}
