use crate::commands::{run_batch, BatchPolicy, CmdMessage, CmdResult};
use crate::error::{AgoError, Result};
use crate::model::{Document, DocumentsInfo};
use crate::store::DocStore;

/// Every id is tried; failures are reported per argument.
pub const POLICY: BatchPolicy = BatchPolicy::BestEffort;

pub fn run<S, I>(store: &mut S, info: &mut DocumentsInfo, ids: &[I]) -> Result<CmdResult>
where
    S: DocStore,
    I: AsRef<str>,
{
    let mut result = CmdResult::default();

    run_batch(ids, POLICY, &mut result, |arg, result| {
        let id = parse_id(arg.as_ref())?;
        let doc = remove_doc(store, info, id).map_err(|e| AgoError::RemoveDoc {
            id,
            source: Box::new(e),
        })?;
        result.add_message(CmdMessage::success(format!(
            "Document removed ({}): {}",
            doc.id, doc.name
        )));
        result.affected_docs.push(doc);
        Ok(())
    })?;

    Ok(result)
}

/// Accepts plain decimal ids only; signs and surrounding whitespace are rejected.
pub fn parse_id(arg: &str) -> Result<u64> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AgoError::InvalidId(arg.to_string()));
    }
    arg.parse().map_err(|_| AgoError::InvalidId(arg.to_string()))
}

/// Deletes the copy of document `id` and drops its record.
///
/// The record is only dropped once the directory is gone. `next_id` is left alone.
pub fn remove_doc<S: DocStore>(
    store: &mut S,
    info: &mut DocumentsInfo,
    id: u64,
) -> Result<Document> {
    if info.find(id).is_none() {
        return Err(AgoError::DocNotFound(id));
    }
    store.remove_doc(id)?;
    info.remove(id).ok_or(AgoError::DocNotFound(id))
}
