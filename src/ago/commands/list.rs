use crate::commands::CmdResult;
use crate::model::DocumentsInfo;

pub fn run(info: &DocumentsInfo) -> CmdResult {
    CmdResult::default().with_listed_docs(info.docs.clone())
}
