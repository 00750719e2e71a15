use crate::error::Result;
use crate::model::Document;

pub mod add;
pub mod help;
pub mod list;
pub mod quiz;
pub mod remove;

/// How a command that takes several arguments reacts when one of them fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Stop at the first failing argument and return its error.
    /// Whatever succeeded before it is kept.
    FailFast,
    /// Report the failure as an error message and carry on with the next argument.
    BestEffort,
}

/// Applies `op` to every item under `policy`.
pub(crate) fn run_batch<T, F>(
    items: &[T],
    policy: BatchPolicy,
    result: &mut CmdResult,
    mut op: F,
) -> Result<()>
where
    F: FnMut(&T, &mut CmdResult) -> Result<()>,
{
    for item in items {
        if let Err(e) = op(item, result) {
            match policy {
                BatchPolicy::FailFast => return Err(e),
                BatchPolicy::BestEffort => result.add_message(CmdMessage::error(e.to_string())),
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_docs: Vec<Document>,
    pub listed_docs: Vec<Document>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_docs(mut self, docs: Vec<Document>) -> Self {
        self.listed_docs = docs;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
