//! # API Facade
//!
//! [`AgoApi`] is the single entry point for ago operations. It owns the three
//! pieces of state a command run needs:
//!
//! - the [`DocStore`] the documents and the info file live in
//! - the in-memory [`DocumentsInfo`] loaded at startup
//! - the [`WordAnalyzer`] every added document is shown to
//!
//! Commands borrow that state explicitly; nothing is process-global.
//!
//! ## Persistence
//!
//! Mutating operations (`add_docs`, `remove_docs`) flush the collection exactly
//! once, after the whole batch ran, including when an add batch stopped early.
//! A failed flush is logged and otherwise ignored, so the info file on disk can
//! lag behind the document directories.

use crate::commands;
use crate::error::Result;
use crate::model::DocumentsInfo;
use crate::store::DocStore;
use crate::words::{PendingAnalyzer, WordAnalyzer};
use log::error;
use std::path::Path;

pub struct AgoApi<S: DocStore> {
    store: S,
    info: DocumentsInfo,
    analyzer: Box<dyn WordAnalyzer>,
}

impl<S: DocStore> AgoApi<S> {
    pub fn new(store: S, info: DocumentsInfo) -> Self {
        Self {
            store,
            info,
            analyzer: Box::new(PendingAnalyzer),
        }
    }

    pub fn with_analyzer(mut self, analyzer: impl WordAnalyzer + 'static) -> Self {
        self.analyzer = Box::new(analyzer);
        self
    }

    pub fn list_docs(&self) -> commands::CmdResult {
        commands::list::run(&self.info)
    }

    pub fn add_docs<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<commands::CmdResult> {
        let outcome = commands::add::run(
            &mut self.store,
            &mut self.info,
            self.analyzer.as_ref(),
            paths,
        );
        self.flush();
        outcome
    }

    pub fn remove_docs<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let outcome = commands::remove::run(&mut self.store, &mut self.info, ids);
        self.flush();
        outcome
    }

    pub fn test<A: AsRef<str>>(&self, args: &[A]) -> commands::CmdResult {
        commands::quiz::run(args)
    }

    pub fn help(&self) -> commands::CmdResult {
        commands::help::run()
    }

    pub fn info(&self) -> &DocumentsInfo {
        &self.info
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn flush(&mut self) {
        if let Err(e) = self.store.save_info(&self.info) {
            error!("failed to write doc info: {}", e);
        }
    }
}

pub use commands::{BatchPolicy, CmdMessage, CmdResult, MessageLevel};
