//! Vocabulary analysis hook.
//!
//! Every document added to the store passes through a [`WordAnalyzer`] before
//! it is copied. Per-word frequencies (overall and per document), user scores
//! and meanings are meant to end up in the word-info file, but none of that
//! exists yet: the only implementation is [`PendingAnalyzer`], and the
//! word-info file stays empty.

use crate::error::Result;
use log::debug;

pub trait WordAnalyzer {
    fn analyze(&self, name: &str, content: &[u8]) -> Result<()>;
}

/// Placeholder until word analysis is implemented. Records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingAnalyzer;

impl WordAnalyzer for PendingAnalyzer {
    fn analyze(&self, name: &str, content: &[u8]) -> Result<()> {
        debug!("analyze {}...\n{}", name, String::from_utf8_lossy(content));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_analyzer_accepts_anything() {
        assert!(PendingAnalyzer.analyze("a.txt", b"some words").is_ok());
        assert!(PendingAnalyzer.analyze("bin", &[0xff, 0xfe]).is_ok());
    }
}
