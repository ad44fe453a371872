// playlog_core/src/prompt.rs
use crate::completion::Suggestions;
use crate::error::Result;

/// Source of operator answers, one line per call.
pub trait LinePrompter {
    /// Show `label` and return the raw line, offering `suggestions` for
    /// completion. Cancelled input is `PlaylogError::Interrupted`.
    fn read_line(&mut self, label: &str, suggestions: Suggestions) -> Result<String>;
}
