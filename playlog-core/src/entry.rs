use tracing::debug;

use crate::completion::{CompletionRules, SuggestionContext};
use crate::domain::Row;
use crate::error::Result;
use crate::prompt::LinePrompter;
use crate::store::TableStore;

/// Asks for one cell per header column, in header order.
pub struct RowBuilder<'a> {
    rules: &'a CompletionRules,
    ctx: SuggestionContext<'a>,
}

impl<'a> RowBuilder<'a> {
    pub fn new(rules: &'a CompletionRules, ctx: SuggestionContext<'a>) -> Self {
        Self { rules, ctx }
    }

    /// Answers are taken verbatim; anything outside the suggestions is fine.
    pub fn build(&self, header: &[String], prompter: &mut dyn LinePrompter) -> Result<Row> {
        let mut row = Vec::with_capacity(header.len());
        for column in header {
            let suggestions = self.rules.suggestions_for(column, &self.ctx)?;
            debug!(column = %column, suggestions = suggestions.items().len(), "prompting");
            let answer = prompter.read_line(&format!("{column}: "), suggestions)?;
            row.push(answer);
        }
        Ok(row)
    }

    /// Build a row for `store` and append it. Nothing is appended when
    /// prompting fails part way.
    pub fn add_row_interactive(
        &self,
        store: &mut TableStore,
        prompter: &mut dyn LinePrompter,
    ) -> Result<()> {
        let row = self.build(store.header(), prompter)?;
        store.append(row)
    }
}
