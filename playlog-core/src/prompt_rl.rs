use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::completion::Suggestions;
use crate::error::{PlaylogError, Result};
use crate::prompt::LinePrompter;

/// Completes the whole line (no word delimiters) against the current
/// column's suggestions.
#[derive(Default)]
pub struct ColumnHelper {
    suggestions: Suggestions,
}

impl Helper for ColumnHelper {}

impl Highlighter for ColumnHelper {}

impl Validator for ColumnHelper {}

impl Hinter for ColumnHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for ColumnHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let partial = &line[..pos];
        let candidates = self
            .suggestions
            .matches(partial)
            .into_iter()
            .map(String::from)
            .collect();
        Ok((0, candidates))
    }
}

pub struct RustylinePrompter {
    editor: Editor<ColumnHelper, DefaultHistory>,
}

impl RustylinePrompter {
    pub fn new() -> Result<Self> {
        // Circular: each Tab replaces the line with the next candidate.
        let config = Config::builder()
            .completion_type(CompletionType::Circular)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config).map_err(readline_error)?;
        editor.set_helper(Some(ColumnHelper::default()));
        Ok(Self { editor })
    }
}

impl LinePrompter for RustylinePrompter {
    fn read_line(&mut self, label: &str, suggestions: Suggestions) -> Result<String> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.suggestions = suggestions;
        }
        self.editor.readline(label).map_err(readline_error)
    }
}

fn readline_error(err: ReadlineError) -> PlaylogError {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => PlaylogError::Interrupted,
        ReadlineError::Io(e) => PlaylogError::Io(e),
        other => PlaylogError::Prompt(other.to_string()),
    }
}
