use std::path::PathBuf;

use playlog_core::error::Result;
use playlog_core::prompt::LinePrompter;
use playlog_core::prompt_factory::{Backend, open_prompter};
use playlog_core::{
    Catalog, CompletionRules, Expansions, RowBuilder, SortSpec, SuggestionContext, TableStore,
};
use tracing::debug;

pub struct Session {
    pub results: PathBuf,
    pub config: PathBuf,
    pub expansions: Expansions,
    pub sort: SortSpec,
}

fn render_and_save(store: &TableStore, sort: &SortSpec) -> Result<()> {
    store.render(sort)?;
    store.save(None)
}

pub fn handle_show(session: &Session) -> Result<()> {
    let store = TableStore::load(&session.results)?;
    render_and_save(&store, &session.sort)
}

pub fn handle_add_row(session: &Session) -> Result<()> {
    let mut prompter = open_prompter(Backend::Rustyline)?;
    handle_add_row_with(session, prompter.as_mut())
}

/// The file is only rewritten after every column has been answered.
pub fn handle_add_row_with(session: &Session, prompter: &mut dyn LinePrompter) -> Result<()> {
    let catalog = Catalog::load(&session.config)?;
    let mut store = TableStore::load(&session.results)?;
    debug!(expansions = ?session.expansions, columns = store.header().len(), "adding row");

    let rules = CompletionRules::default();
    let ctx = SuggestionContext::new(&catalog, &session.expansions);
    RowBuilder::new(&rules, ctx).add_row_interactive(&mut store, prompter)?;

    render_and_save(&store, &session.sort)
}
