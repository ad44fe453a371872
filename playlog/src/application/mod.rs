pub mod handlers;
pub mod logging;

use crate::presentation::cli::Cli;
use clap::Parser;
use playlog_core::error::Result;
use playlog_core::{Expansions, SortSpec};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let expansions = if cli.expansions.is_empty() {
        Expansions::All
    } else {
        Expansions::only(cli.expansions)
    };
    let sort = SortSpec {
        primary: cli.sort,
        secondary: cli.then_by,
        descending: cli.descending,
    };
    let session = handlers::Session {
        results: cli.results,
        config: cli.config,
        expansions,
        sort,
    };

    if cli.add_row {
        handlers::handle_add_row(&session)
    } else {
        handlers::handle_show(&session)
    }
}
