use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Spirit Island results log", long_about = None)]
pub struct Cli {
    /// Interactively add one result before printing the table
    #[arg(short = 'a', long)]
    pub add_row: bool,

    /// Results file; created with the default header when missing
    #[arg(long, default_value = "results.csv")]
    pub results: PathBuf,

    /// Catalog of spirits, adversaries and scenarios per expansion
    #[arg(long, default_value = "Config/spirit_island.yaml")]
    pub config: PathBuf,

    /// Owned expansion to offer in completions (repeatable; Base Game is always on).
    /// When omitted, every expansion in the catalog is offered.
    #[arg(short = 'e', long = "expansion")]
    pub expansions: Vec<String>,

    /// Column to sort the printed table by
    #[arg(long)]
    pub sort: Option<String>,

    /// Tie-break column for --sort
    #[arg(long, requires = "sort")]
    pub then_by: Option<String>,

    /// Reverse the sort order
    #[arg(long)]
    pub descending: bool,
}
