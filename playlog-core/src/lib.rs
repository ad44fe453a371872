#![forbid(unsafe_code)]

pub mod error;

pub mod domain;

pub mod catalog;
mod config;

pub mod render;
pub mod store;

pub mod completion;
pub mod entry;

pub mod prompt;
pub mod prompt_factory;
pub mod prompt_rl;

// Re-exports: stable API surface
pub use catalog::{Catalog, Category, Expansions};
pub use completion::{CompletionRules, SuggestionContext, Suggestions};
pub use domain::{DEFAULT_HEADER, Row, SortSpec};
pub use entry::RowBuilder;
pub use store::TableStore;
