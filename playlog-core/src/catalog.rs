use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::config;
use crate::error::{PlaylogError, Result};

/// Expansion whose values are offered regardless of the filter.
pub const BASE_GAME: &str = "Base Game";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Spirits,
    Adversaries,
    Scenarios,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Spirits => "Spirits",
            Category::Adversaries => "Adversaries",
            Category::Scenarios => "Scenarios",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEntry {
    Plain(String),
    /// A value with a sub-list, e.g. an adversary and its levels.
    Grouped { name: String, children: Vec<String> },
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Plain(name) => name,
            CatalogEntry::Grouped { name, .. } => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionGroup {
    pub expansion: String,
    pub entries: Vec<CatalogEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTable {
    pub name: String,
    pub groups: Vec<ExpansionGroup>,
}

/// Which expansions contribute values to a lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Expansions {
    #[default]
    All,
    Only(Vec<String>),
}

impl Expansions {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expansions::Only(names.into_iter().map(Into::into).collect())
    }

    fn includes(&self, expansion: &str) -> bool {
        expansion == BASE_GAME
            || match self {
                Expansions::All => true,
                Expansions::Only(names) => names.iter().any(|n| n == expansion),
            }
    }
}

/// Read-only game content, partitioned by category and expansion, in the
/// order the configuration declares it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryTable>,
}

impl Catalog {
    pub fn new(categories: Vec<CategoryTable>) -> Self {
        Self { categories }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw =
            std::fs::read_to_string(path).map_err(|e| PlaylogError::file_access(path, e))?;
        let catalog = Self::from_yaml_str(&raw)?;
        debug!(path = %path.display(), categories = catalog.categories.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        config::parse_catalog(raw).map(Self::new)
    }

    fn table(&self, category: &str) -> Result<&CategoryTable> {
        self.categories
            .iter()
            .find(|t| t.name == category)
            .ok_or_else(|| PlaylogError::ConfigKey(category.to_string()))
    }

    /// Selectable names of `category` from the included expansions.
    ///
    /// Groups are walked in declaration order and "Base Game" is always
    /// included. Grouped values contribute their name only. The result is
    /// neither sorted nor deduplicated.
    pub fn lookup(&self, category: &str, expansions: &Expansions) -> Result<Vec<String>> {
        let table = self.table(category)?;
        let values: Vec<String> = table
            .groups
            .iter()
            .filter(|g| expansions.includes(&g.expansion))
            .flat_map(|g| g.entries.iter().map(|e| e.name().to_string()))
            .collect();
        debug!(category, ?expansions, found = values.len(), "catalog lookup");
        Ok(values)
    }

    pub fn spirits(&self, expansions: &Expansions) -> Result<Vec<String>> {
        self.lookup(Category::Spirits.key(), expansions)
    }

    pub fn adversaries(&self, expansions: &Expansions) -> Result<Vec<String>> {
        self.lookup(Category::Adversaries.key(), expansions)
    }

    pub fn scenarios(&self, expansions: &Expansions) -> Result<Vec<String>> {
        self.lookup(Category::Scenarios.key(), expansions)
    }

    /// Expansion names declared for `category`.
    pub fn expansions(&self, category: &str) -> Result<Vec<&str>> {
        Ok(self
            .table(category)?
            .groups
            .iter()
            .map(|g| g.expansion.as_str())
            .collect())
    }

    /// Sub-list of the first grouped value called `name`; empty for plain values.
    pub fn children(&self, category: &str, name: &str) -> Result<Vec<&str>> {
        let table = self.table(category)?;
        let found = table
            .groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .find(|e| e.name() == name);
        Ok(match found {
            Some(CatalogEntry::Grouped { children, .. }) => {
                children.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        })
    }
}
