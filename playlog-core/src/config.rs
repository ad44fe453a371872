//! YAML catalog document:
//!
//! ```yaml
//! Spirits:
//!   Base Game:
//!     - Lightning's Swift Strike
//!   Branch and Claw:
//!     - Keeper of the Forbidden Wilds
//! Adversaries:
//!   Base Game:
//!     - England: [Level 1, Level 2]
//! ```
//!
//! `serde_yaml::Mapping` keeps insertion order, so categories, expansions and
//! values come out in the order they were written.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::catalog::{CatalogEntry, CategoryTable, ExpansionGroup};
use crate::error::{PlaylogError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Grouped(Mapping),
    Plain(Value),
}

pub(crate) fn parse_catalog(raw: &str) -> Result<Vec<CategoryTable>> {
    let doc: Mapping =
        serde_yaml::from_str(raw).map_err(|e| PlaylogError::Config(format!("catalog: {e}")))?;

    let mut categories = Vec::with_capacity(doc.len());
    for (name, body) in doc {
        let name = scalar(&name)?;
        let groups = match body {
            Value::Mapping(m) => parse_groups(&name, m)?,
            Value::Null => Vec::new(),
            _ => {
                return Err(PlaylogError::Config(format!(
                    "category {name} must map expansions to values"
                )));
            }
        };
        categories.push(CategoryTable { name, groups });
    }
    Ok(categories)
}

fn parse_groups(category: &str, body: Mapping) -> Result<Vec<ExpansionGroup>> {
    let mut groups = Vec::with_capacity(body.len());
    for (expansion, values) in body {
        let expansion = scalar(&expansion)?;
        let raw: Option<Vec<RawEntry>> = serde_yaml::from_value(values).map_err(|e| {
            PlaylogError::Config(format!("{category}/{expansion}: {e}"))
        })?;
        let mut entries = Vec::new();
        for entry in raw.unwrap_or_default() {
            match entry {
                RawEntry::Plain(name) => entries.push(CatalogEntry::Plain(scalar(&name)?)),
                // `- Name: [..]` normally has a single key; every key counts.
                RawEntry::Grouped(m) => {
                    for (name, children) in m {
                        entries.push(CatalogEntry::Grouped {
                            name: scalar(&name)?,
                            children: child_names(children)?,
                        });
                    }
                }
            }
        }
        groups.push(ExpansionGroup { expansion, entries });
    }
    Ok(groups)
}

fn child_names(children: Value) -> Result<Vec<String>> {
    match children {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                Value::Mapping(m) => m
                    .keys()
                    .next()
                    .map(scalar)
                    .unwrap_or_else(|| Ok(String::new())),
                other => scalar(other),
            })
            .collect(),
        other => Ok(vec![scalar(&other)?]),
    }
}

fn scalar(v: &Value) -> Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(PlaylogError::Config(format!(
            "expected a name, found {other:?}"
        ))),
    }
}
