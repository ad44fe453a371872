use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::catalog::{Catalog, Category, Expansions};
use crate::error::{PlaylogError, Result};

/// Offered alongside catalog values for "nobody played this" answers.
pub const NONE_OPTION: &str = "None";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnMatch {
    Prefix(&'static str),
    Exact(&'static str),
}

impl ColumnMatch {
    pub fn matches(&self, column: &str) -> bool {
        match self {
            ColumnMatch::Prefix(p) => column.starts_with(p),
            ColumnMatch::Exact(name) => column == *name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuggestionSource {
    /// Catalog values followed by `None`.
    Catalog(Category),
    /// Today's date, `YY.MM.DD`.
    Today,
    YesNo,
}

/// Column name to suggestion source, first match wins.
#[derive(Clone, Debug)]
pub struct CompletionRules {
    rules: Vec<(ColumnMatch, SuggestionSource)>,
}

impl Default for CompletionRules {
    fn default() -> Self {
        Self {
            rules: vec![
                (
                    ColumnMatch::Prefix("Spirit #"),
                    SuggestionSource::Catalog(Category::Spirits),
                ),
                (ColumnMatch::Exact("Date"), SuggestionSource::Today),
                (ColumnMatch::Exact("Victory"), SuggestionSource::YesNo),
                (
                    ColumnMatch::Exact("Adversary"),
                    SuggestionSource::Catalog(Category::Adversaries),
                ),
                (
                    ColumnMatch::Exact("Scenario"),
                    SuggestionSource::Catalog(Category::Scenarios),
                ),
                (ColumnMatch::Exact("Branch and Claw"), SuggestionSource::YesNo),
                (ColumnMatch::Exact("Jagged Earth"), SuggestionSource::YesNo),
            ],
        }
    }
}

impl CompletionRules {
    pub fn new(rules: Vec<(ColumnMatch, SuggestionSource)>) -> Self {
        Self { rules }
    }

    pub fn source_for(&self, column: &str) -> Option<&SuggestionSource> {
        self.rules
            .iter()
            .find(|(m, _)| m.matches(column))
            .map(|(_, src)| src)
    }

    pub fn suggestions_for(&self, column: &str, ctx: &SuggestionContext<'_>) -> Result<Suggestions> {
        let items = match self.source_for(column) {
            None => Vec::new(),
            Some(SuggestionSource::Today) => vec![format_date(ctx.today)?],
            Some(SuggestionSource::YesNo) => vec!["Yes".to_string(), "No".to_string()],
            Some(SuggestionSource::Catalog(category)) => {
                let mut values = ctx.catalog.lookup(category.key(), ctx.expansions)?;
                values.push(NONE_OPTION.to_string());
                values
            }
        };
        Ok(Suggestions::new(items))
    }
}

/// What suggestion sources read from during one entry session.
#[derive(Clone, Debug)]
pub struct SuggestionContext<'a> {
    pub catalog: &'a Catalog,
    pub expansions: &'a Expansions,
    pub today: Date,
}

impl<'a> SuggestionContext<'a> {
    pub fn new(catalog: &'a Catalog, expansions: &'a Expansions) -> Self {
        Self {
            catalog,
            expansions,
            today: today(),
        }
    }

    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn format_date(date: Date) -> Result<String> {
    date.format(format_description!("[year repr:last_two].[month].[day]"))
        .map_err(|e| PlaylogError::Format(format!("date: {e}")))
}

/// Fixed-order candidate list for one column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestions {
    items: Vec<String>,
}

impl Suggestions {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next suggestion after `previous` starting with `partial`, wrapping
    /// around to the first match after the last one.
    pub fn next_match(&self, partial: &str, previous: Option<usize>) -> Option<(usize, &str)> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        let start = previous.map_or(0, |i| (i + 1) % n);
        (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| self.items[i].starts_with(partial))
            .map(|i| (i, self.items[i].as_str()))
    }

    /// Every match for `partial`, in order: one full cycle of `next_match`.
    pub fn matches(&self, partial: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cursor = None;
        let mut first = None;
        while let Some((i, s)) = self.next_match(partial, cursor) {
            if first == Some(i) {
                break;
            }
            first.get_or_insert(i);
            out.push(s);
            cursor = Some(i);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn suggestions(items: &[&str]) -> Suggestions {
        Suggestions::new(items.iter().map(|s| s.to_string()).collect())
    }

    fn catalog() -> Catalog {
        Catalog::from_yaml_str(
            "Spirits:\n  Base Game: [River, Thunderspeaker]\n  Jagged Earth: [Volcano]\n\
             Adversaries:\n  Base Game: [{Prussia: [1, 2]}]\n\
             Scenarios:\n  Base Game: [Blitz]\n",
        )
        .unwrap()
    }

    #[test]
    fn next_match_cycles_over_prefix_matches() {
        let s = suggestions(&["Yes", "No", "Yonder"]);
        let (i, first) = s.next_match("Y", None).unwrap();
        assert_eq!(first, "Yes");
        let (j, second) = s.next_match("Y", Some(i)).unwrap();
        assert_eq!(second, "Yonder");
        let (_, third) = s.next_match("Y", Some(j)).unwrap();
        assert_eq!(third, "Yes");
    }

    #[test]
    fn next_match_with_no_candidates() {
        assert_eq!(suggestions(&["Yes", "No"]).next_match("x", None), None);
        assert_eq!(Suggestions::default().next_match("", None), None);
    }

    #[test]
    fn matches_lists_one_cycle() {
        let s = suggestions(&["Blitz", "Guard the Isle's Heart", "Blight", "None"]);
        assert_eq!(s.matches("Bl"), ["Blitz", "Blight"]);
        assert_eq!(s.matches("").len(), 4);
        assert!(s.matches("z").is_empty());
    }

    #[test]
    fn prefix_rule_comes_first() {
        let rules = CompletionRules::default();
        assert_eq!(
            rules.source_for("Spirit #1"),
            Some(&SuggestionSource::Catalog(Category::Spirits))
        );
        assert_eq!(rules.source_for("Kristina's Spirit"), None);
        assert_eq!(rules.source_for("Jagged Earth"), Some(&SuggestionSource::YesNo));
        assert_eq!(rules.source_for("Points"), None);
    }

    #[test]
    fn suggestions_follow_catalog_and_filter() {
        let catalog = catalog();
        let filter = Expansions::only(Vec::<String>::new());
        let ctx = SuggestionContext::new(&catalog, &filter);
        let rules = CompletionRules::default();

        let spirits = rules.suggestions_for("Spirit #2", &ctx).unwrap();
        assert_eq!(spirits.items(), ["River", "Thunderspeaker", "None"]);
        let adversaries = rules.suggestions_for("Adversary", &ctx).unwrap();
        assert_eq!(adversaries.items(), ["Prussia", "None"]);
        assert!(rules.suggestions_for("Difficulty", &ctx).unwrap().is_empty());
    }

    #[test]
    fn date_suggestion_is_short_year_format() {
        let catalog = catalog();
        let all = Expansions::All;
        let ctx = SuggestionContext::new(&catalog, &all).with_today(date!(2024 - 01 - 05));
        let s = CompletionRules::default().suggestions_for("Date", &ctx).unwrap();
        assert_eq!(s.items(), ["24.01.05"]);
    }
}
