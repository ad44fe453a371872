// playlog_core/src/domain.rs
pub type Row = Vec<String>;

/// Header written when the results file has to be created.
pub const DEFAULT_HEADER: [&str; 12] = [
    "Date",
    "Points",
    "Victory",
    "Kristina's Spirit",
    "Omri's spirit",
    "Adversary",
    "Adv. Level",
    "Scenario",
    "Difficulty",
    "Time",
    "Branch and Claw",
    "Jagged Earth",
];

pub fn default_header() -> Row {
    DEFAULT_HEADER.iter().map(|c| c.to_string()).collect()
}

/// Row ordering used when rendering. `primary = None` keeps insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub descending: bool,
}

impl SortSpec {
    pub fn by(column: impl Into<String>) -> Self {
        Self {
            primary: Some(column.into()),
            ..Default::default()
        }
    }

    pub fn then_by(mut self, column: impl Into<String>) -> Self {
        self.secondary = Some(column.into());
        self
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}
