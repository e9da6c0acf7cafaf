use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COLLECTIONS_SOURCE: &str = "puzzles/collections/";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerRef {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub ranking: Option<f64>,
    #[serde(default)]
    pub professional: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CollectionSummary {
    pub id: u64,
    pub name: String,
    pub owner: PlayerRef,
    pub min_rank: f64,
    pub max_rank: f64,
    #[serde(default)]
    pub puzzle_count: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub solved_count: u64,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub starting_puzzle: serde_json::Value,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankLabels {
    pub min_long: String,
    pub max_long: String,
    pub min_short: String,
    pub max_short: String,
}

// Labels are only set by the row transform in `groom.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedCollectionSummary {
    summary: CollectionSummary,
    labels: RankLabels,
}

impl EnrichedCollectionSummary {
    pub(crate) fn from_parts(summary: CollectionSummary, labels: RankLabels) -> Self {
        EnrichedCollectionSummary { summary, labels }
    }

    pub(crate) fn set_labels(&mut self, labels: RankLabels) {
        self.labels = labels;
    }

    pub fn summary(&self) -> &CollectionSummary {
        &self.summary
    }

    pub fn id(&self) -> u64 {
        self.summary.id
    }

    pub fn min_rank_string(&self) -> &str {
        &self.labels.min_long
    }

    pub fn max_rank_string(&self) -> &str {
        &self.labels.max_long
    }

    pub fn min_rank_short(&self) -> &str {
        &self.labels.min_short
    }

    pub fn max_rank_short(&self) -> &str {
        &self.labels.max_short
    }
}

/// Payload for creating a collection. Only the name is user supplied.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreationDraft {
    pub name: String,
    pub private: bool,
    pub price: String,
}

impl CreationDraft {
    pub fn new(name: impl Into<String>) -> Self {
        CreationDraft {
            name: name.into(),
            private: true,
            price: "0.00".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CreatedCollection {
    #[serde(default)]
    pub id: Option<u64>,
}

pub fn collection_path(id: u64) -> String {
    format!("/puzzle-collection/{}", id)
}
