//! Mock collaborators for testing

use crate::collection::{CollectionSummary, CreatedCollection, CreationDraft, PlayerRef};
use crate::creation::{CollectionCreator, ErrorReporter, NamePrompt, Navigator};
use crate::error::{CollectionError, Result};
use crate::paginator::{Page, PageRequest, PageSource};
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn sample_summary(id: u64, min_rank: f64, max_rank: f64) -> CollectionSummary {
    CollectionSummary {
        id,
        name: format!("Sample {}", id),
        owner: PlayerRef {
            id: 77,
            username: "sensei".to_string(),
            ranking: Some(31.0),
            professional: false,
        },
        min_rank,
        max_rank,
        puzzle_count: 42,
        rating: 4.2,
        rating_count: 1500,
        view_count: 200_000,
        solved_count: 12,
        created: Utc.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap(),
        private: false,
        starting_puzzle: json!({"id": 99}),
    }
}

/// Page source that serves a fixed row list and records every request.
#[derive(Debug, Clone, Default)]
pub struct MockPageSource {
    pub rows: Vec<CollectionSummary>,
    pub requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl MockPageSource {
    pub fn with_rows(rows: Vec<CollectionSummary>) -> Self {
        MockPageSource {
            rows,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> PageRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

impl PageSource for MockPageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<CollectionSummary>> {
        self.requests.lock().unwrap().push(request.clone());
        let size = request.page_size as usize;
        let start = (request.page as usize - 1) * size;
        let results = self.rows.iter().skip(start).take(size).cloned().collect();
        Ok(Page {
            count: self.rows.len() as u64,
            results,
        })
    }
}

/// Prompt replaying scripted answers; `None` dismisses.
pub struct MockPrompt {
    answers: VecDeque<Option<String>>,
    pub errors_shown: Vec<Option<String>>,
}

impl MockPrompt {
    pub fn new(answers: Vec<Option<&str>>) -> Self {
        MockPrompt {
            answers: answers.into_iter().map(|a| a.map(str::to_string)).collect(),
            errors_shown: Vec::new(),
        }
    }
}

impl NamePrompt for MockPrompt {
    async fn ask(&mut self, _message: &str, error: Option<&str>) -> Result<Option<String>> {
        self.errors_shown.push(error.map(str::to_string));
        Ok(self.answers.pop_front().flatten())
    }
}

enum Reply {
    Created(u64),
    Status(u16),
}

pub struct MockCreator {
    reply: Reply,
    drafts: Mutex<Vec<CreationDraft>>,
}

impl MockCreator {
    pub fn succeeding(id: u64) -> Self {
        MockCreator {
            reply: Reply::Created(id),
            drafts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        MockCreator {
            reply: Reply::Status(status),
            drafts: Mutex::new(Vec::new()),
        }
    }

    pub fn drafts(&self) -> Vec<CreationDraft> {
        self.drafts.lock().unwrap().clone()
    }
}

impl CollectionCreator for MockCreator {
    async fn create_collection(&self, draft: &CreationDraft) -> Result<CreatedCollection> {
        self.drafts.lock().unwrap().push(draft.clone());
        match self.reply {
            Reply::Created(id) => Ok(CreatedCollection { id: Some(id) }),
            Reply::Status(status) => Err(CollectionError::Api {
                status,
                body: "{\"detail\":\"denied\"}".to_string(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub paths: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<String>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&mut self, error: &CollectionError) {
        self.messages.push(error.to_string());
    }
}
