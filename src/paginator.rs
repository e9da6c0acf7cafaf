use crate::collection::CollectionSummary;
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub source: String,
    pub order_by: Vec<String>,
    pub filter: BTreeMap<String, String>,
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        if !self.order_by.is_empty() {
            pairs.push(("ordering".to_string(), self.order_by.join(",")));
        }
        for (field, value) in &self.filter {
            pairs.push((field.clone(), value.clone()));
        }
        pairs
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Always at least one page, so an empty listing still has page 1.
    pub fn num_pages(&self, page_size: u32) -> u32 {
        let size = u64::from(page_size.max(1));
        let pages = self.count.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

pub trait PageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<CollectionSummary>>;
}
