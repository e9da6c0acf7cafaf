use crate::collection::{collection_path, EnrichedCollectionSummary, COLLECTIONS_SOURCE};
use crate::columns::{collection_columns, Cell, ColumnDescriptor};
use crate::creation::Navigator;
use crate::display::Presentation;
use crate::error::{CollectionError, Result};
use crate::groom::groom;
use crate::paginator::{PageRequest, PageSource};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DEFAULT_ORDERING: &str = "-name";

pub fn reverse_key(key: &str) -> String {
    match key.strip_prefix('-') {
        Some(field) => field.to_string(),
        None => format!("-{}", key),
    }
}

// Fetching methods take `&mut self`, so only one request is ever in flight.
pub struct CollectionListView<S: PageSource> {
    source: S,
    display: Arc<Presentation>,
    columns: Vec<ColumnDescriptor>,
    order_by: Vec<String>,
    filter: BTreeMap<String, String>,
    page: u32,
    page_size: u32,
    count: u64,
    num_pages: u32,
    rows: Vec<EnrichedCollectionSummary>,
}

impl<S: PageSource> CollectionListView<S> {
    pub fn new(source: S, display: Arc<Presentation>, player_id: u64, page_size: u32) -> Self {
        let mut filter = BTreeMap::new();
        filter.insert("owner".to_string(), player_id.to_string());
        CollectionListView {
            source,
            columns: collection_columns(display.clone()),
            display,
            order_by: vec![DEFAULT_ORDERING.to_string()],
            filter,
            page: 1,
            page_size: page_size.max(1),
            count: 0,
            num_pages: 1,
            rows: Vec::new(),
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            source: COLLECTIONS_SOURCE.to_string(),
            order_by: self.order_by.clone(),
            filter: self.filter.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let request = self.request();
        log::debug!(
            "fetching page {} ordered by {:?}",
            request.page,
            request.order_by
        );
        let page = self.source.fetch_page(&request).await?;
        self.count = page.count;
        self.num_pages = page.num_pages(self.page_size);
        self.rows = groom(page.results, self.display.ranks.as_ref());
        log::debug!("received {} of {} collections", self.rows.len(), self.count);
        Ok(())
    }

    // Asking again for the active ordering reverses it.
    pub async fn sort_by(&mut self, column: usize) -> Result<()> {
        let keys = self
            .columns
            .get(column)
            .and_then(|c| c.order_by.clone())
            .ok_or(CollectionError::NotSortable(column))?;

        self.order_by = if self.order_by == keys {
            keys.iter().map(|k| reverse_key(k)).collect()
        } else {
            keys
        };
        self.page = 1;
        self.refresh().await
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        if page == 0 || page > self.num_pages {
            return Err(CollectionError::PageOutOfRange {
                page,
                last: self.num_pages,
            });
        }
        self.page = page;
        self.refresh().await
    }

    pub async fn next_page(&mut self) -> Result<()> {
        self.go_to_page(self.page + 1).await
    }

    pub async fn previous_page(&mut self) -> Result<()> {
        self.go_to_page(self.page.saturating_sub(1)).await
    }

    pub fn rendered_rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| self.columns.iter().map(|c| c.render(row)).collect())
            .collect()
    }

    pub fn row_path(&self, index: usize) -> Result<String> {
        self.rows
            .get(index)
            .map(|row| collection_path(row.id()))
            .ok_or(CollectionError::RowOutOfRange(index))
    }

    pub fn activate_row<N: Navigator>(&self, index: usize, navigator: &mut N) -> Result<()> {
        let path = self.row_path(index)?;
        log::info!("opening {}", path);
        navigator.navigate_to(&path);
        Ok(())
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn rows(&self) -> &[EnrichedCollectionSummary] {
        &self.rows
    }

    pub fn order_by(&self) -> &[String] {
        &self.order_by
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
