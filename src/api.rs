use crate::auth;
use crate::collection::{CollectionSummary, CreatedCollection, CreationDraft, COLLECTIONS_SOURCE};
use crate::config::Config;
use crate::creation::CollectionCreator;
use crate::error::{CollectionError, Result};
use crate::paginator::{Page, PageRequest, PageSource};
use reqwest::{header::HeaderMap, Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    headers: HeaderMap,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().build()?;
        let headers = auth::get_auth_headers(&config)?;
        Ok(ApiClient {
            client,
            headers,
            config,
        })
    }

    pub fn page_url(&self, request: &PageRequest) -> Result<Url> {
        let mut url = self.config.endpoint_url(&request.source)?;
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CollectionError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl PageSource for ApiClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<CollectionSummary>> {
        let url = self.page_url(request)?;
        log::debug!("GET {}", url);
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .headers(self.headers.clone())
            .send()
            .await?;
        Self::read_json(response).await
    }
}

impl CollectionCreator for ApiClient {
    async fn create_collection(&self, draft: &CreationDraft) -> Result<CreatedCollection> {
        let url = self.config.endpoint_url(COLLECTIONS_SOURCE)?;
        log::info!("creating puzzle collection {:?}", draft.name);
        let response = self
            .client
            .request(reqwest::Method::POST, url)
            .headers(self.headers.clone())
            .json(draft)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
