use crate::config::Config;
use crate::error::{CollectionError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

pub fn get_auth_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = &config.access_token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|e| CollectionError::config(format!("OGS_ACCESS_TOKEN is not a valid header: {}", e)))?;
        headers.insert(AUTHORIZATION, value);
    } else {
        log::debug!("no access token configured, requests are anonymous");
    }
    Ok(headers)
}
