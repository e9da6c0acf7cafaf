use crate::error::{CollectionError, Result};
use dotenv::dotenv;
use std::env;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://online-go.com/api/v1/";
pub const DEFAULT_SITE_URL: &str = "https://online-go.com";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub site_url: Url,
    pub player_id: u64,
    pub access_token: Option<String>,
    pub page_size: u32,
    pub date_format: String,
    pub locale_file: Option<String>,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = parse_base_url(&get("OGS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()))?;
        let site_url = Url::parse(&get("OGS_SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.into()))?;

        let player_id = get("OGS_PLAYER_ID")
            .ok_or_else(|| CollectionError::config("OGS_PLAYER_ID must be set"))?
            .trim()
            .parse::<u64>()
            .map_err(|e| CollectionError::config(format!("OGS_PLAYER_ID must be numeric: {}", e)))?;

        let page_size = match get("OGS_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(CollectionError::config(format!(
                        "OGS_PAGE_SIZE must be a positive integer, got {:?}",
                        raw
                    )))
                }
                Ok(size) => size,
            },
            None => DEFAULT_PAGE_SIZE,
        };

        let open_browser = matches!(
            get("OGS_OPEN_BROWSER").as_deref().map(str::trim),
            Some("1") | Some("true") | Some("yes")
        );

        Ok(Config {
            api_url,
            site_url,
            player_id,
            access_token: get("OGS_ACCESS_TOKEN"),
            page_size,
            date_format: get("OGS_DATE_FORMAT").unwrap_or_else(|| DEFAULT_DATE_FORMAT.into()),
            locale_file: get("OGS_LOCALE_FILE"),
            open_browser,
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.api_url.join(endpoint.trim_start_matches('/'))?)
    }

    pub fn site_link(&self, path: &str) -> Result<Url> {
        Ok(self.site_url.join(path)?)
    }
}

// `Url::join` drops the last path segment unless the base ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{}/", raw))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_player_is_set() {
        let config = Config::from_lookup(lookup(&[("OGS_PLAYER_ID", "123")])).unwrap();
        assert_eq!(config.player_id, 123);
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.access_token.is_none());
        assert!(!config.open_browser);
    }

    #[test]
    fn missing_player_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, CollectionError::Config(_)));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = Config::from_lookup(lookup(&[("OGS_PLAYER_ID", "1"), ("OGS_PAGE_SIZE", "0")]))
            .unwrap_err();
        assert!(matches!(err, CollectionError::Config(_)));
    }

    #[test]
    fn endpoint_joins_onto_api_base_without_trailing_slash() {
        let config = Config::from_lookup(lookup(&[
            ("OGS_PLAYER_ID", "1"),
            ("OGS_API_URL", "http://localhost:8080/api/v1"),
        ]))
        .unwrap();
        assert_eq!(
            config.endpoint_url("puzzles/collections/").unwrap().as_str(),
            "http://localhost:8080/api/v1/puzzles/collections/"
        );
        assert_eq!(
            config.site_link("/puzzle-collection/7").unwrap().as_str(),
            "https://online-go.com/puzzle-collection/7"
        );
    }
}
