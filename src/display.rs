use crate::config::Config;
use crate::error::Result;
use crate::rank::{OgsRanks, RankFormatter};
use chrono::{DateTime, Local, Utc};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

pub trait CountFormatter: Send + Sync {
    fn format_count(&self, value: u64) -> String;
}

pub trait DateFormatter: Send + Sync {
    fn format_date(&self, timestamp: &DateTime<Utc>) -> String;
}

/// Message catalog keyed by the English text; unknown keys render as-is.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Catalog { entries }
    }

    pub fn load(file_path: &str) -> Result<Catalog> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let entries: HashMap<String, String> = serde_json::from_reader(reader)?;
        log::debug!("loaded {} translations from {}", entries.len(), file_path);
        Ok(Catalog::new(entries))
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Upper bounds (exclusive) for each abbreviation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub verbatim: u64,
    pub decimal_thousands: u64,
    pub thousands: u64,
    pub decimal_millions: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            verbatim: 1_000,
            decimal_thousands: 10_000,
            thousands: 1_000_000,
            decimal_millions: 10_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Unitify {
    pub thresholds: Thresholds,
}

fn one_decimal(value: f64, suffix: &str) -> String {
    let text = format!("{:.1}", value);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, suffix)
}

impl CountFormatter for Unitify {
    fn format_count(&self, value: u64) -> String {
        let t = &self.thresholds;
        let v = value as f64;
        if value < t.verbatim {
            value.to_string()
        } else if value < t.decimal_thousands {
            one_decimal(v / 1_000.0, "k")
        } else if value < t.thousands && (v / 1_000.0).round() < 1_000.0 {
            format!("{}k", (v / 1_000.0).round())
        } else if value < t.decimal_millions {
            one_decimal(v / 1_000_000.0, "M")
        } else {
            format!("{}M", (v / 1_000_000.0).round())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShortDate {
    pub format: String,
}

impl DateFormatter for ShortDate {
    fn format_date(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&Local)
            .format(&self.format)
            .to_string()
    }
}

pub struct Presentation {
    pub translator: Box<dyn Translator>,
    pub counts: Box<dyn CountFormatter>,
    pub dates: Box<dyn DateFormatter>,
    pub ranks: Box<dyn RankFormatter>,
}

impl Presentation {
    pub fn from_config(config: &Config) -> Result<Presentation> {
        let catalog = match &config.locale_file {
            Some(path) => Catalog::load(path)?,
            None => Catalog::default(),
        };
        Ok(Presentation {
            translator: Box::new(catalog),
            counts: Box::new(Unitify::default()),
            dates: Box::new(ShortDate {
                format: config.date_format.clone(),
            }),
            ranks: Box::new(OgsRanks),
        })
    }

    pub fn tr(&self, key: &str) -> String {
        self.translator.translate(key)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation {
            translator: Box::new(Catalog::default()),
            counts: Box::new(Unitify::default()),
            dates: Box::new(ShortDate {
                format: crate::config::DEFAULT_DATE_FORMAT.to_string(),
            }),
            ranks: Box::new(OgsRanks),
        }
    }
}
