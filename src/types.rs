use chrono::NaiveDate;
use serde::Deserialize;
use tabled::Tabled;

use crate::util::deserialize_na;

/// One CSV row as read from disk. Empty cells and NA tokens are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTitle {
    #[serde(deserialize_with = "deserialize_na")]
    pub title: Option<String>,
    #[serde(rename = "type", deserialize_with = "deserialize_na")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub director: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub cast: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub country: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub date_added: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub release_year: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub listed_in: Option<String>,
    #[serde(deserialize_with = "deserialize_na")]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTitle {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub listed_in: Option<String>,
    pub rating: Option<String>,
}

/// Calendar components of `date_added`; both `None` when the date is null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    pub year_added: Option<i32>,
    pub month_added: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    pub title: CleanTitle,
    pub added: DateParts,
}

/// Category value and its occurrence count.
pub type Summary<K> = Vec<(K, usize)>;

#[derive(Debug, Tabled, Clone)]
pub struct SliceRow {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: String,
    #[tabled(rename = "Share")]
    pub share: String,
}

#[derive(Debug, Tabled, Clone)]
pub struct BarRow {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: String,
    #[tabled(rename = "Bar")]
    pub bar: String,
}
