use crate::types::{CleanTitle, RawTitle};
use crate::util::parse_i32_safe;
use chrono::NaiveDate;

pub const UNKNOWN: &str = "Unknown";

/// Formats tried in order for `date_added`. The first is the one the
/// catalog export uses (`September 25, 2021`).
const DATE_FORMATS: [&str; 6] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d-%b-%y",
    "%d %B %Y",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub unknown_directors: usize,
    pub unknown_cast: usize,
    pub unknown_countries: usize,
    pub unparsed_dates: usize,
    pub unparsed_years: usize,
}

/// Replace a missing categorical value with the `"Unknown"` placeholder.
pub fn fill_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

/// Coercive date parse: surrounding whitespace is stripped and anything
/// that matches none of the known formats becomes `None`.
pub fn parse_date_added(raw: Option<&str>) -> Option<NaiveDate> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn parse_release_year(raw: Option<&str>) -> Option<i32> {
    parse_i32_safe(raw)
}

pub fn clean(rows: Vec<RawTitle>) -> (Vec<CleanTitle>, CleanReport) {
    let mut report = CleanReport::default();
    let cleaned = rows
        .into_iter()
        .map(|row| {
            report.unknown_directors += usize::from(row.director.is_none());
            report.unknown_cast += usize::from(row.cast.is_none());
            report.unknown_countries += usize::from(row.country.is_none());

            let date_added = parse_date_added(row.date_added.as_deref());
            if date_added.is_none() && row.date_added.is_some() {
                report.unparsed_dates += 1;
                tracing::debug!(
                    title = row.title.as_deref().unwrap_or("?"),
                    raw = row.date_added.as_deref().unwrap_or_default(),
                    "unparseable date_added coerced to null"
                );
            }
            let release_year = parse_release_year(row.release_year.as_deref());
            if release_year.is_none() && row.release_year.is_some() {
                report.unparsed_years += 1;
            }

            CleanTitle {
                title: row.title,
                kind: row.kind,
                director: fill_unknown(row.director),
                cast: fill_unknown(row.cast),
                country: fill_unknown(row.country),
                date_added,
                release_year,
                listed_in: row.listed_in,
                rating: row.rating,
            }
        })
        .collect();
    if report.unparsed_dates > 0 {
        tracing::warn!(count = report.unparsed_dates, "date_added values could not be parsed");
    }
    (cleaned, report)
}
