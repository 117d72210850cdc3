use crate::types::{Summary, TitleRecord};
use std::collections::{BTreeMap, HashMap};

/// One `(record, genre)` pair of the exploded `listed_in` column.
#[derive(Debug, Clone, Copy)]
pub struct GenreRow<'a> {
    pub record: &'a TitleRecord,
    pub genre: &'a str,
}

/// The four summaries the report is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summaries {
    pub types: Summary<String>,
    pub release_years: Summary<i32>,
    pub genres: Summary<String>,
    pub ratings: Summary<String>,
}

impl Summaries {
    pub fn compute(data: &[TitleRecord], top_genre_limit: usize) -> Self {
        Summaries {
            types: type_distribution(data),
            release_years: release_year_trend(data),
            genres: top_genres(data, top_genre_limit),
            ratings: rating_distribution(data),
        }
    }
}

/// Count occurrences, largest first. Equal counts keep the order in which
/// the values were first seen.
fn ranked_counts<'a, I>(values: I) -> Summary<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Summary<String> = Vec::new();
    for v in values {
        let slot = *index.entry(v).or_insert_with(|| {
            counts.push((v.to_string(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn type_distribution(data: &[TitleRecord]) -> Summary<String> {
    ranked_counts(data.iter().filter_map(|r| r.title.kind.as_deref()))
}

pub fn release_year_trend(data: &[TitleRecord]) -> Summary<i32> {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for year in data.iter().filter_map(|r| r.title.release_year) {
        *by_year.entry(year).or_insert(0) += 1;
    }
    by_year.into_iter().collect()
}

/// Split `listed_in` on commas into trimmed genre tokens. Blank tokens are
/// dropped; repeats within one record are kept.
pub fn explode_genres(data: &[TitleRecord]) -> Vec<GenreRow<'_>> {
    data.iter()
        .flat_map(|record| {
            record
                .title
                .listed_in
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(move |genre| GenreRow { record, genre })
        })
        .collect()
}

pub fn top_genres(data: &[TitleRecord], limit: usize) -> Summary<String> {
    let mut ranked = ranked_counts(explode_genres(data).into_iter().map(|row| row.genre));
    ranked.truncate(limit);
    ranked
}

pub fn rating_distribution(data: &[TitleRecord]) -> Summary<String> {
    ranked_counts(data.iter().filter_map(|r| r.title.rating.as_deref()))
}
