use crate::types::{CleanTitle, DateParts, TitleRecord};
use chrono::{Datelike, NaiveDate};

pub fn date_parts(date_added: Option<NaiveDate>) -> DateParts {
    match date_added {
        Some(d) => DateParts {
            year_added: Some(d.year()),
            month_added: Some(d.month()),
        },
        None => DateParts::default(),
    }
}

pub fn derive(titles: Vec<CleanTitle>) -> Vec<TitleRecord> {
    titles
        .into_iter()
        .map(|title| {
            let added = date_parts(title.date_added);
            TitleRecord { title, added }
        })
        .collect()
}
