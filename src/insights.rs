use crate::aggregator::Summaries;
use crate::types::Summary;

const CHECK: &str = "✅";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeContrast {
    Contrast { most: String, least: String },
    Single(String),
    /// Every type has the same count.
    Even(Vec<String>),
    NoData,
}

/// The four headline facts printed after the charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    pub type_contrast: TypeContrast,
    pub peak_release_year: Option<i32>,
    pub top_genre: Option<String>,
    pub top_rating: Option<String>,
}

/// First key holding the largest count.
fn idx_max<K: Clone>(summary: &Summary<K>) -> Option<K> {
    let max = summary.iter().map(|(_, c)| *c).max()?;
    summary.iter().find(|(_, c)| *c == max).map(|(k, _)| k.clone())
}

/// First key holding the smallest count.
fn idx_min<K: Clone>(summary: &Summary<K>) -> Option<K> {
    let min = summary.iter().map(|(_, c)| *c).min()?;
    summary.iter().find(|(_, c)| *c == min).map(|(k, _)| k.clone())
}

impl Insights {
    pub fn from_summaries(s: &Summaries) -> Self {
        let type_contrast = match s.types.len() {
            0 => TypeContrast::NoData,
            1 => TypeContrast::Single(s.types[0].0.clone()),
            _ => match (idx_max(&s.types), idx_min(&s.types)) {
                (Some(most), Some(least)) if most != least => TypeContrast::Contrast { most, least },
                _ => TypeContrast::Even(s.types.iter().map(|(k, _)| k.clone()).collect()),
            },
        };
        Insights {
            type_contrast,
            peak_release_year: idx_max(&s.release_years),
            top_genre: s.genres.first().map(|(g, _)| g.clone()),
            top_rating: idx_max(&s.ratings),
        }
    }
}

fn or_no_data<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "no data".to_string())
}

pub fn insight_lines(insights: &Insights) -> [String; 4] {
    let contrast = match &insights.type_contrast {
        TypeContrast::Contrast { most, least } => format!("Netflix has more {} than {}", most, least),
        TypeContrast::Single(only) => format!("Netflix only lists {}", only),
        TypeContrast::Even(kinds) => format!("Netflix has equal numbers of {}", kinds.join(" and ")),
        TypeContrast::NoData => "Netflix title types: no data".to_string(),
    };
    [
        format!("{} {}", CHECK, contrast),
        format!("{} Content peaked around: {}", CHECK, or_no_data(&insights.peak_release_year)),
        format!("{} Top Genre: {}", CHECK, or_no_data(&insights.top_genre)),
        format!("{} Most targeted rating: {}", CHECK, or_no_data(&insights.top_rating)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(pairs: &[(&str, usize)]) -> Summary<String> {
        pairs.iter().map(|(k, c)| (k.to_string(), *c)).collect()
    }

    #[test]
    fn test_insights_from_typical_summaries() {
        let s = Summaries {
            types: summary(&[("Movie", 6131), ("TV Show", 2676)]),
            release_years: vec![(2017, 1032), (2018, 1147), (2019, 1030)],
            genres: summary(&[("International Movies", 2752), ("Dramas", 2427)]),
            ratings: summary(&[("TV-MA", 3207), ("TV-14", 2160)]),
        };
        let insights = Insights::from_summaries(&s);
        assert_eq!(
            insights.type_contrast,
            TypeContrast::Contrast {
                most: "Movie".to_string(),
                least: "TV Show".to_string()
            }
        );
        assert_eq!(insights.peak_release_year, Some(2018));

        let lines = insight_lines(&insights);
        assert_eq!(lines[0], "✅ Netflix has more Movie than TV Show");
        assert_eq!(lines[1], "✅ Content peaked around: 2018");
        assert_eq!(lines[2], "✅ Top Genre: International Movies");
        assert_eq!(lines[3], "✅ Most targeted rating: TV-MA");
    }

    #[test]
    fn test_many_types_contrast_extremes() {
        let s = Summaries {
            types: summary(&[("Movie", 5), ("TV Show", 3), ("Special", 1)]),
            ..Summaries::default()
        };
        assert_eq!(
            Insights::from_summaries(&s).type_contrast,
            TypeContrast::Contrast {
                most: "Movie".to_string(),
                least: "Special".to_string()
            }
        );
    }

    #[test]
    fn test_tied_types_are_even() {
        let s = Summaries {
            types: summary(&[("Movie", 2), ("TV Show", 2)]),
            ..Summaries::default()
        };
        let insights = Insights::from_summaries(&s);
        assert_eq!(
            insights.type_contrast,
            TypeContrast::Even(vec!["Movie".to_string(), "TV Show".to_string()])
        );
        assert_eq!(
            insight_lines(&insights)[0],
            "✅ Netflix has equal numbers of Movie and TV Show"
        );
    }

    #[test]
    fn test_single_type() {
        let s = Summaries {
            types: summary(&[("Movie", 3)]),
            ..Summaries::default()
        };
        let insights = Insights::from_summaries(&s);
        assert_eq!(insights.type_contrast, TypeContrast::Single("Movie".to_string()));
        assert_eq!(insight_lines(&insights)[0], "✅ Netflix only lists Movie");
    }

    #[test]
    fn test_peak_year_tie_takes_earliest() {
        let s = Summaries {
            release_years: vec![(2001, 4), (2010, 4), (2020, 1)],
            ..Summaries::default()
        };
        assert_eq!(Insights::from_summaries(&s).peak_release_year, Some(2001));
    }

    #[test]
    fn test_empty_summaries_report_no_data() {
        let insights = Insights::from_summaries(&Summaries::default());
        assert_eq!(insights.type_contrast, TypeContrast::NoData);
        let lines = insight_lines(&insights);
        assert_eq!(lines[0], "✅ Netflix title types: no data");
        assert_eq!(lines[1], "✅ Content peaked around: no data");
        assert_eq!(lines[2], "✅ Top Genre: no data");
        assert_eq!(lines[3], "✅ Most targeted rating: no data");
    }
}
