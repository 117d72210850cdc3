use crate::types::{BarRow, SliceRow, Summary};
use crate::util::{format_int, format_share};
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

const BAR_GLYPH: &str = "█";

fn scaled_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let len = (count * width).div_ceil(max).max(1);
    BAR_GLYPH.repeat(len)
}

fn framed<T>(title: &str, note: Option<String>, rows: Vec<T>) -> String
where
    T: Tabled,
{
    let mut out = format!("{}\n", title);
    if let Some(n) = note {
        out.push_str(&format!("({})\n", n));
    }
    out.push('\n');
    if rows.is_empty() {
        out.push_str("(no rows)\n");
        return out;
    }
    out.push_str(&Table::new(rows).with(Style::markdown()).to_string());
    out.push('\n');
    out
}

/// Pie chart as a table of slices with their share of the total, in
/// summary order.
pub fn render_pie<K: Display>(title: &str, summary: &Summary<K>) -> String {
    let total: usize = summary.iter().map(|(_, c)| c).sum();
    let rows: Vec<SliceRow> = summary
        .iter()
        .map(|(label, count)| SliceRow {
            label: label.to_string(),
            count: format_int(*count),
            share: format_share(*count, total),
        })
        .collect();
    framed(title, None, rows)
}

/// Bar rows in the order given, scaled so the largest count spans `width`.
fn bar_rows<K: Display>(items: &[&(K, usize)], width: usize) -> Vec<BarRow> {
    let max = items.iter().map(|(_, c)| *c).max().unwrap_or(0);
    items
        .iter()
        .map(|(label, count)| BarRow {
            label: label.to_string(),
            count: format_int(*count),
            bar: scaled_bar(*count, max, width),
        })
        .collect()
}

/// Time series drawn top to bottom in key order.
pub fn render_line<K: Display>(
    title: &str,
    x_label: &str,
    y_label: &str,
    summary: &Summary<K>,
    width: usize,
) -> String {
    let note = format!("x: {}, y: {}", x_label, y_label);
    let items: Vec<&(K, usize)> = summary.iter().collect();
    framed(title, Some(note), bar_rows(&items, width))
}

/// Horizontal bars, largest first.
pub fn render_barh<K: Display>(
    title: &str,
    y_label: &str,
    x_label: &str,
    summary: &Summary<K>,
    width: usize,
) -> String {
    let mut ordered: Vec<&(K, usize)> = summary.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    let note = format!("{} by {}", y_label, x_label);
    framed(title, Some(note), bar_rows(&ordered, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_bar() {
        assert_eq!(scaled_bar(10, 10, 4), "████");
        assert_eq!(scaled_bar(5, 10, 4), "██");
        assert_eq!(scaled_bar(1, 1000, 4), "█");
        assert_eq!(scaled_bar(0, 10, 4), "");
    }

    #[test]
    fn test_pie_shares() {
        let summary = vec![("Movie".to_string(), 2), ("TV Show".to_string(), 1)];
        let out = render_pie("Movies vs TV Shows on Netflix", &summary);
        assert!(out.starts_with("Movies vs TV Shows on Netflix\n"));
        assert!(out.contains("66.7%"));
        assert!(out.contains("33.3%"));
        assert!(out.find("| Movie").unwrap() < out.find("| TV Show").unwrap());
    }

    #[test]
    fn test_line_keeps_key_order() {
        let summary = vec![(1998, 1), (2019, 3), (2021, 2)];
        let out = render_line("Number of Titles Released by Year", "Year", "Count of Titles", &summary, 6);
        assert!(out.contains("(x: Year, y: Count of Titles)"));
        let p1998 = out.find("1998").unwrap();
        let p2019 = out.find("2019").unwrap();
        let p2021 = out.find("2021").unwrap();
        assert!(p1998 < p2019 && p2019 < p2021);
        assert!(out.contains("██████"));
    }

    #[test]
    fn test_barh_largest_first() {
        let summary = vec![("PG".to_string(), 3), ("TV-MA".to_string(), 3200)];
        let out = render_barh("Distribution of Content Ratings", "Rating", "Count", &summary, 10);
        assert!(out.find("TV-MA").unwrap() < out.find("PG").unwrap());
        assert!(out.contains("3,200"));
    }

    #[test]
    fn test_empty_chart_has_no_rows() {
        let summary: Summary<String> = Vec::new();
        let out = render_barh("Top 10 Genres on Netflix", "Genre", "Number of Titles", &summary, 10);
        assert!(out.contains("(no rows)"));
    }
}
