// Parsing and formatting helpers shared by the pipeline stages.
//
// Raw CSV cells arrive as text; this module decides what counts as missing
// and how counts are shown on screen.
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Deserializer};

/// Cell contents treated as missing, in addition to the empty string.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell should be read as null. Matching is exact, so a
/// padded `" NA "` is kept as text.
pub fn is_na(s: &str) -> bool {
    s.is_empty() || NA_TOKENS.contains(&s)
}

/// Serde adapter for optional CSV cells: empty cells and NA tokens become `None`.
pub fn deserialize_na<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !is_na(s)))
}

pub fn parse_i32_safe(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>().ok()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

/// `part / total` as a one-decimal percentage, e.g. `69.6%`.
pub fn format_share(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
