use std::path::PathBuf;

/// Run settings. The binary always uses `Config::default()`; tests build
/// their own to point at fixture files.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    /// How many genres the ranking keeps.
    pub top_genres: usize,
    /// Width in glyphs of the longest chart bar.
    pub bar_width: usize,
    /// Default `tracing` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from("netflix_titles.csv"),
            top_genres: 10,
            bar_width: 40,
            log_level: "info".to_string(),
        }
    }
}
