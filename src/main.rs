// Entry point: load -> clean -> derive -> aggregate -> report.
//
// Each stage takes the previous stage's table by value and hands back a new
// one; nothing is shared between stages except what is passed along.
mod aggregator;
mod cleaner;
mod config;
mod deriver;
mod error;
mod insights;
mod loader;
mod render;
mod types;
mod util;

use aggregator::Summaries;
use cleaner::CleanReport;
use config::Config;
use error::LoadError;
use insights::{insight_lines, Insights};
use loader::LoadReport;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use types::TitleRecord;

/// Everything the report is printed from.
struct Analysis {
    load: LoadReport,
    clean: CleanReport,
    records: Vec<TitleRecord>,
    summaries: Summaries,
}

/// Install the global `tracing` subscriber. `RUST_LOG` wins over the
/// configured level; output goes to stderr so stdout carries only the report.
fn setup_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();
}

fn analyze(config: &Config) -> Result<Analysis, LoadError> {
    let (raw, load) = loader::load_titles(&config.input_path)?;
    let (cleaned, clean) = cleaner::clean(raw);
    let records = deriver::derive(cleaned);
    let summaries = Summaries::compute(&records, config.top_genres);
    tracing::debug!(
        types = summaries.types.len(),
        years = summaries.release_years.len(),
        genres = summaries.genres.len(),
        ratings = summaries.ratings.len(),
        "summaries computed"
    );
    Ok(Analysis {
        load,
        clean,
        records,
        summaries,
    })
}

fn print_diagnostics(analysis: &Analysis) {
    let added: Vec<(i32, u32)> = analysis
        .records
        .iter()
        .filter_map(|r| Some((r.added.year_added?, r.added.month_added?)))
        .collect();
    println!(
        "Processing dataset... ({} rows loaded, {} with a parsed date_added)",
        util::format_int(analysis.load.total_rows),
        util::format_int(added.len())
    );
    let c = &analysis.clean;
    println!(
        "Note: filled \"{}\" for {} directors, {} cast lists, {} countries.",
        cleaner::UNKNOWN,
        util::format_int(c.unknown_directors),
        util::format_int(c.unknown_cast),
        util::format_int(c.unknown_countries)
    );
    if let (Some(first), Some(last)) = (added.iter().min(), added.iter().max()) {
        println!(
            "Titles added between {}-{:02} and {}-{:02}.",
            first.0, first.1, last.0, last.1
        );
    }
    if c.unparsed_dates > 0 || c.unparsed_years > 0 {
        println!(
            "Note: {} date_added and {} release_year values could not be parsed.",
            util::format_int(c.unparsed_dates),
            util::format_int(c.unparsed_years)
        );
    }
    println!();
}

fn print_charts(analysis: &Analysis, config: &Config) {
    let s = &analysis.summaries;
    let width = config.bar_width;
    println!("{}", render::render_pie("Movies vs TV Shows on Netflix", &s.types));
    println!(
        "{}",
        render::render_line(
            "Number of Titles Released by Year",
            "Year",
            "Count of Titles",
            &s.release_years,
            width
        )
    );
    println!(
        "{}",
        render::render_barh(
            &format!("Top {} Genres on Netflix", config.top_genres),
            "Genre",
            "Number of Titles",
            &s.genres,
            width
        )
    );
    println!(
        "{}",
        render::render_barh("Distribution of Content Ratings", "Rating", "Count", &s.ratings, width)
    );
}

fn main() -> ExitCode {
    let config = Config::default();
    setup_logging(&config);

    let analysis = match analyze(&config) {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(path = %config.input_path.display(), error = %e, "load failed");
            eprintln!("Failed to load file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_diagnostics(&analysis);
    print_charts(&analysis, &config);
    for line in insight_lines(&Insights::from_summaries(&analysis.summaries)) {
        println!("{}", line);
    }
    ExitCode::SUCCESS
}
