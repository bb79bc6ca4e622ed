use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{Lookup, DEFAULT_MIN_SCORE, DEFAULT_SUGGESTION_LIMIT};
use server::{AppState, MovieRecommendation, RecommendationOrchestrator, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Movie Recommender - content-based "more like this" recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Content-based movie recommendations over a small catalog", long_about = None)]
struct Cli {
    /// Optional .json or .dat catalog (defaults to the built-in 50 movies)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movies similar to a title
    Recommend {
        /// Exact movie title (case-sensitive)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5")]
        count: usize,

        /// Show why each movie was recommended
        #[arg(long)]
        explain: bool,
    },

    /// Suggest catalog titles for partial or misspelled input
    Suggest {
        /// Text to match against titles
        #[arg(long)]
        query: String,

        /// Maximum number of suggestions
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,

        /// Suggestions must score strictly above this (0-100)
        #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: u8,
    },

    /// List every movie in the catalog
    List,

    /// Run the web UI
    Serve {
        /// Host to bind (overrides MOVIE_RECS_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides MOVIE_RECS_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run benchmark to test query latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Serve { host, port } = cli.command {
        return handle_serve(cli.catalog, host, port).await;
    }

    let start = Instant::now();
    let orchestrator = RecommendationOrchestrator::from_catalog_path(cli.catalog.as_deref())
        .context("Failed to build recommendation context")?;
    println!(
        "{} Built recommendation context for {} movies in {:?}",
        "✓".green(),
        orchestrator.catalog().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            count,
            explain,
        } => handle_recommend(&orchestrator, &title, count, explain)?,
        Commands::Suggest {
            query,
            limit,
            min_score,
        } => handle_suggest(&orchestrator, &query, limit, min_score),
        Commands::List => handle_list(&orchestrator),
        Commands::Benchmark { requests } => {
            handle_benchmark(Arc::new(orchestrator), requests).await?
        }
        Commands::Serve { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    orchestrator: &RecommendationOrchestrator,
    title: &str,
    count: usize,
    explain: bool,
) -> Result<()> {
    match orchestrator.get_recommendations(title, count) {
        Lookup::Found(recommendations) if recommendations.is_empty() => {
            println!("{}", "No recommendations found for the selected movie.".yellow());
        }
        Lookup::Found(recommendations) => print_recommendations(title, &recommendations, explain),
        Lookup::NotFound => {
            eprintln!(
                "{}",
                format!("Movie '{}' not found! Please check the title.", title).red()
            );
            let suggestions =
                orchestrator.get_suggestions(title, DEFAULT_SUGGESTION_LIMIT, DEFAULT_MIN_SCORE);
            if !suggestions.is_empty() {
                eprintln!("Did you mean:");
                for suggestion in suggestions {
                    eprintln!("  - {}", suggestion.title);
                }
            }
            bail!("Movie '{}' not found", title);
        }
    }
    Ok(())
}

/// Handle the 'suggest' command
fn handle_suggest(orchestrator: &RecommendationOrchestrator, query: &str, limit: usize, min_score: u8) {
    let suggestions = orchestrator.get_suggestions(query, limit, min_score);
    if suggestions.is_empty() {
        println!("{}", format!("No titles match '{}'", query).yellow());
        return;
    }

    println!("{}", format!("Suggestions for '{}':", query).bold().blue());
    for suggestion in suggestions {
        println!(
            "{} {} {}",
            "•".green(),
            suggestion.title,
            format!("(score {})", suggestion.score).dimmed()
        );
    }
}

/// Handle the 'list' command
fn handle_list(orchestrator: &RecommendationOrchestrator) {
    println!("{}", "Catalog:".bold().blue());
    for movie in orchestrator.catalog() {
        println!("{:>3}: {} [{}]", movie.id, movie.title, movie.genres);
    }
}

/// Handle the 'serve' command
async fn handle_serve(catalog: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if catalog.is_some() {
        config.catalog_path = catalog;
    }

    let orchestrator = RecommendationOrchestrator::from_catalog_path(config.catalog_path.as_deref())
        .context("Failed to build recommendation context")?;
    let addr = config.addr();
    println!("{} Serving on http://{}", "✓".green(), addr);
    server::serve(AppState::new(orchestrator, config), &addr).await
}

/// Handle the 'benchmark' command
async fn handle_benchmark(orchestrator: Arc<RecommendationOrchestrator>, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    // Pick random catalog titles to query
    let titles: Vec<String> = {
        let catalog = orchestrator.catalog();
        (0..requests)
            .filter_map(|_| {
                let idx = rand::random::<u32>() as usize % catalog.len();
                catalog.get(idx).map(|m| m.title.clone())
            })
            .collect()
    };

    // Run queries concurrently on the blocking pool
    let wall_start = Instant::now();
    let mut handles = vec![];
    for title in titles {
        let orchestrator = orchestrator.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let found = orchestrator.get_recommendations(&title, 10).is_found();
            (start.elapsed(), found)
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(handles.len());
    for handle in handles {
        let (elapsed, found) = handle.await.context("Benchmark task panicked")?;
        if !found {
            bail!("Benchmark queried a title missing from the catalog");
        }
        timings.push(elapsed);
    }
    let wall_time = wall_start.elapsed();
    tracing::debug!("benchmark finished {} requests in {:?}", timings.len(), wall_time);

    timings.sort();
    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", timings.len());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(title: &str, recommendations: &[MovieRecommendation], explain: bool) {
    println!("{}", format!("Recommendations for '{}':", title).bold().blue());
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] - Score: {:.2}",
            (rank + 1).to_string().green(),
            rec.title,
            rec.genres.join(", "),
            rec.score
        );
        if explain {
            println!("   Explanation: {}", rec.explanation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend_defaults() {
        let cli = Cli::try_parse_from(["movie-recs", "recommend", "--title", "The Matrix"]).unwrap();
        match cli.command {
            Commands::Recommend { title, count, explain } => {
                assert_eq!(title, "The Matrix");
                assert_eq!(count, 5);
                assert!(!explain);
            }
            _ => panic!("expected recommend"),
        }
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_parse_suggest_defaults() {
        let cli = Cli::try_parse_from(["movie-recs", "suggest", "--query", "Inceptoin"]).unwrap();
        match cli.command {
            Commands::Suggest { query, limit, min_score } => {
                assert_eq!(query, "Inceptoin");
                assert_eq!(limit, 5);
                assert_eq!(min_score, 50);
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn test_recommend_unknown_title_fails() {
        let orchestrator = RecommendationOrchestrator::builtin().unwrap();
        assert!(handle_recommend(&orchestrator, "Inceptoin", 5, false).is_err());
        assert!(handle_recommend(&orchestrator, "Inception", 5, true).is_ok());
    }
}
