//! Bankview CLI
//!
//! Command-line access to the dashboard data layer:
//! - Build chart specs from app record files
//! - Allocate palettes, classify sentiment, format values
//! - Export reviews to CSV
//! - Manage persisted UI preferences

use anyhow::Context;
use bankview::chart::{build_chart_spec, load_records, AppSummary, ChartMetric};
use bankview::config::{generate_default_config, Config, LoggingConfig};
use bankview::export::{export_reviews_csv, ReviewRecord};
use bankview::format::{format_date, format_number, format_relative_time, group_thousands, parse_timestamp};
use bankview::palette::{allocate_colors_checked, Palette};
use bankview::sentiment::{
    classify_sentiment, extract_aspects, AspectSummary, ScoredReview, SentimentSummary,
    SentimentValue,
};
use bankview::ui::{TableOptions, ToastKind, ToastSpec, UiPreferences};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bankview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Presentation data for the banking app review dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a chart spec from a JSON or CSV file of app records
    Chart {
        /// Record file (.json or .csv)
        file: PathBuf,
        /// Metric to plot (rating, installs)
        #[arg(short, long, default_value = "rating")]
        metric: String,
        /// Palette (default: from config for the metric)
        #[arg(short, long)]
        palette: Option<String>,
    },

    /// Summary statistics for a file of app records
    Summary {
        /// Record file (.json or .csv)
        file: PathBuf,
    },

    /// Allocate chart colours
    Colors {
        /// Number of colours
        #[arg(allow_negative_numbers = true)]
        count: i64,
        /// Palette (multicolor, blue, green; anything else is gray)
        #[arg(short, long, default_value = "multicolor")]
        palette: String,
    },

    /// Classify a sentiment label or polarity score
    Sentiment {
        /// "positive", "negative", or a number
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Sentiment counts and mean score for scored reviews (JSON array)
    SentimentSummary {
        /// Review file (.json) with `sentiment_score` per review
        file: PathBuf,
    },

    /// Aspect-level sentiment for scored reviews (JSON array)
    Aspects {
        /// Review file (.json) with `content` and `sentiment_score`
        file: PathBuf,
        /// Print headline figures instead of the per-aspect breakdown
        #[arg(long)]
        summary: bool,
    },

    /// Describe how long ago a timestamp was
    Ago {
        /// RFC 3339 or unix milliseconds
        timestamp: String,
    },

    /// Abbreviate a number (K/M)
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Print with thousands separators instead
        #[arg(long)]
        grouped: bool,
    },

    /// Long-form date for a unix millisecond timestamp
    Date {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,
    },

    /// Export reviews (JSON array) to CSV
    ExportReviews {
        /// Review file (.json)
        file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe a toast notification
    Toast {
        /// success, error, warning, info
        kind: String,
        message: String,
        #[arg(long)]
        title: Option<String>,
    },

    /// Data table options, with optional JSON overrides
    Table {
        #[arg(long)]
        overrides: Option<String>,
    },

    /// Show or change UI preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print current preferences
    Show,
    /// Toggle light/dark theme
    Theme,
    /// Toggle sidebar collapse
    Sidebar,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging)?;

    tracing::debug!("Bankview v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Chart {
            file,
            metric,
            palette,
        } => {
            let metric: ChartMetric = metric.parse()?;
            let palette = palette
                .map(|p| Palette::from_name(&p))
                .unwrap_or_else(|| config.palette_for(metric));

            let records = load_records(&file)
                .with_context(|| format!("Failed to load records from {:?}", file))?;
            print_json(&build_chart_spec(&records, metric, &palette))?;
        }

        Commands::Summary { file } => {
            let records = load_records(&file)
                .with_context(|| format!("Failed to load records from {:?}", file))?;

            match AppSummary::from_records(&records) {
                Some(summary) => print_json(&summary)?,
                None => println!("No app records in {:?}", file),
            }
        }

        Commands::Colors { count, palette } => {
            let colors = allocate_colors_checked(count, &Palette::from_name(&palette))?;
            print_json(&colors)?;
        }

        Commands::Sentiment { value } => {
            let value = match value.trim().parse::<f64>() {
                Ok(score) => SentimentValue::Score(score),
                Err(_) => SentimentValue::Label(value),
            };
            print_json(&classify_sentiment(&value))?;
        }

        Commands::SentimentSummary { file } => {
            let reviews: Vec<ScoredReview> = read_json(&file)?;
            print_json(&SentimentSummary::from_reviews(&reviews))?;
        }

        Commands::Aspects { file, summary } => {
            let reviews: Vec<ScoredReview> = read_json(&file)?;
            let analysis = extract_aspects(&reviews);
            if summary {
                print_json(&AspectSummary::from_analysis(&analysis))?;
            } else {
                print_json(&analysis)?;
            }
        }

        Commands::Ago { timestamp } => {
            let timestamp = parse_timestamp(&timestamp)?;
            println!("{}", format_relative_time(timestamp));
        }

        Commands::Number { value, grouped } => {
            if grouped {
                println!("{}", group_thousands(value));
            } else {
                println!("{}", format_number(value));
            }
        }

        Commands::Date { timestamp } => {
            println!("{}", format_date(timestamp));
        }

        Commands::ExportReviews { file, output } => {
            let reviews: Vec<ReviewRecord> = read_json(&file)?;

            let written = match output {
                Some(path) => {
                    let out = File::create(&path)
                        .with_context(|| format!("Failed to create {:?}", path))?;
                    let written = export_reviews_csv(out, &reviews)?;
                    eprintln!("Exported {} reviews to {:?}", written, path);
                    written
                }
                None => export_reviews_csv(std::io::stdout().lock(), &reviews)?,
            };
            tracing::debug!("Export complete: {} rows", written);
        }

        Commands::Toast {
            kind,
            message,
            title,
        } => {
            let kind: ToastKind = kind.parse()?;
            let toast = match title {
                Some(title) => ToastSpec::new(title, message, kind),
                None => ToastSpec::new(kind.default_title(), message, kind),
            };
            print_json(&toast)?;
        }

        Commands::Table { overrides } => {
            let overrides = match overrides {
                Some(raw) => serde_json::from_str(&raw).context("Invalid table overrides")?,
                None => serde_json::Value::Null,
            };
            print_json(&TableOptions::default().merged(overrides)?)?;
        }

        Commands::Prefs { action } => {
            let path = &config.preferences.path;
            let mut prefs = UiPreferences::load(path)?;

            match action {
                PrefsAction::Show => {}
                PrefsAction::Theme => {
                    let theme = prefs.toggle_theme();
                    prefs.save(path)?;
                    tracing::info!("Theme set to {}", theme);
                }
                PrefsAction::Sidebar => {
                    let collapsed = prefs.toggle_sidebar();
                    prefs.save(path)?;
                    tracing::info!("Sidebar collapsed: {}", collapsed);
                }
            }

            println!("theme = {}", prefs.theme);
            println!("sidebar_collapsed = {}", prefs.sidebar_collapsed);
            println!("path = {}", path.display());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    write_file(&path, &content)?;
                    eprintln!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Install the global tracing subscriber
fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bankview={}", config.level)));

    // stdout carries command output, so logs go to stderr or a file
    let writer = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let ansi = config.file.is_none();

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(ansi).with_writer(writer))
            .init();
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse reviews from {:?}", path))
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))
}
