use anyhow::{Context, Result, bail};
use clap::Parser;
use outline_press_config::Config;
use outline_press_engine::{
    Article, ArticleKind, CollectOptions, ParseOptions, SourceFilter, collect_articles,
    parse_source,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// One line per article
    Summary,
    /// JSON array of articles
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "outline-press",
    version,
    about = "Extract publishable articles from outline-style markdown notes"
)]
struct Cli {
    /// Notes directory or single markdown file (defaults to notes_path from the config file)
    path: Option<PathBuf>,

    /// Marker substring that flags an article bullet
    #[arg(long)]
    marker: Option<String>,

    /// End-of-document token; an empty value disables it
    #[arg(long)]
    end_token: Option<String>,

    /// Label of the bullet holding article properties
    #[arg(long)]
    property_label: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Keep articles whose draft property is true
    #[arg(long)]
    include_drafts: bool,

    /// Allow a single file to be read as a `---` header plus body
    #[arg(long)]
    whole_file: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

    let path = match (&cli.path, &config) {
        (Some(path), _) => path.clone(),
        (None, Some(config)) => config.notes_path.clone(),
        (None, None) => bail!(
            "No notes path provided and no config file found\n\
             Usage: outline-press <PATH>\n\
             Or create a config file at {}",
            config_path.display()
        ),
    };

    let marker = resolve_marker(cli.marker.as_deref(), config.as_ref()).with_context(|| {
        format!(
            "No marker token: pass --marker or set marker_token or publish_block in {}",
            config_path.display()
        )
    })?;
    let options = parse_options(&cli, marker, config.as_ref());

    let articles = if path.is_dir() {
        let collect = collect_options(options, config.as_ref())?;
        collect_articles(&path, &collect)
            .with_context(|| format!("Failed to collect articles from {}", path.display()))?
    } else if path.is_file() {
        parse_single_file(&path, &options.with_whole_file(cli.whole_file))?
    } else {
        bail!("{} is neither a directory nor a file", path.display());
    };

    let total = articles.len();
    let articles = drop_drafts(articles, cli.include_drafts);
    log::debug!("{} of {total} articles kept", articles.len());

    println!("{}", render(&articles, cli.format)?);
    Ok(())
}

/// `--marker` beats the config's `marker_token`, which beats `publish_block`.
fn resolve_marker(cli_marker: Option<&str>, config: Option<&Config>) -> Option<String> {
    match cli_marker {
        Some(marker) if !marker.is_empty() => Some(marker.to_string()),
        _ => config.and_then(Config::marker),
    }
}

fn parse_options(cli: &Cli, marker: String, config: Option<&Config>) -> ParseOptions {
    let mut options = ParseOptions::new(marker);
    if let Some(config) = config {
        options = options
            .with_end_token(config.end_token.as_str())
            .with_property_label(config.property_label.as_str())
            .with_sanitize_links(config.sanitize_links);
    }
    if let Some(token) = &cli.end_token {
        options = options.with_end_token(token.as_str());
    }
    if let Some(label) = &cli.property_label {
        options = options.with_property_label(label.as_str());
    }
    options
}

fn collect_options(parse: ParseOptions, config: Option<&Config>) -> Result<CollectOptions> {
    let mut options = CollectOptions::new(parse);
    if let Some(config) = config {
        options.source_dirs = config.source_dirs.clone();
        options.whole_file_dirs = config.whole_file_dirs.clone();
        options.filter = SourceFilter::new(config.exclude_patterns()?, config.max_file_name_len);
    }
    Ok(options)
}

fn parse_single_file(path: &Path, options: &ParseOptions) -> Result<Vec<Article>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let source_file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(parse_source(&text, &source_file, options))
}

fn drop_drafts(articles: Vec<Article>, include_drafts: bool) -> Vec<Article> {
    if include_drafts {
        return articles;
    }
    articles.into_iter().filter(|a| !a.is_draft()).collect()
}

fn render(articles: &[Article], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(articles)?),
        OutputFormat::Summary => Ok(articles
            .iter()
            .map(|a| {
                let kind = match a.kind() {
                    ArticleKind::Block => "block",
                    ArticleKind::WholeFile => "whole_file",
                };
                let lines = a.body().lines().count();
                format!("{kind}\t{}\t{}\t{lines} lines", a.source_file(), a.title())
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
