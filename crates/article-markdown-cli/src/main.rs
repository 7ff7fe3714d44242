use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use article_markdown_config::Config;
use article_markdown_engine::{
    Document, ParseOptions, group_by_bounds, parse_with, parsing::snapshot, search,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Indented element tree with spans
    Tree,
    /// Plain-text projection
    Plain,
    /// Hits of --query in the plain text, per element
    Search,
}

#[derive(Parser)]
#[command(name = "article-markdown")]
#[command(about = "Inspect how an article's markdown is parsed")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Mode::Tree)]
    mode: Mode,

    /// Text to look for in search mode
    #[arg(short, long, required_if_eq("mode", "search"))]
    query: Option<String>,

    /// Overrides `max_depth` from the config file
    #[arg(long)]
    max_depth: Option<usize>,

    /// Store the effective `max_depth` in the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config_path = Config::default_path();
    let config = match Config::read(&config_path) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            Config::default()
        }
    };
    let options = ParseOptions {
        max_depth: config.max_depth_or(cli.max_depth, ParseOptions::DEFAULT_MAX_DEPTH),
    };
    log::debug!("Parsing {} with {options:?}", cli.input.display());

    if cli.save_config {
        save_max_depth(config, options.max_depth, &config_path)?;
    }

    let markdown = fs::read_to_string(&cli.input)
        .with_context(|| format!("Error reading {}", cli.input.display()))?;
    let doc = parse_with(&markdown, &options);

    let output = match cli.mode {
        Mode::Tree => snapshot::outline(&doc),
        Mode::Plain => doc.plain_text(),
        Mode::Search => render_search(&doc, cli.query.as_deref().unwrap_or_default()),
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn save_max_depth(mut config: Config, max_depth: usize, path: &Path) -> Result<()> {
    config.max_depth = Some(max_depth);
    config
        .write(path)
        .with_context(|| format!("Error saving {}", path.display()))?;
    log::info!("Saved max_depth = {max_depth} to {}", path.display());
    Ok(())
}

/// One line per hit: `start..end Kind "element plain text"`.
fn render_search(doc: &Document, query: &str) -> String {
    let plain = doc.plain_text();
    let hits = search(&plain, query);
    let grouped = group_by_bounds(&hits, &doc.plain_bounds());

    let mut out = String::new();
    for (el, hits) in doc.iter().zip(&grouped) {
        for (start, end) in hits {
            out.push_str(&format!(
                "{start}..{end} {} {:?}\n",
                el.kind.name(),
                el.plain_text()
            ));
        }
    }
    if out.is_empty() {
        out.push_str(&format!("no matches for {query:?}\n"));
    }
    out
}
