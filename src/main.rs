use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sleuth::{
    ingest_json, phonetic_code, suggest, EngineConfig, IndexedDocument, Lexicon, SearchEngine,
    SearchOptions,
};

mod cli;
use cli::display::{self, dim, kind_badge, render_marks, row, score_value, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {:#}", display::error_label(), e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `SLEUTH_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLEUTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            docs,
            query,
            limit,
            min_score,
            no_typos,
            json,
            config,
            lexicon,
        } => {
            let documents = load_documents(&docs)?;
            let mut engine: SearchEngine = match config {
                Some(path) => {
                    let config = EngineConfig::load(&path).with_context(|| format!("loading config {path}"))?;
                    SearchEngine::with_config(config)?
                }
                None => SearchEngine::new(),
            };
            if let Some(path) = lexicon {
                let extra = Lexicon::load(&path).with_context(|| format!("loading lexicon {path}"))?;
                let mut merged = Lexicon::builtin().clone();
                merged.extend(extra);
                engine = engine.with_lexicon(merged);
            }
            let options = SearchOptions {
                max_results: limit,
                min_score,
                suggest_typos: !no_typos,
                ..SearchOptions::default()
            };
            let results = engine.query(&query, &documents, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            section_top(&format!("{} results for \"{}\"", results.len(), query));
            if results.is_empty() {
                row(&format!(" {}", dim("no matches")));
            }
            for (rank, result) in results.iter().enumerate() {
                let title = result
                    .highlighted_title
                    .as_deref()
                    .map(render_marks)
                    .unwrap_or_else(|| result.document.title.clone());
                row(&format!(
                    " {:>2}. {} {} {}",
                    rank + 1,
                    score_value(result.score),
                    kind_badge(result.kind),
                    title
                ));
                if let Some(explanation) = &result.explanation {
                    row(&format!("     {}", dim(explanation)));
                }
            }
            section_bot();
        }

        Commands::Suggest { docs, word, distance } => {
            let documents = load_documents(&docs)?;
            let suggestions = suggest(&word, &documents, distance);
            if suggestions.is_empty() {
                println!("{}", dim("no corrections within range"));
            }
            for suggestion in suggestions {
                println!("{suggestion}");
            }
        }

        Commands::Phonetic { words } => {
            for word in words {
                let codes = phonetic_code(&word);
                println!(
                    "{:<20} soundex {:<6} metaphone {}/{}",
                    word, codes.soundex, codes.metaphone.0, codes.metaphone.1
                );
            }
        }
    }
    Ok(())
}

/// Read algorithm records, or plain indexed documents if that fails.
fn load_documents(path: &str) -> Result<Vec<IndexedDocument>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    match ingest_json(&raw) {
        Ok(documents) => Ok(documents),
        Err(records_err) => serde_json::from_str::<Vec<IndexedDocument>>(&raw)
            .map_err(|_| records_err)
            .with_context(|| format!("{path} is not a JSON array of documents")),
    }
}
