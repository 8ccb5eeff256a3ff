// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sleuth command-line interface.
//!
//! Three subcommands: `search` to run a ranked query over a JSON document
//! file, `suggest` to see which typo corrections the fallback would try, and
//! `phonetic` to print the codes the sound-alike matcher compares.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sleuth",
    about = "Typo-tolerant fuzzy search with explainable ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON file of documents and display ranked results
    Search {
        /// JSON array of algorithm records or indexed documents
        docs: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Drop results scoring below this (0.0 to 1.0)
        #[arg(long, default_value = "0.1")]
        min_score: f64,

        /// Don't retry with typo corrections when nothing matches
        #[arg(long)]
        no_typos: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Engine configuration (JSON: capacities and scoring weights)
        #[arg(long)]
        config: Option<String>,

        /// Extra abbreviations, synonyms and jargon, merged into the bundled lexicon
        #[arg(long)]
        lexicon: Option<String>,
    },

    /// Show typo corrections drawn from the documents' vocabulary
    Suggest {
        /// JSON array of algorithm records or indexed documents
        docs: String,

        /// Possibly misspelled word
        word: String,

        /// Maximum edit distance for a correction
        #[arg(short, long, default_value = "2")]
        distance: usize,
    },

    /// Print Soundex and Metaphone codes for words
    Phonetic {
        #[arg(required = true)]
        words: Vec<String>,
    },
}
