// ABOUTME: Remy CLI - command-line front end for the recipe recommendation engine
// ABOUTME: Runs recommendations against a corpus file and validates corpus documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend against a corpus with a preference document
//! remy-cli recommend --corpus recipes.json --preferences prefs.json
//!
//! # Include a pre-computed relevance score table
//! remy-cli recommend --corpus recipes.json --preferences prefs.json \
//!     --relevance scores.json
//!
//! # Validate a corpus document and report counts
//! remy-cli corpus validate --corpus recipes.json
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use remy_recommender::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "remy-cli",
    about = "Remy recipe recommendation CLI",
    long_about = "Command-line tool for running the Remy ingredient-matching and ranking engine against a recipe corpus."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Produce a recommendation for a preference document
    Recommend {
        /// Path to the recipe corpus (JSON array)
        #[arg(long)]
        corpus: PathBuf,

        /// Path to the preference document (JSON object)
        #[arg(long)]
        preferences: PathBuf,

        /// Optional relevance score table (JSON array of {id, score})
        #[arg(long)]
        relevance: Option<PathBuf>,

        /// Override the oracle batch size
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Corpus maintenance commands
    Corpus {
        #[command(subcommand)]
        action: CorpusCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CorpusCommand {
    /// Parse a corpus document and report record counts
    Validate {
        /// Path to the recipe corpus (JSON array)
        #[arg(long)]
        corpus: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    match cli.command {
        Command::Recommend {
            corpus,
            preferences,
            relevance,
            batch_size,
        } => commands::recommend(&corpus, &preferences, relevance.as_deref(), batch_size),
        Command::Corpus {
            action: CorpusCommand::Validate { corpus },
        } => commands::validate_corpus(&corpus),
    }
}
