// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tahqiq command-line interface.
//!
//! Every subcommand except `normalize` loads the corpus first. Global flags
//! may appear before or after the subcommand.

pub mod display;
pub mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tahqiq::Riwaya;

#[derive(Parser)]
#[command(
    name = "tahqiq",
    about = "Verify Quranic quotations against the reference text",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Data directory containing manifest.json
    #[arg(long, global = true, env = "TAHQIQ_DATA", default_value = "data/quran")]
    pub data: PathBuf,

    /// Riwaya to load in addition to hafs (repeatable)
    #[arg(long = "riwaya", value_name = "ID", global = true)]
    pub riwayat: Vec<Riwaya>,

    /// JSON validator config; flags override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Accept a data directory that is not the complete corpus
    #[arg(long, global = true)]
    pub allow_partial: bool,

    /// Exit with status 2 when the verdict is None
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether TEXT is a quotation
    Validate {
        /// Text to check
        text: String,

        /// Only check against this citation (surah:ayah or surah:start-end)
        #[arg(long, value_name = "REF")]
        against: Option<String>,
    },

    /// Flag words that occur nowhere in the corpus
    Fabrication {
        text: String,
    },

    /// Print a verse or a range of verses
    Verse {
        /// surah:ayah or surah:start-end
        reference: String,
    },

    /// Print surah metadata
    Surah {
        number: u16,
    },

    /// Find verses containing QUERY
    Search {
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Print the normalized form of TEXT (no corpus needed)
    Normalize {
        text: String,

        /// Keep vowel marks
        #[arg(long)]
        keep_diacritics: bool,

        /// Skip superscript alef, hamza and word-final corrections
        #[arg(long)]
        no_heuristics: bool,
    },
}
