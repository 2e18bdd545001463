// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tahqiq::{normalize, NormalizeOptions, Validator, ValidatorConfig, VerseRef};
use tracing::info;

mod cli;
use cli::{display, logging, Cli, Commands, GlobalArgs};

/// A None verdict under `--strict`.
const EXIT_NO_MATCH: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.log_json);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", display::themed(display::RED, &[display::BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let global = cli.global;
    let load = || load_validator(&global);

    let found = match cli.command {
        Commands::Normalize {
            text,
            keep_diacritics,
            no_heuristics,
        } => {
            let options = NormalizeOptions {
                remove_diacritics: !keep_diacritics,
                apply_script_heuristics: !no_heuristics,
                ..NormalizeOptions::default()
            };
            let normalized = normalize(&text, &options);
            if global.json {
                print_json(&serde_json::json!({ "input": text, "normalized": normalized }))?;
            } else {
                println!("{}", normalized);
            }
            true
        }

        Commands::Validate { text, against } => {
            let validator = load()?;
            let result = match against {
                Some(reference) => validator.validate_against(&text, &reference),
                None => validator.validate(&text),
            };
            if global.json {
                print_json(&result)?;
            } else {
                display::print_validation(&result);
            }
            result.is_valid
        }

        Commands::Fabrication { text } => {
            let analysis = load()?.analyze_fabrication(&text);
            if global.json {
                print_json(&analysis)?;
            } else {
                display::print_fabrication(&analysis);
            }
            analysis.stats.fabricated_words == 0
        }

        Commands::Verse { reference } => {
            let Some(cited) = VerseRef::parse(&reference) else {
                bail!("invalid reference '{}': expected surah:ayah or surah:start-end", reference);
            };
            let validator = load()?;
            if cited.is_range() {
                let range = validator.get_verse_range(cited.surah, cited.start, cited.end);
                match (&range, global.json) {
                    (Some(range), true) => print_json(range)?,
                    (Some(range), false) => display::print_range(range),
                    (None, _) => eprintln!("{} is not in the loaded corpus", cited),
                }
                range.is_some()
            } else {
                let verse = validator.get_verse(cited.surah, cited.start);
                match (verse, global.json) {
                    (Some(verse), true) => print_json(verse)?,
                    (Some(verse), false) => display::print_verse(verse),
                    (None, _) => eprintln!("{} is not in the loaded corpus", cited),
                }
                verse.is_some()
            }
        }

        Commands::Surah { number } => {
            let validator = load()?;
            let surah = validator.get_surah(number);
            match (surah, global.json) {
                (Some(surah), true) => print_json(surah)?,
                (Some(surah), false) => display::print_surah(surah),
                (None, _) => eprintln!("surah {} is not in the loaded corpus", number),
            }
            surah.is_some()
        }

        Commands::Search { query, limit } => {
            let hits = load()?.search(&query, limit);
            if global.json {
                print_json(&hits)?;
            } else {
                display::print_search(&query, &hits);
            }
            !hits.is_empty()
        }
    };

    if global.strict && !found {
        return Ok(ExitCode::from(EXIT_NO_MATCH));
    }
    Ok(ExitCode::SUCCESS)
}

/// Config file (if any), then flags on top.
fn load_config(global: &GlobalArgs) -> Result<ValidatorConfig> {
    let mut config = match &global.config {
        Some(path) => ValidatorConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if !global.riwayat.is_empty() {
        config.riwayat = global.riwayat.clone();
    }
    config.allow_partial |= global.allow_partial;
    Ok(config)
}

fn load_validator(global: &GlobalArgs) -> Result<Validator> {
    let config = load_config(global)?;
    info!(data = %global.data.display(), riwayat = ?config.active_riwayat(), "loading corpus");
    Validator::from_data_dir(&global.data, config)
        .with_context(|| format!("failed to load corpus from {}", global.data.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
