//! Custom cargo commands for tahqiq.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check, test, clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Seconds each fuzz target runs under `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 60;

const FUZZ_TARGETS: &[&str] = &[
    "normalize_text",
    "verse_reference",
    "validate_quote",
    "substring_index",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (features, clippy, full corpus)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {}s (needs cargo-fuzz and nightly)
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("tahqiq Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running Rust tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build without NFKC passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Loading the full corpus...");
    full_corpus_smoke_test()?;

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target for a fixed time
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Load `data/quran` without `--allow-partial` so the completeness checks
/// run, then check the first verse and a known variant reading.
fn full_corpus_smoke_test() -> Result<()> {
    let root = project_root()?;
    if !root.join("data/quran/manifest.json").exists() {
        println!("  (no data/quran directory, skipping)\n");
        return Ok(());
    }

    run_cargo(&["run", "--quiet", "--release", "--", "--strict", "verse", "1:1"])?;
    run_cargo(&[
        "run",
        "--quiet",
        "--release",
        "--",
        "--strict",
        "validate",
        "بسم الله الرحمن الرحيم",
    ])?;
    println!("✓ Full corpus loads and validates\n");
    Ok(())
}
