//! Custom cargo commands for the catalog-search crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly
//!   cargo xtask smoke     - Run the CLI against the sample catalog

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["search_queries", "levenshtein_matching", "substring_matching"];

/// Seconds each fuzz target runs for under `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("smoke") => smoke()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (docs + tests + clippy + scoring table)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {}s (needs nightly + cargo-fuzz)
  smoke     Run every CLI subcommand against data/sample_catalog.json
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("catalog-search Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant docs...");
    check_invariant_docs()?;
    println!("✓ Invariant docs present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running tests without the parallel feature...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Verifying scoring table matches constants...");
    verify_scoring_table()?;
    println!("✓ Scoring table aligned\n");

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

/// Run every fuzz target for a short, fixed time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for (i, &target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", max_time.as_str()])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

/// Exercise each CLI subcommand once against the bundled catalog
fn smoke() -> Result<()> {
    let runs: &[&[&str]] = &[
        &["inspect"],
        &["search", "milk"],
        &["correct", "orgnic"],
        &["autocomplete", "ban"],
        &["rank-stores", "organic"],
        &["deals", "--limit", "5"],
    ];

    for args in runs {
        let mut full = vec!["run", "--quiet", "--"];
        full.extend_from_slice(args);
        full.push("--json");
        run_cargo(&full)?;
    }

    println!("\n✓ CLI smoke run passed");
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

/// Modules whose invariants are load-bearing must keep documenting them.
fn check_invariant_docs() -> Result<()> {
    let root = project_root()?;
    let required = ["src/types.rs", "src/index/trie.rs", "src/snapshot.rs"];

    for path in required {
        let source = std::fs::read_to_string(root.join(path))
            .with_context(|| format!("Failed to read {}", path))?;
        if !source.to_lowercase().contains("# invariants") {
            bail!("{} lost its `# Invariants` section", path);
        }
    }

    Ok(())
}

/// The deal bonus table in the scoring docs must match the constants.
fn verify_scoring_table() -> Result<()> {
    let root = project_root()?;
    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let loyalty = extract_const(&core_rs, "LOYALTY_BONUS")?;
    let sale = extract_const(&core_rs, "SALE_BONUS")?;

    let table_loyalty = extract_table_bonus(&core_rs, "LOYALTY")?;
    let table_sale = extract_table_bonus(&core_rs, "SALE / PROMO")?;

    if loyalty != table_loyalty {
        bail!("LOYALTY_BONUS={} but the docs table says {}", loyalty, table_loyalty);
    }
    if sale != table_sale {
        bail!("SALE_BONUS={} but the docs table says {}", sale, table_sale);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Result<f64> {
    // Look for "pub const NAME: f64 = 10.0;"
    let prefix = format!("pub const {}: f64 =", name);
    for line in content.lines() {
        if let Some(rest) = line.trim().strip_prefix(&prefix) {
            let num_str = rest.trim().trim_end_matches(';').trim();
            return num_str
                .parse::<f64>()
                .with_context(|| format!("{} is not a literal: {}", name, num_str));
        }
    }
    bail!("constant {} not found", name)
}

fn extract_table_bonus(content: &str, row: &str) -> Result<f64> {
    // Look for "//! | LOYALTY         | 10.0  | ..."
    for line in content.lines() {
        let Some(table) = line.trim().strip_prefix("//!") else {
            continue;
        };
        let cells: Vec<&str> = table.split('|').map(str::trim).collect();
        if cells.get(1) == Some(&row) {
            if let Some(num_str) = cells.get(2) {
                return num_str
                    .parse::<f64>()
                    .with_context(|| format!("bonus for {} is not a number: {}", row, num_str));
            }
        }
    }
    bail!("scoring table row {} not found", row)
}
