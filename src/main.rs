//! Arsenal CLI - catalog compiler for curated resource lists
//!
//! Usage: arsenal <COMMAND>
//!
//! Commands:
//!   validate  Check the data files against schema and vocabulary
//!   generate  Render the Markdown document from validated data
//!   diff      Preview document changes without writing

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use arsenal::config::Config;
use arsenal::error::ArsenalError;
use arsenal::output;
use arsenal::validate::ValidationReport;

/// Arsenal - catalog compiler for curated resource lists
#[derive(Parser, Debug)]
#[command(name = "arsenal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the data files against schema and vocabulary
    Validate {
        /// Path to the resources file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to the vocabulary file (overrides config)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Render the Markdown document from validated data
    Generate {
        /// Path to the resources file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to the vocabulary file (overrides config)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verify the document is current without writing (CI mode)
        #[arg(long)]
        check: bool,
    },

    /// Preview document changes without writing
    Diff {
        /// Path to the resources file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to the vocabulary file (overrides config)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Output file to compare against (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            data,
            vocabulary,
            strict_warnings,
        } => cmd_validate(data, vocabulary, strict_warnings, cli.json, cli.verbose),
        Commands::Generate {
            data,
            vocabulary,
            output,
            check,
        } => cmd_generate(data, vocabulary, output, check, cli.json),
        Commands::Diff {
            data,
            vocabulary,
            output,
        } => cmd_diff(data, vocabulary, output, cli.json),
    }
}

/// Load config, apply CLI path overrides, and surface config warnings.
fn load_config(
    data: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    output: Option<PathBuf>,
    json: bool,
) -> Config {
    let (mut config, warnings) = Config::load_or_default(Path::new("."));
    if !json {
        output::print_config_warnings(&warnings);
    }

    if let Some(path) = data {
        config.paths.resources = path;
    }
    if let Some(path) = vocabulary {
        config.paths.vocabulary = path;
    }
    if let Some(path) = output {
        config.paths.output = path;
    }
    config
}

fn load_and_validate(config: &Config) -> Result<(arsenal::Catalog, arsenal::Vocabulary, ValidationReport)> {
    let (catalog, unknown) = arsenal::load_catalog(&config.paths.resources)?;
    let vocabulary = arsenal::load_vocabulary(&config.paths.vocabulary)?;
    let report = arsenal::validate_catalog(&catalog, &vocabulary, &unknown);
    Ok((catalog, vocabulary, report))
}

fn cmd_validate(
    data: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    strict_warnings: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = load_config(data, vocabulary, None, json);
    let strict = strict_warnings || config.validation.strict_warnings;

    let (catalog, _vocabulary, report) = load_and_validate(&config)?;

    if json {
        println!("{}", validation_event(&report, &catalog));
    } else {
        if verbose > 0 {
            println!(
                "🔍 Validating {} entries from {}",
                catalog.resources.len(),
                config.paths.resources.display()
            );
        }
        output::print_report(&report);
    }

    if !report.is_valid() || (strict && report.warnings() > 0) {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_generate(
    data: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    out: Option<PathBuf>,
    check: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(data, vocabulary, out, json);
    let (catalog, vocabulary, report) = load_and_validate(&config)?;

    let document = match arsenal::render_document(&catalog, &vocabulary, &config, &report) {
        Ok(document) => document,
        Err(err @ ArsenalError::Precondition { .. }) => {
            if json {
                println!("{}", validation_event(&report, &catalog));
            } else {
                output::print_report(&report);
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let output_path = &config.paths.output;

    if check {
        let document_hash = arsenal::fs::hash_content(document.as_bytes());
        // A missing or unreadable document counts as stale.
        let up_to_date =
            arsenal::fs::verify_hash(output_path, &document_hash).unwrap_or(false);
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "check",
                    "output": output_path,
                    "up_to_date": up_to_date,
                    "hash": document_hash,
                })
            );
        } else if up_to_date {
            println!("✓ {} is up to date", output_path.display());
        } else {
            println!(
                "✗ {} is stale, run `arsenal generate` to refresh",
                output_path.display()
            );
        }
        if !up_to_date {
            std::process::exit(1);
        }
        return Ok(());
    }

    arsenal::fs::atomic_write(output_path, document.as_bytes())?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "generated",
                "output": output_path,
                "entries": catalog.resources.len(),
                "hash": arsenal::fs::hash_content(document.as_bytes()),
                "warnings": report.warnings(),
            })
        );
    } else {
        println!(
            "✓ Wrote {} ({} entries, {} warning(s))",
            output_path.display(),
            catalog.resources.len(),
            report.warnings()
        );
    }
    Ok(())
}

fn cmd_diff(
    data: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = load_config(data, vocabulary, out, json);
    let (catalog, vocabulary, report) = load_and_validate(&config)?;

    let document = match arsenal::render_document(&catalog, &vocabulary, &config, &report) {
        Ok(document) => document,
        Err(err @ ArsenalError::Precondition { .. }) => {
            if json {
                println!("{}", validation_event(&report, &catalog));
            } else {
                output::print_report(&report);
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let output_path = &config.paths.output;
    let current = std::fs::read_to_string(output_path).unwrap_or_default();

    if current == document {
        if json {
            println!(
                "{}",
                serde_json::json!({ "event": "diff", "changed": false })
            );
        } else {
            println!("No changes.");
        }
        return Ok(());
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "diff",
                "changed": true,
                "output": output_path,
            })
        );
    } else {
        let path = output_path.display().to_string();
        print!(
            "{}",
            output::format_diff(&path, &current, &document, output::supports_color())
        );
    }
    Ok(())
}

fn validation_event(report: &ValidationReport, catalog: &arsenal::Catalog) -> serde_json::Value {
    serde_json::json!({
        "event": "validated",
        "entries": catalog.resources.len(),
        "fatals": report.fatals(),
        "warnings": report.warnings(),
        "valid": report.is_valid(),
        "violations": report.violations.iter().map(|v| {
            serde_json::json!({
                "entry": v.entry_id,
                "field": v.field,
                "kind": v.kind.to_string(),
                "severity": v.severity.to_string(),
                "message": v.message,
            })
        }).collect::<Vec<_>>(),
    })
}
