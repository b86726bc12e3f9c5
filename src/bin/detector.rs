//! Breaking Change Detector CLI
//!
//! Compares old and new schema snapshots and reports breaking changes.
//!
//! Usage:
//!   breaking-change-detector compare --old old/instance.json --new new/instance.json --resource compute_instance
//!   breaking-change-detector providers --old old/ --new new/ --version v5
//!   breaking-change-detector rules
//!   breaking-change-detector docs --output breaking-changes.md

use std::path::PathBuf;

use anyhow::Context;
use breaking_change_detector::{
    loader, render_rule_catalog, resource_inventory_rules, resource_schema_rules, Detector,
    DetectorConfig, OutputFormat, Report, Rule, RuleRegistry,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "breaking-change-detector")]
#[command(about = "Detect breaking changes between provider schema versions")]
struct Cli {
    /// Config file (defaults to breaking-changes.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two snapshots of a single resource
    Compare {
        /// Old snapshot (JSON)
        #[arg(long)]
        old: PathBuf,
        /// New snapshot (JSON)
        #[arg(long)]
        new: PathBuf,
        /// Resource name used in messages
        #[arg(short, long, default_value = "resource")]
        resource: String,
        /// Version used in documentation links
        #[arg(short = 'v', long)]
        version: Option<String>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Compare two provider versions (file or directory of resources)
    Providers {
        #[arg(long)]
        old: PathBuf,
        #[arg(long)]
        new: PathBuf,
        #[arg(short = 'v', long)]
        version: Option<String>,
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// List known rules
    Rules {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },

    /// Generate the rule catalog as Markdown
    Docs {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short = 'v', long)]
        version: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Category {
    Schema,
    Inventory,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

/// Returns false when the run should exit with a failure status
fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = DetectorConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    let detector = Detector::new().with_docs_base_url(config.docs.base_url.clone());
    let schema_rules = resource_schema_rules()?;
    let inventory_rules = resource_inventory_rules()?;

    match cli.command {
        Commands::Compare { old, new, resource, version, format } => {
            let old_snapshot = loader::load_snapshot(&old)
                .with_context(|| format!("loading {}", old.display()))?;
            let new_snapshot = loader::load_snapshot(&new)
                .with_context(|| format!("loading {}", new.display()))?;
            let version = version.unwrap_or_else(|| config.docs.version.clone());

            let violations = detector.detect(&schema_rules, &resource, &version, &old_snapshot, &new_snapshot);
            let report = Report::new(version, violations);
            print_report(&report, resolve_format(format, &config))?;
            Ok(report.is_clean() || !config.report.fail_on_violation)
        }

        Commands::Providers { old, new, version, format } => {
            let old_provider = loader::load_provider(&old)
                .with_context(|| format!("loading {}", old.display()))?;
            let new_provider = loader::load_provider(&new)
                .with_context(|| format!("loading {}", new.display()))?;
            let version = version.unwrap_or_else(|| config.docs.version.clone());

            let report = detector.compare_providers(
                &inventory_rules,
                &schema_rules,
                &version,
                &old_provider,
                &new_provider,
            );
            print_report(&report, resolve_format(format, &config))?;
            Ok(report.is_clean() || !config.report.fail_on_violation)
        }

        Commands::Rules { category } => {
            if category != Some(Category::Inventory) {
                print_rules(&schema_rules);
            }
            if category != Some(Category::Schema) {
                print_rules(&inventory_rules);
            }
            Ok(true)
        }

        Commands::Docs { output, version } => {
            let version = version.unwrap_or_else(|| config.docs.version.clone());
            let doc = render_rule_catalog(&schema_rules, &inventory_rules, detector.docs_base_url(), &version);
            if let Some(path) = output {
                std::fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;
                println!("✅ Rule catalog written to {:?}", path);
            } else {
                print!("{}", doc);
            }
            Ok(true)
        }
    }
}

fn resolve_format(format: Option<Format>, config: &DetectorConfig) -> OutputFormat {
    match format {
        Some(Format::Text) => OutputFormat::Text,
        Some(Format::Json) => OutputFormat::Json,
        None => config.report.format,
    }
}

fn print_report(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if report.is_clean() {
                println!("✅ No breaking changes detected");
            } else {
                println!("❌ {} breaking change(s) detected:", report.len());
                for message in report.messages() {
                    println!("  └─ {}", message);
                }
            }
        }
    }
    Ok(())
}

fn print_rules<R: Rule>(registry: &RuleRegistry<R>) {
    println!("{}:", registry.category());
    for rule in registry {
        let detection = if rule.undetectable() { "manual" } else { "automated" };
        println!("  {:<45} {:<10} {}", rule.identifier(), detection, rule.name());
    }
}
