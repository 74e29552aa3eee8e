//! Metafix CLI - Command-line tool for reconciling JSON metadata files
//!
//! This binary provides command-line interfaces for:
//! - apply: per-device keyword/value batches across discovered files
//! - set: one keyword/value pair across every matching file
//! - check: verify expected values without mutating anything

use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use metafix_engine::Action;
use metafix_io::{
    apply_rules_to_file, check_file, discover, discover_device, load_device_batches,
    load_keyword_rules, DiscoverConfig, Report,
};
use std::collections::BTreeMap;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "metafix")]
#[command(about = "Reconcile per-device JSON metadata files against expected values")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply per-device keyword/value batches
    ///
    /// Examples:
    ///   metafix apply devices.json --root ./floor
    ///   metafix apply devices.json --pattern "EM-*" --dry-run
    Apply {
        /// Device batch file (JSON object: device -> {keyword: value})
        rules: PathBuf,
        #[command(flatten)]
        discovery: DiscoveryArgs,
        /// Report what would change without writing any file
        #[arg(long)]
        dry_run: bool,
        /// Write the run report to this file instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,
        /// Show a progress spinner while processing
        #[arg(long)]
        progress: bool,
    },
    /// Apply one keyword/value pair to every matching file
    ///
    /// Examples:
    ///   metafix set system.location.floor 2 --root ./floor
    ///   metafix set units "" --pattern "EM-*"
    Set {
        /// Dotted keyword (e.g. "system.location.floor")
        key: String,
        /// New value; blank or "nan" removes the key instead
        value: String,
        #[command(flatten)]
        discovery: DiscoveryArgs,
        /// Report what would change without writing any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Verify flat rules against every matching file without mutating
    ///
    /// Examples:
    ///   metafix check keyword.json --root ./floor
    ///   metafix check keyword.json --format json
    Check {
        /// Flat rules file (JSON object: keyword -> expected value)
        rules: PathBuf,
        #[command(flatten)]
        discovery: DiscoveryArgs,
        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = CheckFormat::Table)]
        format: CheckFormat,
        /// Write the per-file report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Args)]
struct DiscoveryArgs {
    /// Root directory for searching metadata files
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Target filename to process
    #[arg(long, default_value = "metadata.json")]
    filename: String,
    /// Folder name pattern to match (e.g. "EM-*")
    #[arg(long, default_value = "*")]
    pattern: String,
}

impl DiscoveryArgs {
    fn into_config(self) -> Result<DiscoverConfig, Box<dyn Error>> {
        if !self.root.is_dir() {
            return Err(format!("Root directory not found: {}", self.root.display()).into());
        }
        Ok(DiscoverConfig {
            document_root: self.root,
            target_filename: self.filename,
            folder_pattern: self.pattern,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CheckFormat {
    Table,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            rules,
            discovery,
            dry_run,
            report,
            progress,
        } => {
            handle_apply(rules, discovery.into_config()?, dry_run, report, progress)?;
        }
        Commands::Set {
            key,
            value,
            discovery,
            dry_run,
        } => {
            handle_set(key, value, discovery.into_config()?, dry_run)?;
        }
        Commands::Check {
            rules,
            discovery,
            format,
            report,
        } => {
            handle_check(rules, discovery.into_config()?, format, report)?;
        }
    }

    Ok(())
}

fn handle_apply(
    rules: PathBuf,
    config: DiscoverConfig,
    dry_run: bool,
    report_path: Option<PathBuf>,
    show_progress: bool,
) -> Result<(), Box<dyn Error>> {
    let batches = load_device_batches(&rules)?;
    let mut report = Report::new();
    let mut progress_bar = show_progress.then(|| create_spinner("Applying device batches"));

    let mut files_seen = 0usize;
    let mut files_written = 0usize;
    let mut failures = 0usize;

    for batch in &batches {
        let files = discover_device(&config, &batch.device)?;
        if files.is_empty() {
            report.line(format!(
                "No {} found for device {}",
                config.target_filename, batch.device
            ));
            continue;
        }
        for file in files {
            if let Some(pb) = progress_bar.as_ref() {
                pb.inc(1);
            }
            files_seen += 1;
            // one bad file must not abort the rest of the batch
            match apply_rules_to_file(&file, &batch.pairs, dry_run) {
                Ok(outcome) => {
                    report.file_header(&outcome.file);
                    for record in &outcome.corrections {
                        report.correction(record);
                    }
                    if outcome.written {
                        files_written += 1;
                        report.line(format!("  Saved changes to {}", outcome.file.display()));
                    } else if outcome.changed {
                        report.line("  Dry run: changes not written".to_string());
                    }
                }
                Err(err) => {
                    failures += 1;
                    report.line(format!("Error processing {}: {}", file.display(), err));
                }
            }
        }
    }

    if let Some(pb) = progress_bar.take() {
        pb.finish_with_message(format!(
            "Processed {} files ({} written, {} failed)",
            files_seen, files_written, failures
        ));
    }

    emit_report(&report, report_path.as_deref())?;
    println!(
        "{} files examined, {} written, {} failed",
        files_seen, files_written, failures
    );
    Ok(())
}

fn handle_set(
    key: String,
    value: String,
    config: DiscoverConfig,
    dry_run: bool,
) -> Result<(), Box<dyn Error>> {
    let pairs = [(key, value)];
    let files = discover(&config)?;
    if files.is_empty() {
        println!(
            "No folders matching pattern '{}' with {} found in {}",
            config.folder_pattern,
            config.target_filename,
            config.document_root.display()
        );
        return Ok(());
    }

    let mut report = Report::new();
    for file in &files {
        match apply_rules_to_file(file, &pairs, dry_run) {
            Ok(outcome) => {
                report.file_header(&outcome.file);
                for record in &outcome.corrections {
                    report.correction(record);
                }
                if outcome.written {
                    report.line(format!("  Saved changes to {}", outcome.file.display()));
                }
            }
            Err(err) => {
                report.line(format!("Error processing {}: {}", file.display(), err));
            }
        }
    }
    emit_report(&report, None)?;
    Ok(())
}

#[derive(Default)]
struct CheckCounts {
    pass: usize,
    fail: usize,
    skipped: usize,
}

fn handle_check(
    rules: PathBuf,
    config: DiscoverConfig,
    format: CheckFormat,
    report_path: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let pairs = load_keyword_rules(&rules)?;
    let files = discover(&config)?;

    let mut counts: BTreeMap<String, CheckCounts> = BTreeMap::new();
    let mut report = Report::new();
    let mut files_checked = 0usize;

    for file in &files {
        match check_file(file, &pairs) {
            Ok(outcome) => {
                files_checked += 1;
                report.file_header(&outcome.file);
                for record in &outcome.corrections {
                    report.correction(record);
                    let entry = counts.entry(record.keyword.clone()).or_default();
                    match record.action {
                        Action::Unchanged => entry.pass += 1,
                        Action::Skipped => entry.skipped += 1,
                        _ => entry.fail += 1,
                    }
                }
            }
            Err(err) => {
                report.line(format!("Error processing {}: {}", file.display(), err));
            }
        }
    }

    if let Some(path) = report_path.as_deref() {
        report.save(path)?;
        println!("Report saved to: {}", path.display());
    }

    let expected: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    match format {
        CheckFormat::Table => {
            println!("{} files checked", files_checked);
            println!("{:<32} {:>6} {:>6} {:>8}", "KEYWORD", "PASS", "FAIL", "SKIPPED");
            for (keyword, entry) in &counts {
                println!(
                    "{:<32} {:>6} {:>6} {:>8}",
                    keyword, entry.pass, entry.fail, entry.skipped
                );
            }
        }
        CheckFormat::Json => {
            let results: Vec<serde_json::Value> = counts
                .iter()
                .map(|(keyword, entry)| {
                    serde_json::json!({
                        "keyword": keyword,
                        "expected": expected.get(keyword.as_str()),
                        "pass": entry.pass,
                        "fail": entry.fail,
                        "skipped": entry.skipped,
                    })
                })
                .collect();
            let summary = serde_json::json!({
                "files_checked": files_checked,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn emit_report(report: &Report, path: Option<&std::path::Path>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            report.save(path)?;
            println!("Report saved to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            report.write_to(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
