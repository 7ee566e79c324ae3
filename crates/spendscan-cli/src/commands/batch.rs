//! Batch processing command for multiple receipt text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use spendscan_core::{
    round_cents, sort_newest_first, ReceiptParser, ReceiptRecord, RuleBasedReceiptParser,
    SpendingSummary,
};

use super::{format_records, load_config, read_receipt_text, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching receipt text files (e.g. "scans/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output file for the export (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also print totals by category and month
    #[arg(long)]
    summary: bool,

    /// Date to assume for receipts without a readable date (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files",
            )?
            .progress_chars("=>-"),
    );

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let parser = RuleBasedReceiptParser::from_config(&config.extraction);
    let mut records: Vec<ReceiptRecord> = Vec::with_capacity(files.len());
    let mut failures = 0usize;

    for path in &files {
        match read_receipt_text(path).await {
            Ok(text) => {
                let record = parser.parse_at(&text, today);
                debug!("{}: {}", path.display(), record.summary_line());
                records.push(record);
            }
            Err(e) => {
                failures += 1;
                if args.continue_on_error {
                    warn!("Skipping {}: {}", path.display(), e);
                } else {
                    pb.abandon();
                    error!("Failed to read {}", path.display());
                    return Err(e);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if config.output.newest_first {
        sort_newest_first(&mut records);
    }

    let output = format_records(&records, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Wrote {} records to {}",
            style("✓").green(),
            records.len(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    if args.summary {
        eprint!("{}", format_summary(&SpendingSummary::from_records(&records)));
    }

    if failures > 0 {
        eprintln!("{} {} files failed", style("✗").red(), failures);
    }

    debug!("Batch processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_summary(summary: &SpendingSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total: ${:.2} across {} receipts\n",
        round_cents(summary.total),
        summary.count
    ));

    output.push_str("By category:\n");
    for (category, amount) in &summary.by_category {
        output.push_str(&format!(
            "  {:<10} ${:.2}\n",
            category.as_str(),
            round_cents(*amount)
        ));
    }

    output.push_str("By month:\n");
    for (month, amount) in &summary.by_month {
        output.push_str(&format!("  {:<10} ${:.2}\n", month, round_cents(*amount)));
    }

    output
}
