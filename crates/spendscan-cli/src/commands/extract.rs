//! Extract command - turn one receipt's text into a spending record.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use spendscan_core::receipt::matching_keyword;
use spendscan_core::{ReceiptParser, RuleBasedReceiptParser};

use super::{format_record, load_config, read_receipt_text, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Receipt text file produced by OCR ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Date to assume when the receipt has no readable date (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Show which keyword decided the category
    #[arg(long)]
    explain: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing receipt text: {}", args.input.display());
    let text = read_receipt_text(&args.input).await?;

    if text.trim().is_empty() {
        warn!("Receipt text is empty, record will contain defaults only");
    }

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let parser = RuleBasedReceiptParser::from_config(&config.extraction);
    let record = parser.parse_at(&text, today);

    let format = OutputFormat::resolve(args.format, &config);
    let output = format_record(&record, format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    if args.explain {
        match matching_keyword(&text) {
            Some((category, keyword)) => eprintln!(
                "{} Category {} matched keyword {:?}",
                style("ℹ").blue(),
                category,
                keyword
            ),
            None => eprintln!(
                "{} No keyword matched, category {}",
                style("ℹ").blue(),
                record.category
            ),
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
