//! CLI subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{debug, warn};

use spendscan_core::models::config::SpendscanConfig;
use spendscan_core::ReceiptRecord;

/// Output format for records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// Explicit flag if given, else the configured default, else JSON.
    pub fn resolve(flag: Option<OutputFormat>, config: &SpendscanConfig) -> Self {
        flag.unwrap_or_else(|| {
            <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true)
                .unwrap_or_else(|_| {
                    warn!(
                        "Unknown default format {:?} in config, using json",
                        config.output.default_format
                    );
                    OutputFormat::Json
                })
        })
    }
}

/// Per-user configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendscan")
        .join("config.json")
}

/// Load the config named on the command line, or the per-user file, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SpendscanConfig> {
    if let Some(path) = config_path {
        return Ok(SpendscanConfig::from_file(Path::new(path))?);
    }

    let user_path = default_config_path();
    if user_path.exists() {
        debug!("Loading config from {}", user_path.display());
        Ok(SpendscanConfig::from_file(&user_path)?)
    } else {
        Ok(SpendscanConfig::default())
    }
}

/// Read receipt text from a file, or stdin for `-`. Invalid UTF-8 is replaced.
pub async fn read_receipt_text(input: &Path) -> anyhow::Result<String> {
    let bytes = if input == Path::new("-") {
        use tokio::io::AsyncReadExt;

        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
        tokio::fs::read(input).await?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render one record; JSON output is a single object.
pub fn format_record(record: &ReceiptRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        _ => format_records(std::slice::from_ref(record), format),
    }
}

/// Render records in the requested format; JSON output is an array.
pub fn format_records(records: &[ReceiptRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(records)?),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

/// CSV export with a `Date,Amount,Category,Description` header.
pub fn format_csv(records: &[ReceiptRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["Date", "Amount", "Category", "Description"])?;

    for record in records {
        wtr.write_record([
            record.transaction_date.format("%Y-%m-%d").to_string(),
            record.amount.to_string(),
            record.category.to_string(),
            record.description.clone(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[ReceiptRecord]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&format!("Receipt processed: {}\n", record.summary_line()));
        output.push_str(&format!("  Date:        {}\n", record.transaction_date));
        output.push_str(&format!("  Description: {}\n", record.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use spendscan_core::Category;

    fn sample() -> ReceiptRecord {
        ReceiptRecord {
            transaction_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            amount: Decimal::new(1120, 2),
            category: Category::Food,
            description: "Lunch, with \"friends\"".to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let csv = format_csv(&[sample()]).unwrap();
        assert_eq!(
            csv,
            concat!(
                "Date,Amount,Category,Description\n",
                "2024-03-15,11.20,Food,\"Lunch, with \"\"friends\"\"\"\n",
            )
        );
    }

    #[test]
    fn test_json_shapes() {
        let json = format_record(&sample(), OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));

        let json = format_records(&[sample()], OutputFormat::Json).unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_text_output() {
        let text = format_records(&[sample()], OutputFormat::Text).unwrap();
        assert!(text.contains("Amount: $11.20, Category: Food"));
        assert!(text.contains("Date:        2024-03-15"));
    }

    #[test]
    fn test_resolve_format() {
        let mut config = SpendscanConfig::default();
        assert_eq!(OutputFormat::resolve(None, &config), OutputFormat::Json);
        assert_eq!(OutputFormat::resolve(Some(OutputFormat::Csv), &config), OutputFormat::Csv);

        config.output.default_format = "TEXT".to_string();
        assert_eq!(OutputFormat::resolve(None, &config), OutputFormat::Text);

        config.output.default_format = "yaml".to_string();
        assert_eq!(OutputFormat::resolve(None, &config), OutputFormat::Json);
    }
}
