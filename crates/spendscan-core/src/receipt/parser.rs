//! Rule-based receipt parser combining field extraction and classification.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::receipt::{Category, ExtractedFields, ReceiptRecord};

use super::classifier;
use super::rules::{derive_description, extract_total, select_transaction_date, DateOrder};

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse receipt text, using `today` wherever no date can be read.
    fn parse_at(&self, text: &str, today: NaiveDate) -> ReceiptRecord;

    /// Parse receipt text against the local wall-clock date.
    fn parse(&self, text: &str) -> ReceiptRecord {
        self.parse_at(text, Local::now().date_naive())
    }
}

/// Keyword and pattern based receipt parser.
#[derive(Debug, Clone)]
pub struct RuleBasedReceiptParser {
    /// Maximum number of words kept in the description.
    max_description_words: usize,
    /// Description used when the text has no words.
    fallback_description: String,
    /// Preferences for ambiguous dates.
    date_order: DateOrder,
}

impl RuleBasedReceiptParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_description_words: config.max_description_words,
            fallback_description: config.fallback_description.clone(),
            date_order: DateOrder {
                day_first: config.day_first,
                year_first: config.year_first,
            },
        }
    }

    /// Set the description word limit.
    pub fn with_max_description_words(mut self, words: usize) -> Self {
        self.max_description_words = words;
        self
    }

    /// Set the placeholder description.
    pub fn with_fallback_description(mut self, description: impl Into<String>) -> Self {
        self.fallback_description = description.into();
        self
    }

    /// Prefer day-first reading of ambiguous dates.
    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.date_order.day_first = day_first;
        self
    }

    /// Prefer year-first reading of ambiguous dates.
    pub fn with_year_first(mut self, year_first: bool) -> Self {
        self.date_order.year_first = year_first;
        self
    }

    /// Run the field extractor only.
    pub fn extract_fields(&self, text: &str, today: NaiveDate) -> ExtractedFields {
        let fields = ExtractedFields {
            amount: extract_total(text),
            transaction_date: select_transaction_date(text, today, self.date_order),
            description: derive_description(
                text,
                self.max_description_words,
                &self.fallback_description,
            ),
        };

        debug!(
            "Extracted amount {} dated {} ({:?})",
            fields.amount, fields.transaction_date, fields.description
        );

        fields
    }
}

impl Default for RuleBasedReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for RuleBasedReceiptParser {
    fn parse_at(&self, text: &str, today: NaiveDate) -> ReceiptRecord {
        info!("Parsing receipt from {} characters of text", text.len());

        let fields = self.extract_fields(text, today);
        let category = classifier::classify(text);

        let record = ReceiptRecord::from_parts(fields, category);
        debug!("{}", record.summary_line());
        record
    }
}

/// Extract amount, transaction date and description with default settings.
///
/// Total over all inputs: missing data becomes zero, `today` and the
/// placeholder description.
pub fn extract(text: &str, today: NaiveDate) -> ExtractedFields {
    RuleBasedReceiptParser::new().extract_fields(text, today)
}

/// Classify receipt text into a spending category.
pub fn classify(text: &str) -> Category {
    classifier::classify(text)
}
