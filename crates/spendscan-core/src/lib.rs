//! Core library for receipt text processing.
//!
//! This crate provides:
//! - Field extraction from OCR'd receipt text (total, transaction date, description)
//! - Keyword-table spending classification (Food, Transport, Shopping, Bills, Others)
//! - Spending summaries over processed receipts
//!
//! Extraction and classification are pure and total: any input, however
//! noisy, yields a record with defaults filled in rather than an error.

pub mod error;
pub mod models;
pub mod receipt;
pub mod summary;

pub use error::{ConfigError, ParseCategoryError, Result, SpendscanError};
pub use models::config::SpendscanConfig;
pub use models::receipt::{round_cents, Category, ExtractedFields, ReceiptRecord};
pub use receipt::{classify, extract, ReceiptParser, RuleBasedReceiptParser};
pub use summary::{sort_newest_first, SpendingSummary};
