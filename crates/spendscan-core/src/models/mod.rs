//! Data models and configuration.

pub mod config;
pub mod receipt;

pub use config::{ExtractionConfig, OutputConfig, SpendscanConfig};
pub use receipt::{round_cents, Category, ExtractedFields, ReceiptRecord};
