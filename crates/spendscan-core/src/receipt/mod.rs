//! Receipt field extraction and spending classification.

pub mod classifier;
mod parser;
pub mod rules;

pub use classifier::{matching_keyword, KEYWORD_TABLES};
pub use parser::{classify, extract, ReceiptParser, RuleBasedReceiptParser};
