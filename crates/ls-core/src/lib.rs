//! ls-core - Core library for Lakeshift
//!
//! This crate provides the shared configuration, error, and report types
//! used by the Lakeshift SQL lexical engine: formatting style, qualifier
//! rewrite rules, change records, and YAML config ingestion.

pub mod change;
pub mod config;
pub mod error;
pub mod rule;
pub mod style;

pub use change::{ChangeRecord, TokenRange};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use rule::{RewriteRule, TwoPartPolicy};
pub use style::{FormatStyle, KeywordCase};
