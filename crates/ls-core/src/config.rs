//! Engine configuration parsing
//!
//! The surrounding CLI layer owns file discovery and reading; it hands the
//! engine a configuration document as text. This module parses that text
//! into a validated [`FormatStyle`] and [`RewriteRule`] pair.

use crate::error::CoreResult;
use crate::rule::RewriteRule;
use crate::style::FormatStyle;
use serde::{Deserialize, Serialize};

/// Combined engine configuration from a `lakeshift.yml`-style document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Formatter settings
    #[serde(default)]
    pub format: FormatStyle,

    /// Qualifier rewrite settings
    #[serde(default)]
    pub rewrite: RewriteRule,
}

impl Config {
    /// Parse and validate a configuration document.
    pub fn from_yaml_str(text: &str) -> CoreResult<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate both sections.
    pub fn validate(&self) -> CoreResult<()> {
        self.format.validate()?;
        self.rewrite.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::KeywordCase;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config.format, FormatStyle::default());
        assert!(config.rewrite.is_noop());
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_yaml_str(
            r#"
format:
  keyword_case: lower
  indent_width: 2
  max_line_length: 100
rewrite:
  new_catalog: dev
  new_database: staging
"#,
        )
        .unwrap();
        assert_eq!(config.format.keyword_case, KeywordCase::Lower);
        assert_eq!(config.format.indent_width, 2);
        assert_eq!(config.format.max_line_length, 100);
        assert_eq!(config.rewrite.new_catalog.as_deref(), Some("dev"));
        assert_eq!(config.rewrite.new_database.as_deref(), Some("staging"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_yaml_str("formatting: {}\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_style_rejected() {
        let result = Config::from_yaml_str("format:\n  max_line_length: 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let result = Config::from_yaml_str("rewrite:\n  new_catalog: \"\"\n");
        assert!(result.is_err());
    }
}
