//! Formatting style configuration

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Casing applied to SQL keywords by the formatter.
///
/// String literals, quoted identifiers, and comment contents are never
/// re-cased regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// Uppercase keywords (`SELECT`, `FROM`)
    #[default]
    Upper,
    /// Lowercase keywords (`select`, `from`)
    Lower,
    /// Leave keywords exactly as written
    Preserve,
}

/// Formatter configuration.
///
/// Passed explicitly into every call; the engine reads no process-wide
/// defaults beyond the documented `Default` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatStyle {
    /// Keyword casing policy
    #[serde(default)]
    pub keyword_case: KeywordCase,

    /// Indentation for wrapped continuation lines, in spaces
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Advisory line-length limit used to decide when to wrap SELECT lists
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

fn default_indent_width() -> usize {
    4
}

fn default_max_line_length() -> usize {
    88
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self {
            keyword_case: KeywordCase::default(),
            indent_width: default_indent_width(),
            max_line_length: default_max_line_length(),
        }
    }
}

impl FormatStyle {
    /// Validate the style, rejecting values the formatter cannot honor.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_line_length == 0 {
            return Err(CoreError::InvalidMaxLineLength);
        }
        Ok(())
    }
}
