//! Qualifier rewrite rules

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Interpretation of two-segment qualified names (`x.table`).
///
/// Without catalog metadata a two-part name is ambiguous between
/// `database.table` and `catalog.table`. The policy is explicit
/// configuration so callers decide instead of the engine guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoPartPolicy {
    /// Segment 1 is the database: only `new_database` applies
    #[default]
    Database,
    /// Segment 1 is the catalog: only `new_catalog` applies
    Catalog,
}

/// A catalog/schema substitution applied to every qualified table
/// reference found after a `FROM`/`JOIN`/`UPDATE`/`INTO` keyword.
///
/// Unset fields leave the corresponding segment untouched; the table
/// segment is never rewritten. Bare (single-segment) names are never
/// rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewriteRule {
    /// Replacement for the catalog segment of three-part names
    #[serde(default)]
    pub new_catalog: Option<String>,

    /// Replacement for the database/schema segment
    #[serde(default)]
    pub new_database: Option<String>,

    /// How two-segment names are interpreted
    #[serde(default)]
    pub two_part_policy: TwoPartPolicy,
}

impl RewriteRule {
    /// Validate the rule, rejecting empty replacement segments.
    ///
    /// An empty segment would splice `..` into rewritten SQL, so it is a
    /// configuration error rather than a silent no-op.
    pub fn validate(&self) -> CoreResult<()> {
        if matches!(self.new_catalog.as_deref(), Some("")) {
            return Err(CoreError::EmptyReplacementName {
                field: "new_catalog",
            });
        }
        if matches!(self.new_database.as_deref(), Some("")) {
            return Err(CoreError::EmptyReplacementName {
                field: "new_database",
            });
        }
        Ok(())
    }

    /// True when the rule can never change any name.
    pub fn is_noop(&self) -> bool {
        self.new_catalog.is_none() && self.new_database.is_none()
    }
}
