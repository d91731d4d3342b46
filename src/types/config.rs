//! Engine configuration with TOML loading.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// How a vertex's neighbours are derived from its incident edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborRule {
    /// Each incident edge contributes its stored destination, even when the
    /// asking vertex is that destination.
    #[default]
    Destination,
    /// Each incident edge contributes the endpoint that is not the asking vertex.
    Opposite,
}

impl NeighborRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Opposite => "opposite",
        }
    }

    /// Parse a rule from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "destination" | "dest" => Some(Self::Destination),
            "opposite" | "other" => Some(Self::Opposite),
            _ => None,
        }
    }
}

impl fmt::Display for NeighborRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NeighborRule {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| GraphError::InvalidConfig(format!("unknown neighbor rule: {s}")))
    }
}

/// Graph engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Neighbour derivation used by `neighbors()` and by both traversals.
    pub neighbor_rule: NeighborRule,

    /// Weight of edges inserted without an explicit one.
    pub default_weight: i64,

    /// Written after every label in traversal output.
    pub label_separator: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            neighbor_rule: NeighborRule::Destination,
            default_weight: DEFAULT_WEIGHT,
            label_separator: " ".to_string(),
        }
    }
}

impl GraphConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot honour.
    pub fn validate(&self) -> GraphResult<()> {
        if self.label_separator.is_empty() {
            return Err(GraphError::InvalidConfig(
                "label_separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
