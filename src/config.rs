//! Global configuration for fixture generation.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TbgenError};

/// Structural knobs for one forest kind (roles or concepts).
///
/// The knobs are independent; `size` is not checked against what
/// `branching_factor` and `max_depth` can actually hold. A size the tree
/// shape cannot absorb simply produces more unattached roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeParams {
    /// Total number of nodes to place across all trees of this kind.
    pub size: usize,
    /// Maximum number of children any single node may have.
    pub branching_factor: usize,
    /// Maximum depth a parent may sit at while still accepting children.
    pub max_depth: u32,
    /// Number of independently built trees of this kind.
    pub number_of_trees: usize,
    /// Probability that a fresh node attempts to find a parent.
    pub edge_probability: f64,
    /// Probability of adding a cross-tree edge per ordered tree pair.
    pub joining_probability: f64,
}

/// Knobs for concept forests: the shared tree parameters plus the
/// decoration probabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptParams {
    /// Shared structural parameters.
    #[serde(flatten)]
    pub tree: TreeParams,
    /// Probability of replacing a concept name with `EXISTS <role>`.
    pub exists_probability: f64,
    /// Probability of prefixing a concept name with `NOT `.
    pub conflict_probability: f64,
}

/// Configuration for a full fixture-generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TbgenConfig {
    /// Number of symbols to draw when generating a corpus.
    pub symbol_count: usize,
    /// Minimum generated symbol-name length.
    pub name_len_min: usize,
    /// Maximum generated symbol-name length.
    pub name_len_max: usize,
    /// Bound on parent-candidate samples before a node is left unattached.
    pub attach_retry_cap: usize,
    /// Collapse vertices that decorate to the same display name. Turning
    /// this off keeps one vertex per node instance for strict count
    /// fidelity, at the cost of duplicate names in the output.
    pub dedup_vertices: bool,
    /// Seed for the random source; a fixed seed reproduces a fixture
    /// exactly. Generated from entropy when absent.
    pub seed: Option<u64>,
    /// Role-forest parameters.
    pub role: TreeParams,
    /// Concept-forest parameters.
    pub concept: ConceptParams,
}

impl Default for TbgenConfig {
    fn default() -> Self {
        Self {
            symbol_count: 100,
            name_len_min: 5,
            name_len_max: 100,
            attach_retry_cap: 64,
            dedup_vertices: true,
            seed: None,
            role: TreeParams {
                size: 2,
                branching_factor: 2,
                max_depth: 3,
                number_of_trees: 2,
                edge_probability: 0.5,
                joining_probability: 0.4,
            },
            concept: ConceptParams {
                tree: TreeParams {
                    size: 8,
                    branching_factor: 3,
                    max_depth: 4,
                    number_of_trees: 4,
                    edge_probability: 0.5,
                    joining_probability: 0.4,
                },
                exists_probability: 0.2,
                conflict_probability: 0.3,
            },
        }
    }
}

impl TbgenConfig {
    /// Check that every probability lies in `[0, 1]` and the name-length
    /// range is well-formed. Structural knobs are deliberately not
    /// cross-validated against each other.
    pub fn validate(&self) -> Result<()> {
        check_probability("role.edge_probability", self.role.edge_probability)?;
        check_probability("role.joining_probability", self.role.joining_probability)?;
        check_probability("concept.edge_probability", self.concept.tree.edge_probability)?;
        check_probability(
            "concept.joining_probability",
            self.concept.tree.joining_probability,
        )?;
        check_probability("concept.exists_probability", self.concept.exists_probability)?;
        check_probability(
            "concept.conflict_probability",
            self.concept.conflict_probability,
        )?;

        if self.name_len_min == 0 || self.name_len_min > self.name_len_max {
            return Err(TbgenError::Config(format!(
                "invalid name length range {}..={}",
                self.name_len_min, self.name_len_max
            )));
        }

        Ok(())
    }
}

fn check_probability(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TbgenError::Config(format!(
            "{} must lie in [0, 1], got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TbgenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let mut config = TbgenConfig::default();
        config.concept.conflict_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_name_range() {
        let mut config = TbgenConfig::default();
        config.name_len_min = 10;
        config.name_len_max = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = TbgenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: TbgenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role.size, config.role.size);
        assert_eq!(back.concept.exists_probability, config.concept.exists_probability);
    }
}
