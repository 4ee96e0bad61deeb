//! Heuristic configuration, loadable from JSON.
use crate::task::TaskError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which estimate the evaluator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// 0 if the goal is relaxed-reachable, dead end otherwise.
    Reachability,
    /// h^add
    Additive,
    /// h^max
    Max,
    /// h^FF
    #[default]
    Ff,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub kind: HeuristicKind,
    /// Emit a debug event for every state recognized as a dead end.
    pub log_dead_ends: bool,
}

impl HeuristicConfig {
    pub fn new(kind: HeuristicKind) -> Self {
        Self { kind, ..Default::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, TaskError> {
        let config: HeuristicConfig = serde_json::from_str(json)?;
        debug!(kind = ?config.kind, log_dead_ends = config.log_dead_ends, "loaded heuristic config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("{}", HeuristicKind::Ff)]
    #[case(r#"{"kind": "additive"}"#, HeuristicKind::Additive)]
    #[case(r#"{"kind": "max"}"#, HeuristicKind::Max)]
    #[case(r#"{"kind": "reachability", "log_dead_ends": true}"#, HeuristicKind::Reachability)]
    fn test_parse_kind(#[case] json: &str, #[case] expected: HeuristicKind) {
        assert_eq!(HeuristicConfig::from_json_str(json).unwrap().kind, expected);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(HeuristicConfig::from_json_str(r#"{"kind": "lmcut"}"#).is_err());
    }
}
