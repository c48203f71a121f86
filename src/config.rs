//! Configuration for the engine and for batch runs.
//!
//! `EngineConfig` carries the numeric policies the index engine needs.
//! `RunConfig` describes one batch run (input paths, thread count) and can
//! be loaded from a JSON file, with environment variables as fallbacks.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ============================================================================
// Entropy policy
// ============================================================================

/// How `entropy` treats a topic weight of exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyPolicy {
    /// 0·ln(0) = 0 by the usual limit convention.
    #[default]
    ZeroConvention,
    /// A zero weight is an `InvalidDistribution`.
    Reject,
}

impl FromStr for EntropyPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zero_convention" | "zero" => Ok(Self::ZeroConvention),
            "reject" => Ok(Self::Reject),
            other => Err(Error::Config(format!("unknown entropy policy '{other}'"))),
        }
    }
}

// ============================================================================
// Engine configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub entropy_policy: EntropyPolicy,
}

// ============================================================================
// Run configuration
// ============================================================================

/// Environment variable naming the edge-list file.
pub const ENV_GRAPH: &str = "NSTD_GRAPH";
/// Environment variable naming the topic JSON file.
pub const ENV_TOPICS: &str = "NSTD_TOPICS";
/// Environment variable setting the worker thread count.
pub const ENV_THREADS: &str = "NSTD_THREADS";

/// One batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Edge list, one `follower,followee` per line.
    pub graph_path: Option<PathBuf>,
    /// JSON object `{user_id: [topic weights]}`.
    pub topics_path: Option<PathBuf>,
    /// Pairs to evaluate, one `user_i,user_j` per line.
    pub pairs_path: Option<PathBuf>,
    pub engine: EngineConfig,
    /// Worker threads for batch evaluation. `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded run config");
        Ok(config)
    }

    /// Fill unset fields from `NSTD_GRAPH`, `NSTD_TOPICS` and `NSTD_THREADS`.
    pub fn with_env_fallbacks(mut self) -> Result<Self> {
        if self.graph_path.is_none() {
            self.graph_path = std::env::var_os(ENV_GRAPH).map(PathBuf::from);
        }
        if self.topics_path.is_none() {
            self.topics_path = std::env::var_os(ENV_TOPICS).map(PathBuf::from);
        }
        if self.threads.is_none() {
            if let Ok(raw) = std::env::var(ENV_THREADS) {
                let n = raw
                    .parse::<usize>()
                    .map_err(|_| Error::Config(format!("{ENV_THREADS}={raw} is not a thread count")))?;
                self.threads = Some(n);
            }
        }
        Ok(self)
    }

    pub fn graph_path(&self) -> Result<&Path> {
        self.graph_path
            .as_deref()
            .ok_or_else(|| Error::Config(format!("no graph path (set --graph or {ENV_GRAPH})")))
    }

    pub fn topics_path(&self) -> Result<&Path> {
        self.topics_path
            .as_deref()
            .ok_or_else(|| Error::Config(format!("no topics path (set --topics or {ENV_TOPICS})")))
    }

    pub fn pairs_path(&self) -> Result<&Path> {
        self.pairs_path
            .as_deref()
            .ok_or_else(|| Error::Config("no pairs path (set --pairs)".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_zero_convention() {
        assert_eq!(EngineConfig::default().entropy_policy, EntropyPolicy::ZeroConvention);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("reject".parse::<EntropyPolicy>().unwrap(), EntropyPolicy::Reject);
        assert_eq!("zero".parse::<EntropyPolicy>().unwrap(), EntropyPolicy::ZeroConvention);
        assert!("strict".parse::<EntropyPolicy>().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"graph_path": "edges.csv", "engine": {"entropy_policy": "reject"}}"#)
                .unwrap();
        assert_eq!(config.graph_path.as_deref(), Some(Path::new("edges.csv")));
        assert_eq!(config.topics_path, None);
        assert_eq!(config.engine.entropy_policy, EntropyPolicy::Reject);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_missing_pairs_path_is_config_error() {
        let config = RunConfig::default();
        assert!(matches!(config.pairs_path(), Err(Error::Config(_))));
    }
}
