//! # nstd-indices — Relational Indices over a Social Graph
//!
//! Quantifies how a directed following relationship between two users
//! correlates with their topical similarity, their shared neighborhood and
//! the topical heterogeneity of their neighborhoods.
//!
//! ## Design Principles
//!
//! 1. **Inputs are immutable**: `SocialGraph` and `TopicStore` are built once, then only read
//! 2. **One entropy pass**: `EntropyCache` is built from the store before any query runs
//! 3. **Undefined is `None`**: empty samples never masquerade as zero
//! 4. **Closed variants**: transitivity and relation types are enums, matched exhaustively
//!
//! ## Quick Start
//!
//! ```rust
//! use nstd_indices::{
//!     EntropyCache, EntropyPolicy, IndexEngine, SocialGraph, TopicStore, TransitivityType,
//! };
//!
//! # fn example() -> nstd_indices::Result<()> {
//! let graph = SocialGraph::from_edges([("i", "k"), ("j", "k")]);
//! let topics: TopicStore = [
//!     ("i", vec![0.7, 0.2, 0.1]),
//!     ("j", vec![0.6, 0.3, 0.1]),
//!     ("k", vec![0.1, 0.1, 0.8]),
//! ]
//! .into_iter()
//! .collect();
//! let entropies = EntropyCache::build(&topics, EntropyPolicy::ZeroConvention)?;
//!
//! let engine = IndexEngine::new(&graph, &topics, &entropies);
//! let t = engine.transitivity("i", "j", TransitivityType::Type1);
//! assert_eq!(t.common_friends, 1);
//! assert_eq!(t.stdev_entropy, Some(0.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Index Families
//!
//! | Family | Variants | Record |
//! |--------|----------|--------|
//! | Homophily | — | `Option<f64>` |
//! | Transitivity | `type_1`..`type_4` | `TransitivityIndices` |
//! | Clustering | `mutual`, `onesided_from`, `onesided_to` | `ClusteringIndices` |
//! | Degree heterogeneity | — | `DegreeHeterogeneityIndices` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod stats;
pub mod graph;
pub mod engine;
pub mod batch;
pub mod config;
pub mod load;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    UserId, TopicVector, TopicStore,
    TransitivityType, RelationType,
    TransitivityIndices, ClusteringIndices, DegreeHeterogeneityIndices, NstdReport,
};

// ============================================================================
// Re-exports: Graph and statistics
// ============================================================================

pub use graph::{SocialGraph, Direction, Neighborhood, EdgeListStats, intersect, difference};
pub use stats::{entropy, similarity, EntropyCache};

// ============================================================================
// Re-exports: Engine, batch, config
// ============================================================================

pub use engine::IndexEngine;
pub use batch::{evaluate_pairs, BatchOutcome, PairFailure};
pub use config::{EngineConfig, EntropyPolicy, RunConfig};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid distribution: component {index} is {value}")]
    InvalidDistribution { index: usize, value: f64 },

    #[error("Dimension mismatch ({context}): {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize, context: String },

    #[error("Degenerate variance: a topic vector is constant")]
    DegenerateVariance,

    #[error("Entropy of user {user}: {source}")]
    Entropy {
        user: UserId,
        #[source]
        source: Box<Error>,
    },

    #[error("Unknown index type: {0}")]
    UnknownType(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
