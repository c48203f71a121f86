//! # Index Engine
//!
//! Computes the four NSTD index families for an ordered pair of users:
//!
//! | Family | Method | Output |
//! |--------|--------|--------|
//! | Homophily | `homophily` | similarity of i and j |
//! | Transitivity | `transitivity` | common friends: count, entropy mean/stdev |
//! | Clustering | `clustering` | j vs i's close friends: similarity mean/max |
//! | Degree heterogeneity | `degree_heterogeneity` | j's followers: entropy mean/stdev, similarity to i mean/max |
//!
//! The engine only borrows its three inputs. It holds no mutable state, is
//! `Copy + Send + Sync`, and any number of queries may run concurrently
//! once the `EntropyCache` is built.
//!
//! Missing data is never an error here. Absent users have empty
//! neighborhoods, absent entropies count as 0, and users without a topic
//! vector are skipped in similarity aggregates. Only homophily reports a
//! missing vector, as `None`.

mod transitivity;
mod clustering;
mod heterogeneity;

use crate::graph::SocialGraph;
use crate::model::{
    ClusteringIndices, NstdReport, RelationType, TopicStore, TopicVector, TransitivityType, UserId,
};
use crate::stats::{similarity, EntropyCache};
use crate::Result;

// ============================================================================
// IndexEngine
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct IndexEngine<'a> {
    graph: &'a SocialGraph,
    topics: &'a TopicStore,
    entropies: &'a EntropyCache,
}

impl<'a> IndexEngine<'a> {
    pub fn new(graph: &'a SocialGraph, topics: &'a TopicStore, entropies: &'a EntropyCache) -> Self {
        Self { graph, topics, entropies }
    }

    pub fn graph(&self) -> &'a SocialGraph {
        self.graph
    }

    pub fn topics(&self) -> &'a TopicStore {
        self.topics
    }

    pub fn entropies(&self) -> &'a EntropyCache {
        self.entropies
    }

    // ========================================================================
    // Homophily
    // ========================================================================

    /// Topic similarity of i and j. `None` when either has no topic vector.
    pub fn homophily(&self, user_i: &str, user_j: &str) -> Result<Option<f64>> {
        let (Some(vec_i), Some(vec_j)) = (self.topics.get(user_i), self.topics.get(user_j)) else {
            tracing::debug!(user_i, user_j, "homophily undefined: missing topic vector");
            return Ok(None);
        };
        similarity(vec_i.as_slice(), vec_j.as_slice()).map(Some)
    }

    // ========================================================================
    // All families
    // ========================================================================

    /// Every index for the pair, in the fixed variant order of
    /// `TransitivityType::ALL` and `RelationType::ALL`.
    ///
    /// Each family and variant is its own query: a failure is recorded on
    /// the record that raised it and every other index is still computed.
    pub fn report(&self, user_i: &str, user_j: &str) -> NstdReport {
        let (homophily, homophily_error) = match self.homophily(user_i, user_j) {
            Ok(h) => (h, None),
            Err(e) => (None, Some(e.to_string())),
        };

        let transitivity = TransitivityType::ALL
            .iter()
            .map(|&kind| self.transitivity(user_i, user_j, kind))
            .collect();

        let clustering = RelationType::ALL
            .iter()
            .map(|&relation| {
                self.clustering(user_i, user_j, relation)
                    .unwrap_or_else(|e| ClusteringIndices::failed(relation, &e))
            })
            .collect();

        NstdReport {
            user_i: UserId::from(user_i),
            user_j: UserId::from(user_j),
            homophily,
            homophily_error,
            transitivity,
            clustering,
            degree_heterogeneity: self.degree_heterogeneity(user_i, user_j),
        }
    }

    // ========================================================================
    // Shared aggregation helpers
    // ========================================================================

    /// Cached entropies of `users`, 0 for users without one.
    fn entropies_of<'u>(&self, users: impl IntoIterator<Item = &'u UserId>) -> Vec<f64> {
        users
            .into_iter()
            .map(|u| self.entropies.get_or_zero(u.as_str()))
            .collect()
    }

    /// Similarity of `anchor` to each user in `users` that has a topic vector.
    fn similarities_to<'u>(
        &self,
        anchor: &TopicVector,
        users: impl IntoIterator<Item = &'u UserId>,
    ) -> Result<Vec<f64>> {
        users
            .into_iter()
            .filter_map(|u| self.topics.get(u.as_str()))
            .map(|v| similarity(anchor.as_slice(), v.as_slice()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
