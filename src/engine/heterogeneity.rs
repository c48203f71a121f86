//! Degree-heterogeneity indices over user j's followers.

use super::IndexEngine;
use crate::model::DegreeHeterogeneityIndices;
use crate::stats::{MeanMax, MeanStdev};
use crate::Result;

impl IndexEngine<'_> {
    /// Entropy mean and stdev over j's followers, 0 for those without an
    /// entropy.
    pub fn follower_entropy(&self, user_j: &str) -> MeanStdev {
        let followers = self.graph.in_neighbors(user_j);
        MeanStdev::of(&self.entropies_of(followers.iter().copied()))
    }

    /// Similarity mean and max of i to j's followers that have a topic
    /// vector. Undefined when i has none.
    pub fn follower_similarity(&self, user_i: &str, user_j: &str) -> Result<MeanMax> {
        let Some(vec_i) = self.topics.get(user_i) else {
            return Ok(MeanMax::default());
        };
        let followers = self.graph.in_neighbors(user_j);
        Ok(MeanMax::of(&self.similarities_to(vec_i, followers.iter().copied())?))
    }

    /// Both halves for the pair. A similarity failure only blanks the
    /// similarity half.
    pub fn degree_heterogeneity(&self, user_i: &str, user_j: &str) -> DegreeHeterogeneityIndices {
        let entropy = self.follower_entropy(user_j);

        let (similarity, similarity_error) = match self.follower_similarity(user_i, user_j) {
            Ok(s) => (s, None),
            Err(e) => {
                tracing::debug!(user_i, user_j, error = %e, "follower similarity failed");
                (MeanMax::default(), Some(e.to_string()))
            }
        };

        tracing::debug!(user_i, user_j, mean_entropy = ?entropy.mean, "degree heterogeneity");

        DegreeHeterogeneityIndices {
            mean_follower_entropy: entropy.mean,
            stdev_follower_entropy: entropy.stdev,
            mean_similarity: similarity.mean,
            max_similarity: similarity.max,
            similarity_error,
        }
    }
}
