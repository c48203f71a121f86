//! Clustering indices: how close user j sits to i's close friends.

use super::IndexEngine;
use crate::graph::{difference, intersect, Neighborhood};
use crate::model::{ClusteringIndices, RelationType};
use crate::stats::MeanMax;
use crate::Result;

impl IndexEngine<'_> {
    /// i's close friends under `relation`, classified by reciprocity.
    pub fn close_friends(&self, user_i: &str, relation: RelationType) -> Neighborhood<'_> {
        let followers = self.graph.in_neighbors(user_i);
        let followees = self.graph.out_neighbors(user_i);
        match relation {
            RelationType::Mutual => intersect(&followers, &followees),
            RelationType::OnesidedFrom => difference(&followees, &followers),
            RelationType::OnesidedTo => difference(&followers, &followees),
        }
    }

    /// Mean and max similarity of j to each close friend that has a topic
    /// vector. Undefined when none qualify or j has no vector.
    pub fn clustering(&self, user_i: &str, user_j: &str, relation: RelationType) -> Result<ClusteringIndices> {
        let Some(vec_j) = self.topics.get(user_j) else {
            tracing::debug!(user_j, %relation, "clustering undefined: no topic vector for j");
            return Ok(ClusteringIndices::undefined(relation));
        };

        let friends = self.close_friends(user_i, relation);
        let sims = self.similarities_to(vec_j, friends.iter().copied())?;
        let summary = MeanMax::of(&sims);

        tracing::debug!(user_i, user_j, %relation, close_friends = friends.len(), compared = sims.len(), "clustering");

        Ok(ClusteringIndices {
            relation,
            mean_similarity: summary.mean,
            max_similarity: summary.max,
            error: None,
        })
    }
}
