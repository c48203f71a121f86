//! Transitivity indices: users k linking i and j under one of four
//! direction patterns, summarized by their topic entropies.

use super::IndexEngine;
use crate::graph::{intersect, Direction};
use crate::model::{TransitivityIndices, TransitivityType};
use crate::stats::MeanStdev;

impl TransitivityType {
    /// Directions from i and from j whose neighbor sets are intersected.
    pub fn directions(&self) -> (Direction, Direction) {
        use Direction::{Incoming, Outgoing};
        match self {
            Self::Type1 => (Outgoing, Outgoing),
            Self::Type2 => (Outgoing, Incoming),
            Self::Type3 => (Incoming, Outgoing),
            Self::Type4 => (Incoming, Incoming),
        }
    }
}

impl IndexEngine<'_> {
    /// Count of common friends and the mean / sample stdev of their entropies.
    ///
    /// No common friends → mean and stdev undefined. One → stdev 0.
    pub fn transitivity(&self, user_i: &str, user_j: &str, kind: TransitivityType) -> TransitivityIndices {
        let (dir_i, dir_j) = kind.directions();
        let cf_i = self.graph.neighbors(user_i, dir_i);
        let cf_j = self.graph.neighbors(user_j, dir_j);
        let common = intersect(&cf_i, &cf_j);

        let entropies = self.entropies_of(common.iter().copied());
        let summary = MeanStdev::of(&entropies);

        tracing::debug!(user_i, user_j, %kind, common_friends = common.len(), "transitivity");

        TransitivityIndices {
            kind,
            common_friends: common.len(),
            mean_entropy: summary.mean,
            stdev_entropy: summary.stdev,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EntropyPolicy;
    use crate::engine::IndexEngine;
    use crate::graph::SocialGraph;
    use crate::model::{TopicStore, TransitivityType};
    use crate::stats::EntropyCache;

    #[test]
    fn test_each_pattern_finds_its_common_friend() {
        // One distinct k per pattern.
        let graph = SocialGraph::from_edges([
            ("i", "k1"), ("j", "k1"),
            ("i", "k2"), ("k2", "j"),
            ("k3", "i"), ("j", "k3"),
            ("k4", "i"), ("k4", "j"),
        ]);
        let topics = TopicStore::new();
        let cache = EntropyCache::default();
        let engine = IndexEngine::new(&graph, &topics, &cache);

        for kind in TransitivityType::ALL {
            let t = engine.transitivity("i", "j", kind);
            assert_eq!(t.common_friends, 1, "{kind}");
            // No entropies cached → zero stand-in.
            assert_eq!(t.mean_entropy, Some(0.0));
            assert_eq!(t.stdev_entropy, Some(0.0));
        }
    }

    #[test]
    fn test_no_common_friends_is_undefined() {
        let graph = SocialGraph::from_edges([("i", "a"), ("j", "b")]);
        let topics = TopicStore::new();
        let cache = EntropyCache::build(&topics, EntropyPolicy::ZeroConvention).unwrap();
        let engine = IndexEngine::new(&graph, &topics, &cache);

        for kind in TransitivityType::ALL {
            let t = engine.transitivity("i", "j", kind);
            assert_eq!(t.common_friends, 0);
            assert_eq!(t.mean_entropy, None);
            assert_eq!(t.stdev_entropy, None);
        }
    }
}
