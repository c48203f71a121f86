//! Per-query index records.
//!
//! `None` in any `Option<f64>` field means "undefined", never a zero
//! stand-in. Callers must branch on it.
//!
//! A query that fails keeps its failure on the record it belongs to, as an
//! error string next to the undefined values. The rest of the report is
//! unaffected.

use serde::{Deserialize, Serialize};

use super::{RelationType, TransitivityType, UserId};

/// Common-friend statistics for one transitivity pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitivityIndices {
    pub kind: TransitivityType,
    /// Number of common friends.
    pub common_friends: usize,
    /// Mean topic entropy of the common friends.
    pub mean_entropy: Option<f64>,
    /// Sample standard deviation of those entropies (0 for a single friend).
    pub stdev_entropy: Option<f64>,
}

/// Similarity of user j to user i's close friends of one reciprocity class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringIndices {
    pub relation: RelationType,
    pub mean_similarity: Option<f64>,
    pub max_similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClusteringIndices {
    /// Both values undefined, no error.
    pub fn undefined(relation: RelationType) -> Self {
        Self {
            relation,
            mean_similarity: None,
            max_similarity: None,
            error: None,
        }
    }

    pub fn failed(relation: RelationType, error: &crate::Error) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::undefined(relation)
        }
    }
}

/// Topical heterogeneity of user j's followers, and their similarity to user i.
///
/// The entropy half never fails. A similarity failure leaves the similarity
/// half undefined and is recorded in `similarity_error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeHeterogeneityIndices {
    pub mean_follower_entropy: Option<f64>,
    pub stdev_follower_entropy: Option<f64>,
    pub mean_similarity: Option<f64>,
    pub max_similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_error: Option<String>,
}

/// Every index family for one ordered pair (i, j).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NstdReport {
    pub user_i: UserId,
    pub user_j: UserId,
    pub homophily: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homophily_error: Option<String>,
    pub transitivity: Vec<TransitivityIndices>,
    pub clustering: Vec<ClusteringIndices>,
    pub degree_heterogeneity: DegreeHeterogeneityIndices,
}

impl NstdReport {
    pub fn transitivity(&self, kind: TransitivityType) -> Option<&TransitivityIndices> {
        self.transitivity.iter().find(|t| t.kind == kind)
    }

    pub fn clustering(&self, relation: RelationType) -> Option<&ClusteringIndices> {
        self.clustering.iter().find(|c| c.relation == relation)
    }

    /// Failed indices as `(index, error)`, in report order. Index names are
    /// `homophily`, `clustering/<relation>` and `degree_heterogeneity`.
    pub fn failures(&self) -> Vec<(String, &str)> {
        let homophily = self
            .homophily_error
            .as_deref()
            .map(|e| ("homophily".to_string(), e));
        let clustering = self
            .clustering
            .iter()
            .filter_map(|c| Some((format!("clustering/{}", c.relation), c.error.as_deref()?)));
        let heterogeneity = self
            .degree_heterogeneity
            .similarity_error
            .as_deref()
            .map(|e| ("degree_heterogeneity".to_string(), e));

        homophily.into_iter().chain(clustering).chain(heterogeneity).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.homophily_error.is_none()
            && self.clustering.iter().all(|c| c.error.is_none())
            && self.degree_heterogeneity.similarity_error.is_none()
    }
}
