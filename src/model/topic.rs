//! Topic vectors and the read-only store that maps users to them.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::{Error, Result};

/// A user's distribution over K latent topics.
///
/// Non-negative, normally summing to 1. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicVector(Vec<f64>);

impl TopicVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

impl From<Vec<f64>> for TopicVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

/// Mapping from user id to topic vector, produced by an external topic model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicStore {
    vectors: HashMap<UserId, TopicVector>,
}

impl TopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: impl Into<UserId>, vector: impl Into<TopicVector>) {
        self.vectors.insert(user.into(), vector.into());
    }

    /// Explicit lookup. Callers pick their own policy for `None`.
    pub fn get(&self, user: &str) -> Option<&TopicVector> {
        self.vectors.get(user)
    }

    pub fn contains(&self, user: &str) -> bool {
        self.vectors.contains_key(user)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &TopicVector)> {
        self.vectors.iter()
    }

    /// Number of topics K, taken from an arbitrary entry. `None` when empty.
    pub fn dimension(&self) -> Option<usize> {
        self.vectors.values().next().map(TopicVector::len)
    }

    /// Check that every vector shares the same length K.
    pub fn validate_dimensions(&self) -> Result<()> {
        let Some(k) = self.dimension() else {
            return Ok(());
        };
        for (user, vector) in &self.vectors {
            if vector.len() != k {
                return Err(Error::DimensionMismatch {
                    left: k,
                    right: vector.len(),
                    context: format!("topic vector of user {user}"),
                });
            }
        }
        Ok(())
    }
}

impl<U, V> FromIterator<(U, V)> for TopicStore
where
    U: Into<UserId>,
    V: Into<TopicVector>,
{
    fn from_iter<I: IntoIterator<Item = (U, V)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().map(|(u, v)| (u.into(), v.into())).collect(),
        }
    }
}
