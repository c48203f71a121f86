//! Batch-computed topic entropies.
//!
//! Built once from the `TopicStore`, then read-only. Every index family reads
//! entropies from here; nothing downstream recomputes them.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::entropy;
use crate::config::EntropyPolicy;
use crate::model::{TopicStore, UserId};
use crate::{Error, Result};

/// User id → entropy of that user's topic vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntropyCache {
    entropies: HashMap<UserId, f64>,
}

impl EntropyCache {
    /// The single entropy pass over the whole store.
    ///
    /// Fails on the first vector `policy` does not accept, naming its user.
    pub fn build(store: &TopicStore, policy: EntropyPolicy) -> Result<Self> {
        let mut entropies = HashMap::with_capacity(store.len());
        for (user, vector) in store.iter() {
            let h = entropy(vector.as_slice(), policy).map_err(|source| Error::Entropy {
                user: user.clone(),
                source: Box::new(source),
            })?;
            entropies.insert(user.clone(), h);
        }
        tracing::info!(users = entropies.len(), ?policy, "entropy cache built");
        Ok(Self { entropies })
    }

    pub fn get(&self, user: &str) -> Option<f64> {
        self.entropies.get(user).copied()
    }

    /// Entropy with 0 standing in for users absent from the topic store.
    pub fn get_or_zero(&self, user: &str) -> f64 {
        self.get(user).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entropies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entropies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserId, f64)> {
        self.entropies.iter().map(|(u, h)| (u, *h))
    }
}

impl<U: Into<UserId>> FromIterator<(U, f64)> for EntropyCache {
    fn from_iter<I: IntoIterator<Item = (U, f64)>>(iter: I) -> Self {
        Self {
            entropies: iter.into_iter().map(|(u, h)| (u.into(), h)).collect(),
        }
    }
}
