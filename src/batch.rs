//! Batch evaluation of many user pairs.
//!
//! Pairs are independent, so they run in parallel on a rayon pool with no
//! shared mutable state. Every pair yields a report. Indices that failed
//! inside a report are also listed as `PairFailure`s; they never abort the
//! rest of the batch.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::IndexEngine;
use crate::model::{NstdReport, UserId};
use crate::{Error, Result};

/// One index of one pair that could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairFailure {
    pub user_i: UserId,
    pub user_j: UserId,
    /// `homophily`, `clustering/<relation>` or `degree_heterogeneity`.
    pub index: String,
    pub error: String,
}

/// Everything a batch produced. `reports` keeps the input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub reports: Vec<NstdReport>,
    pub failures: Vec<PairFailure>,
}

impl BatchOutcome {
    /// Number of pairs evaluated.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Compute a full report for every pair on the current rayon pool.
pub fn evaluate_pairs(engine: &IndexEngine<'_>, pairs: &[(UserId, UserId)]) -> BatchOutcome {
    let reports: Vec<NstdReport> = pairs
        .par_iter()
        .map(|(i, j)| engine.report(i.as_str(), j.as_str()))
        .collect();

    let mut failures = Vec::new();
    for report in &reports {
        for (index, error) in report.failures() {
            tracing::warn!(user_i = %report.user_i, user_j = %report.user_j, %index, error, "index failed");
            failures.push(PairFailure {
                user_i: report.user_i.clone(),
                user_j: report.user_j.clone(),
                index,
                error: error.to_string(),
            });
        }
    }

    tracing::info!(
        pairs = pairs.len(),
        complete = reports.iter().filter(|r| r.is_complete()).count(),
        failed_indices = failures.len(),
        "batch evaluated"
    );
    BatchOutcome { reports, failures }
}

/// A dedicated pool, or rayon's default sizing when `threads` is `None`.
pub fn thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| Error::Config(format!("cannot build thread pool: {e}")))
}
