//! Loading the two core inputs (and pair lists) from disk.
//!
//! Failure here is the only process-fatal error class: without a graph and
//! a topic store there is nothing to compute.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::{parse_line, SocialGraph};
use crate::model::{TopicStore, UserId};
use crate::Result;

/// Read an edge-list file, one `follower,followee` per line.
pub fn load_social_graph(path: &Path) -> Result<SocialGraph> {
    let file = File::open(path)?;
    let (graph, stats) = SocialGraph::from_edge_list(BufReader::new(file))?;
    if stats.skipped_lines > 0 {
        tracing::warn!(
            path = %path.display(),
            skipped = stats.skipped_lines,
            "edge list had malformed lines"
        );
    }
    Ok(graph)
}

/// Read a topic store written as `{"user_id": [w_1, ..., w_K], ...}` and
/// check that every vector has the same K.
pub fn load_topic_store(path: &Path) -> Result<TopicStore> {
    let file = File::open(path)?;
    let store: TopicStore = serde_json::from_reader(BufReader::new(file))?;
    store.validate_dimensions()?;
    tracing::info!(
        path = %path.display(),
        users = store.len(),
        topics = store.dimension().unwrap_or(0),
        "topic store loaded"
    );
    Ok(store)
}

/// Read user pairs, one `user_i,user_j` per line. Malformed lines are skipped.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(UserId, UserId)>> {
    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some((i, j)) => pairs.push((UserId::from(i), UserId::from(j))),
            None if line.trim().is_empty() => {}
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "pair list had malformed lines");
    }
    Ok(pairs)
}

pub fn load_pairs(path: &Path) -> Result<Vec<(UserId, UserId)>> {
    read_pairs(BufReader::new(File::open(path)?))
}
