//! Plain-text edge lists: one `follower,followee` per line.
//!
//! ```text
//! 1001,1002      1001 follows 1002
//! 1002,1001      and is followed back
//! ```
//!
//! Blank lines are ignored. Other lines that do not split into exactly two
//! non-empty ids are skipped and counted, never fatal.

use std::io::BufRead;

use super::SocialGraph;
use crate::Result;

/// Progress is logged every this many edges.
const PROGRESS_EVERY: usize = 10_000;

/// What a parse pass saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeListStats {
    /// Well-formed lines (duplicates included).
    pub edges: usize,
    /// Non-blank lines that were not `a,b`.
    pub skipped_lines: usize,
}

/// Split one line into two ids, stripping line terminators.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split(',');
    let (a, b) = (fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    let (a, b) = (strip_terminators(a), strip_terminators(b));
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a, b))
}

fn strip_terminators(s: &str) -> &str {
    s.trim_matches(|c| c == '\n' || c == '\r')
}

impl SocialGraph {
    /// Build a graph from an edge-list reader.
    pub fn from_edge_list<R: BufRead>(reader: R) -> Result<(Self, EdgeListStats)> {
        let mut graph = SocialGraph::new();
        let mut stats = EdgeListStats::default();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(&line) {
                Some((follower, followee)) => {
                    graph.add_edge(follower, followee);
                    stats.edges += 1;
                    if stats.edges % PROGRESS_EVERY == 0 {
                        tracing::debug!(edges = stats.edges, "reading edge list");
                    }
                }
                None if line.trim().is_empty() => {}
                None => {
                    tracing::trace!(line = lineno + 1, "skipping malformed edge line");
                    stats.skipped_lines += 1;
                }
            }
        }

        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped = stats.skipped_lines,
            "social graph built"
        );
        Ok((graph, stats))
    }

    /// Build a graph from an in-memory edge list.
    pub fn parse_edge_list(text: &str) -> Result<(Self, EdgeListStats)> {
        Self::from_edge_list(text.as_bytes())
    }
}
