//! # Social Graph
//!
//! Read-only directed graph over user ids. Edge `u → v` means "u follows v".
//!
//! Nodes are implicit: a user exists once an edge mentions it. Edges carry
//! no attributes and are deduplicated, so the graph is never a multigraph.
//! Both adjacency directions are kept so that followers and followees are
//! O(1) lookups followed by an O(degree) copy.
//!
//! ## Limitations
//!
//! - **Build, then query**: mutation needs `&mut self`, queries take `&self`.
//!   Share a finished graph across threads by reference.
//! - **In memory only**: no on-disk index, no incremental updates.

pub mod neighborhood;
pub mod edge_list;

use hashbrown::{HashMap, HashSet};

use crate::model::UserId;

pub use neighborhood::{difference, intersect, Direction, Neighborhood};
pub use edge_list::{parse_line, EdgeListStats};

// ============================================================================
// SocialGraph
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// follower → followees
    out_adj: HashMap<UserId, HashSet<UserId>>,
    /// followee → followers
    in_adj: HashMap<UserId, HashSet<UserId>>,
    edge_count: usize,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(follower, followee)` pairs.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<UserId>,
        B: Into<UserId>,
    {
        let mut graph = Self::new();
        for (follower, followee) in edges {
            graph.add_edge(follower, followee);
        }
        graph
    }

    /// Add `follower → followee`. Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, follower: impl Into<UserId>, followee: impl Into<UserId>) -> bool {
        let follower = follower.into();
        let followee = followee.into();

        // Register both endpoints in both maps so node lookups see them.
        self.in_adj.entry(follower.clone()).or_default();
        self.out_adj.entry(followee.clone()).or_default();

        let inserted = self
            .out_adj
            .entry(follower.clone())
            .or_default()
            .insert(followee.clone());
        if inserted {
            self.in_adj.entry(followee).or_default().insert(follower);
            self.edge_count += 1;
        }
        inserted
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn node_count(&self) -> usize {
        self.out_adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.out_adj.contains_key(user)
    }

    pub fn has_edge(&self, follower: &str, followee: &str) -> bool {
        self.out_adj
            .get(follower)
            .is_some_and(|followees| followees.contains(followee))
    }

    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.out_adj.keys()
    }

    pub fn out_degree(&self, user: &str) -> usize {
        self.out_adj.get(user).map_or(0, HashSet::len)
    }

    pub fn in_degree(&self, user: &str) -> usize {
        self.in_adj.get(user).map_or(0, HashSet::len)
    }

    // ========================================================================
    // Neighborhoods
    // ========================================================================

    /// Users `user` follows. Unknown user → empty set.
    pub fn out_neighbors(&self, user: &str) -> Neighborhood<'_> {
        self.neighbors(user, Direction::Outgoing)
    }

    /// Users following `user`. Unknown user → empty set.
    pub fn in_neighbors(&self, user: &str) -> Neighborhood<'_> {
        self.neighbors(user, Direction::Incoming)
    }

    pub fn neighbors(&self, user: &str, dir: Direction) -> Neighborhood<'_> {
        let adj = match dir {
            Direction::Outgoing => &self.out_adj,
            Direction::Incoming => &self.in_adj,
        };
        adj.get(user)
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }
}

impl<A: Into<UserId>, B: Into<UserId>> FromIterator<(A, B)> for SocialGraph {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

// ============================================================================
// Tests
// ============================================================================
