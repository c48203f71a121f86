//! Neighborhood sets and the set algebra the index families are built from.

use hashbrown::HashSet;

use crate::model::UserId;

/// A set of users borrowed from a `SocialGraph`.
pub type Neighborhood<'g> = HashSet<&'g UserId>;

/// Traversal direction from a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Followees: `u → v`.
    Outgoing,
    /// Followers: `v → u`.
    Incoming,
}

/// Users present in both sets.
pub fn intersect<'g>(a: &Neighborhood<'g>, b: &Neighborhood<'g>) -> Neighborhood<'g> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|u| large.contains(*u)).copied().collect()
}

/// Users in `a` that are not in `b`.
pub fn difference<'g>(a: &Neighborhood<'g>, b: &Neighborhood<'g>) -> Neighborhood<'g> {
    a.iter().filter(|u| !b.contains(*u)).copied().collect()
}
