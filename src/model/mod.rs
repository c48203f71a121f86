//! # Data Model
//!
//! Plain DTOs shared by every layer: user ids, topic vectors, the topic
//! store, the variant enums and the per-query index records.
//!
//! Design rule: no graph traversal and no statistics here.
//! This module is pure data — no I/O, no state.

pub mod user;
pub mod topic;
pub mod kind;
pub mod record;

pub use user::UserId;
pub use topic::{TopicStore, TopicVector};
pub use kind::{RelationType, TransitivityType};
pub use record::{
    ClusteringIndices, DegreeHeterogeneityIndices, NstdReport, TransitivityIndices,
};
