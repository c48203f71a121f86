//! # Statistical Primitives
//!
//! Topic entropy, topic-vector similarity, the batch entropy cache and the
//! sample summaries that the index families aggregate with.
//!
//! | Function | Meaning |
//! |----------|---------|
//! | `entropy` | H = −Σ p·ln p over one topic vector |
//! | `similarity` | Pearson correlation of two topic vectors |
//! | `EntropyCache::build` | one pass over the topic store |
//! | `summary::*` | mean, sample stdev, max with "undefined" on empty input |

pub mod entropy;
pub mod similarity;
pub mod cache;
pub mod summary;

pub use entropy::entropy;
pub use similarity::similarity;
pub use cache::EntropyCache;
pub use summary::{MeanMax, MeanStdev};
