//! Building blocks of the greedy pairing step.
//!
//! - [`candidate`]: legal opponents of each pooled competitor
//! - [`prioritizer`]: which competitor to fix next (most constrained first)
//! - [`selector`]: which opponent the fixed competitor gets (nearest rank)

pub mod candidate;
pub mod prioritizer;
pub mod selector;


pub use candidate::{candidate_sets, valid_opponents, CandidateSet};
pub use prioritizer::{ConstraintPrioritizer, Priority, Selection};
pub use selector::OpponentSelector;
