//! Capacity splitting of a client order into vehicle routes.
//!
//! - [`split`] — greedy capacity split followed by the fleet-size tail-merge
//! - [`merge_tail`] — the tail-merge repair on its own
//! - [`collapse`] — full-collapse repair used by the interleaved insertion variant

mod capacity;

pub use capacity::{collapse, merge_tail, split};
