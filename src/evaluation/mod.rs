//! Route partition evaluation.
//!
//! Computes route lengths and loads and reports capacity, fleet and
//! completeness violations. Used to compare builders, never to optimize.

mod evaluator;

pub use evaluator::{Evaluation, PartitionEvaluator, Violation};
