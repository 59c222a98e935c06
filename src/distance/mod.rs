//! Euclidean distance utilities.
//!
//! Provides point-to-point distance and the depot/client distance matrices
//! every builder computes once per call.

mod matrix;

pub use matrix::{distance, DistanceMatrix, Stop};
