//! # Input/Output utilities for coverage profiles.
//!
//! Writes smoothed coverage back to disk as bedGraph so it can be loaded into a
//! genome browser next to the raw track.
//!
pub mod bedgraph;

// re-expose core functions
pub use bedgraph::*;
