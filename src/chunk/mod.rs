//! Document chunking
//!
//! This module splits long sentence sequences into character-bounded
//! chunks for the per-chunk ranking passes.

pub mod planner;
