//! Pipeline orchestration
//!
//! Wires tokenization, graph building, ranking and selection into the
//! chunked multi-pass summarization flow, and owns the fallback path for
//! documents that cannot be ranked.

pub mod fallback;
pub mod runner;
pub mod selector;
