//! Graph representation module

pub mod builder;
pub mod interner;

pub use builder::{DegreeSummary, GraphBuilder};
pub use interner::LabelInterner;
