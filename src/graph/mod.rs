// src/graph/mod.rs

//! Dependency graph over work items.
//!
//! - [`item`] defines the static work-item metadata.
//! - [`graph`] holds the arena-indexed graph: insertion-time cycle detection
//!   and on-demand topological resolution.

pub mod graph;
pub mod item;

pub use graph::DependencyGraph;
pub use item::{ItemId, WorkItem};
