// src/sequence/mod.rs

//! Operator-paced traversal of a resolved work-item order.
//!
//! - [`outcome`] holds the mutable per-session outcome map.
//! - [`sequencer`] composes the graph and the cursor stack into the single
//!   object a front end drives via `advance(direction)`.

pub mod outcome;
pub mod sequencer;

pub use outcome::{Outcome, OutcomeEntry, OutcomeMap};
pub use sequencer::{Direction, Sequencer, SequencerOptions};
