// src/sequence/outcome.rs

//! Mutable outcome state, kept apart from the static work-item metadata so
//! cursor predicates can be written as plain functions over (item, outcomes).

use std::collections::HashMap;
use std::fmt;

use crate::graph::ItemId;

/// Outcome assigned to a work item by the operator or by cascade policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::Fail => write!(f, "fail"),
            Outcome::Skip => write!(f, "skip"),
        }
    }
}

/// An assigned outcome plus provenance.
///
/// `auto` marks outcomes set by cascade policy rather than by the operator;
/// auto outcomes are cleared again when the operator navigates backward past
/// the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeEntry {
    pub outcome: Outcome,
    /// Free-form operator comment.
    pub data: String,
    pub auto: bool,
}

/// Identifier → outcome map for one operator session.
///
/// Absence of an entry means "not answered yet".
#[derive(Debug, Clone, Default)]
pub struct OutcomeMap {
    entries: HashMap<ItemId, OutcomeEntry>,
}

impl OutcomeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&OutcomeEntry> {
        self.entries.get(id)
    }

    /// Operator-assigned outcome.
    pub fn set(&mut self, id: ItemId, outcome: Outcome, data: impl Into<String>) {
        self.entries.insert(
            id,
            OutcomeEntry {
                outcome,
                data: data.into(),
                auto: false,
            },
        );
    }

    /// Cascade-assigned skip.
    pub fn set_auto_skip(&mut self, id: ItemId) {
        self.entries.insert(
            id,
            OutcomeEntry {
                outcome: Outcome::Skip,
                data: String::new(),
                auto: true,
            },
        );
    }

    /// Reset an item to "not answered".
    pub fn clear(&mut self, id: &str) -> Option<OutcomeEntry> {
        self.entries.remove(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &OutcomeEntry)> {
        self.entries.iter()
    }

    /// Clone of the whole map, for session persistence by collaborators.
    pub fn snapshot(&self) -> HashMap<ItemId, OutcomeEntry> {
        self.entries.clone()
    }

    /// Replace the map wholesale, replaying a previously taken snapshot.
    pub fn restore(&mut self, snapshot: HashMap<ItemId, OutcomeEntry>) {
        self.entries = snapshot;
    }
}
