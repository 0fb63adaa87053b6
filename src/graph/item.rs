// src/graph/item.rs

//! Work item metadata as registered with the dependency graph.

/// Unique, stable identifier of a work item.
pub type ItemId = String;

/// A single hardware check as declared by the plan.
///
/// This is the static view of an item: identifier, declared dependencies and
/// tags. Mutable outcome state lives in the [`crate::sequence::OutcomeMap`]
/// owned by the Sequencer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: ItemId,
    /// Identifiers this item depends on, in declaration order.
    pub depends: Vec<ItemId>,
    /// Categories this item is relevant for (e.g. "laptop", "server").
    pub tags: Vec<String>,
}

impl WorkItem {
    pub fn new(
        id: impl Into<ItemId>,
        depends: impl IntoIterator<Item = impl Into<ItemId>>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            depends: depends.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this item is relevant for the given category tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
