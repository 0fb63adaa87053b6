// src/sequence/sequencer.rs

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::cursor::{CallbackCursor, CallbackTiming, Cursor, FilteringCursor, SliceCursor};
use crate::errors::{CertseqError, Result};
use crate::graph::{DependencyGraph, ItemId, WorkItem};
use crate::sequence::outcome::{Outcome, OutcomeEntry, OutcomeMap};

/// Direction of one operator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Options applied when building a [`Sequencer`].
#[derive(Debug, Clone, Default)]
pub struct SequencerOptions {
    /// When set, items not tagged with this category are hidden in both
    /// directions.
    pub category: Option<String>,
}

/// The object the front end drives: resolved order wrapped in the cascade
/// callback and the visibility filters.
///
/// Cursor stack, innermost to outermost:
///
/// 1. [`SliceCursor`] over the resolved order.
/// 2. `Before`-mode [`CallbackCursor`] implementing cascade skip: once the
///    operator moves forward past an item with a non-auto `Fail`/`Skip`
///    outcome, every unanswered item later in the resolved order receives an
///    auto-assigned `Skip`.
/// 3. Optional category [`FilteringCursor`] (same predicate both ways).
/// 4. Answered-state [`FilteringCursor`]: forward, items with an
///    operator-assigned outcome are hidden; backward, auto-assigned outcomes
///    are cleared as the cursor passes over them, so those items reappear on
///    the next forward pass.
///
/// A Sequencer consumes its graph; registering further items requires
/// building a new Sequencer, so a cursor over a stale order cannot exist.
/// Single-threaded by design: the shared outcome map is `Rc<RefCell<..>>`
/// read live by the predicates above.
pub struct Sequencer {
    graph: DependencyGraph,
    order: Rc<Vec<ItemId>>,
    outcomes: Rc<RefCell<OutcomeMap>>,
    stack: Box<dyn Cursor<Item = ItemId>>,
}

impl Sequencer {
    /// Resolve the graph and build the cursor stack.
    ///
    /// Resolution errors (cycles were already rejected at `add`; this catches
    /// dependencies on identifiers that were never registered) abort
    /// construction: they are configuration errors in the plan, with the
    /// offending identifiers named.
    pub fn new(mut graph: DependencyGraph, options: SequencerOptions) -> Result<Self> {
        let order = Rc::new(graph.resolve()?.to_vec());
        let outcomes = Rc::new(RefCell::new(OutcomeMap::new()));

        let positions: Rc<HashMap<ItemId, usize>> = Rc::new(
            order
                .iter()
                .enumerate()
                .map(|(ix, id)| (id.clone(), ix))
                .collect(),
        );

        let base = SliceCursor::new(order.as_ref().clone());

        let cascade = {
            let order = Rc::clone(&order);
            let positions = Rc::clone(&positions);
            let outcomes = Rc::clone(&outcomes);
            move |id: &ItemId| {
                let finished = outcomes.borrow().get(id).cloned();
                let Some(entry) = finished else {
                    return;
                };
                if entry.auto || !matches!(entry.outcome, Outcome::Fail | Outcome::Skip) {
                    return;
                }
                let Some(&pos) = positions.get(id) else {
                    return;
                };
                let mut outcomes = outcomes.borrow_mut();
                for later in &order[pos + 1..] {
                    if outcomes.get(later).is_none() {
                        debug!(item = %later, cause = %id, "cascading auto skip to downstream item");
                        outcomes.set_auto_skip(later.clone());
                    }
                }
            }
        };
        let mut stack: Box<dyn Cursor<Item = ItemId>> =
            Box::new(CallbackCursor::new(base, CallbackTiming::Before, cascade));

        if let Some(category) = options.category {
            let tags: Rc<HashMap<ItemId, Vec<String>>> = Rc::new(
                graph
                    .items()
                    .map(|item| (item.id.clone(), item.tags.clone()))
                    .collect(),
            );
            let hide_other_category = move |id: &ItemId| {
                tags.get(id)
                    .is_none_or(|tags| !tags.iter().any(|tag| *tag == category))
            };
            stack = Box::new(FilteringCursor::symmetric(stack, hide_other_category));
        }

        let hide_answered = {
            let outcomes = Rc::clone(&outcomes);
            move |id: &ItemId| outcomes.borrow().get(id).is_some_and(|entry| !entry.auto)
        };
        let clear_auto = {
            let outcomes = Rc::clone(&outcomes);
            move |id: &ItemId| {
                let auto = outcomes.borrow().get(id).is_some_and(|entry| entry.auto);
                if auto {
                    debug!(item = %id, "clearing auto skip while navigating backward");
                    outcomes.borrow_mut().clear(id);
                }
                auto
            }
        };
        let stack: Box<dyn Cursor<Item = ItemId>> =
            Box::new(FilteringCursor::new(stack, hide_answered, clear_auto));

        Ok(Self {
            graph,
            order,
            outcomes,
            stack,
        })
    }

    /// One operator step. `None` means the traversal is exhausted in the
    /// requested direction, which is ordinary control flow, not an error.
    pub fn advance(&mut self, direction: Direction) -> Option<WorkItem> {
        let id = match direction {
            Direction::Forward => self.stack.next(),
            Direction::Backward => self.stack.prev(),
        }?;
        self.graph.get(&id).cloned()
    }

    pub fn has_next(&mut self) -> bool {
        self.stack.has_next()
    }

    pub fn has_prev(&mut self) -> bool {
        self.stack.has_prev()
    }

    /// Reset the position to "before first". Outcomes are kept; already
    /// answered items are skipped on the way forward by the visibility
    /// filter.
    pub fn restart(&mut self) {
        self.stack.restart();
    }

    /// Operator-assigned outcome for an item.
    pub fn set_outcome(
        &mut self,
        id: &str,
        outcome: Outcome,
        data: impl Into<String>,
    ) -> Result<()> {
        if self.graph.get(id).is_none() {
            return Err(CertseqError::ItemNotFound(id.to_string()));
        }
        self.outcomes.borrow_mut().set(id.to_string(), outcome, data);
        Ok(())
    }

    /// Reset an item to "not answered".
    pub fn clear_outcome(&mut self, id: &str) -> Result<()> {
        if self.graph.get(id).is_none() {
            return Err(CertseqError::ItemNotFound(id.to_string()));
        }
        self.outcomes.borrow_mut().clear(id);
        Ok(())
    }

    /// Current outcome of an item, if any.
    pub fn outcome_of(&self, id: &str) -> Option<OutcomeEntry> {
        self.outcomes.borrow().get(id).cloned()
    }

    /// The resolved order this session traverses.
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    /// Static metadata of a registered item.
    pub fn item(&self, id: &str) -> Option<&WorkItem> {
        self.graph.get(id)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Clone of the outcome map, for session persistence by collaborators.
    pub fn snapshot(&self) -> HashMap<ItemId, OutcomeEntry> {
        self.outcomes.borrow().snapshot()
    }

    /// Replay a previously taken snapshot against this session.
    pub fn restore(&mut self, snapshot: HashMap<ItemId, OutcomeEntry>) {
        self.outcomes.borrow_mut().restore(snapshot);
    }
}
