// src/graph/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::model::PlanFile;
use crate::errors::{CertseqError, Result};
use crate::graph::item::{ItemId, WorkItem};

/// Arena node: the registered item plus its reverse edges.
#[derive(Debug, Clone)]
struct Node {
    item: WorkItem,
    /// Registered items that list this one in their `depends`.
    dependents: Vec<ItemId>,
}

/// DFS colors for insertion-time cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// In-memory dependency graph over work items, keyed by identifier.
///
/// Items are stored in an arena in insertion order; insertion order is
/// semantically significant because it is the tie-break among items that
/// become unblocked at the same point during resolution.
///
/// Acyclicity is enforced at insertion: `add` rejects any item whose
/// dependency chain would lead back to itself, without mutating the graph.
/// Dependencies may reference items that have not been registered yet;
/// resolution fails loudly if they never are.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<ItemId, usize>,
    /// Reverse edges whose target has not been registered yet, keyed by the
    /// missing dependency name.
    pending_dependents: HashMap<ItemId, Vec<ItemId>>,
    /// Cached resolved order; invalidated by `add`.
    resolved: Option<Vec<ItemId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a validated [`PlanFile`].
    ///
    /// `[[item]]` order in the plan becomes insertion order.
    pub fn from_plan(plan: &PlanFile) -> Result<Self> {
        let mut graph = Self::new();
        for item in plan.items() {
            graph.add(WorkItem::new(
                item.name.clone(),
                item.depends.iter().cloned(),
                item.tags.iter().cloned(),
            ))?;
        }
        Ok(graph)
    }

    /// Register a work item.
    ///
    /// Fails with [`CertseqError::DuplicateItem`] if the identifier is already
    /// registered, or [`CertseqError::CycleDetected`] if the item's dependency
    /// chain would lead back to the item itself. On failure the graph is left
    /// exactly as it was.
    pub fn add(&mut self, item: WorkItem) -> Result<()> {
        if self.index.contains_key(&item.id) {
            return Err(CertseqError::DuplicateItem(item.id));
        }
        self.check_no_cycle(&item)?;

        let id = item.id.clone();
        let depends = item.depends.clone();

        // Reverse edges declared by earlier items that referenced this
        // identifier before it existed.
        let dependents = self.pending_dependents.remove(&id).unwrap_or_default();

        let ix = self.nodes.len();
        self.nodes.push(Node { item, dependents });
        self.index.insert(id.clone(), ix);

        for dep in &depends {
            match self.index.get(dep) {
                Some(&dix) => self.nodes[dix].dependents.push(id.clone()),
                None => self
                    .pending_dependents
                    .entry(dep.clone())
                    .or_default()
                    .push(id.clone()),
            }
        }

        debug!(item = %id, deps = ?depends, "registered work item");
        self.resolved = None;
        Ok(())
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a registered item.
    pub fn get(&self, id: &str) -> Option<&WorkItem> {
        self.index.get(id).map(|&ix| &self.nodes[ix].item)
    }

    /// Registered items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &WorkItem> {
        self.nodes.iter().map(|n| &n.item)
    }

    /// Compute (or return the cached) topologically valid total order.
    ///
    /// Idempotent: the order is cached until the next `add`. Fails with
    /// [`CertseqError::Unresolvable`] if any item depends on an identifier
    /// that was never registered.
    pub fn resolve(&mut self) -> Result<&[ItemId]> {
        if self.resolved.is_none() {
            let order = self.compute_order()?;
            debug!(items = order.len(), "resolved dependency order");
            self.resolved = Some(order);
        }
        Ok(self.resolved.as_deref().unwrap_or_default())
    }

    /// The dependencies of `id` followed by `id` itself (for display).
    pub fn dependencies_of(&self, id: &str) -> Result<Vec<ItemId>> {
        let &ix = self
            .index
            .get(id)
            .ok_or_else(|| CertseqError::ItemNotFound(id.to_string()))?;
        let mut deps = self.nodes[ix].item.depends.clone();
        deps.push(self.nodes[ix].item.id.clone());
        Ok(deps)
    }

    /// With `None`, the full resolved order. With an identifier, the portion
    /// of the resolved order strictly after it: everything that could depend
    /// on, or merely follow, that item.
    ///
    /// Forces resolution.
    pub fn dependents_of(&mut self, id: Option<&str>) -> Result<Vec<ItemId>> {
        let order = self.resolve()?;
        match id {
            None => Ok(order.to_vec()),
            Some(id) => {
                let pos = order
                    .iter()
                    .position(|i| i == id)
                    .ok_or_else(|| CertseqError::ItemNotFound(id.to_string()))?;
                Ok(order[pos + 1..].to_vec())
            }
        }
    }

    /// Reject `candidate` if any chain of registered dependencies leads back
    /// to it.
    ///
    /// Iterative three-color DFS over the arena; the candidate itself is not
    /// inserted, so it is handled by name. Dependencies naming unregistered
    /// items are dead ends here (they cannot close a cycle yet).
    fn check_no_cycle(&self, candidate: &WorkItem) -> Result<()> {
        let id = candidate.id.as_str();
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        // (arena index, position in that node's dependency list)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for dep in &candidate.depends {
            if dep == id {
                return Err(CertseqError::CycleDetected {
                    item: id.to_string(),
                    via: id.to_string(),
                });
            }
            let Some(&start) = self.index.get(dep) else {
                continue;
            };
            if marks[start] == Mark::Done {
                continue;
            }
            marks[start] = Mark::InProgress;
            stack.push((start, 0));

            while let Some(&mut (ix, ref mut next_dep)) = stack.last_mut() {
                let deps = &self.nodes[ix].item.depends;
                if *next_dep >= deps.len() {
                    marks[ix] = Mark::Done;
                    stack.pop();
                    continue;
                }
                let dep = &deps[*next_dep];
                *next_dep += 1;

                if dep == id {
                    // This chain returns to the item being added.
                    return Err(CertseqError::CycleDetected {
                        item: id.to_string(),
                        via: self.nodes[ix].item.id.clone(),
                    });
                }
                if let Some(&dix) = self.index.get(dep.as_str()) {
                    match marks[dix] {
                        Mark::Unvisited => {
                            marks[dix] = Mark::InProgress;
                            stack.push((dix, 0));
                        }
                        // A grey hit would mean the registered graph already
                        // contains a cycle, which `add` rules out.
                        Mark::InProgress | Mark::Done => {}
                    }
                }
            }
        }

        Ok(())
    }

    /// Single "unblock as dependencies complete" pass over insertion order.
    fn compute_order(&self) -> Result<Vec<ItemId>> {
        let n = self.nodes.len();
        let mut placed = vec![false; n];
        let mut deferred: HashSet<usize> = HashSet::new();
        let mut order: Vec<usize> = Vec::with_capacity(n);

        for ix in 0..n {
            if placed[ix] {
                continue;
            }
            if self.is_blocked(ix, &placed) {
                debug!(item = %self.nodes[ix].item.id, "deferring item with unresolved dependency");
                deferred.insert(ix);
                continue;
            }
            placed[ix] = true;
            order.push(ix);
            self.unblock_dependents(ix, &mut placed, &mut deferred, &mut order);
        }

        if !deferred.is_empty() {
            // Dependency on an identifier that was never added: a data error
            // in the plan, not a cycle.
            let blocked = (0..n)
                .filter(|ix| deferred.contains(ix))
                .map(|ix| self.nodes[ix].item.id.clone())
                .collect();
            return Err(CertseqError::Unresolvable { blocked });
        }

        Ok(order
            .into_iter()
            .map(|ix| self.nodes[ix].item.id.clone())
            .collect())
    }

    /// An item is blocked while any dependency is unplaced; dependencies that
    /// were never registered can never be placed.
    fn is_blocked(&self, ix: usize, placed: &[bool]) -> bool {
        self.nodes[ix]
            .item
            .depends
            .iter()
            .any(|dep| match self.index.get(dep.as_str()) {
                Some(&dix) => !placed[dix],
                None => true,
            })
    }

    /// After placing an item, place any deferred dependents that just became
    /// unblocked, depth-first, preserving reverse-edge registration order as
    /// the tie-break.
    fn unblock_dependents(
        &self,
        start: usize,
        placed: &mut [bool],
        deferred: &mut HashSet<usize>,
        order: &mut Vec<usize>,
    ) {
        let mut stack: Vec<usize> = Vec::new();
        self.push_dependents(start, &mut stack);

        while let Some(ix) = stack.pop() {
            if !deferred.contains(&ix) || self.is_blocked(ix, placed) {
                continue;
            }
            deferred.remove(&ix);
            placed[ix] = true;
            order.push(ix);
            self.push_dependents(ix, &mut stack);
        }
    }

    /// Push registered dependents in reverse so they pop in declaration order.
    fn push_dependents(&self, ix: usize, stack: &mut Vec<usize>) {
        for dep_id in self.nodes[ix].dependents.iter().rev() {
            if let Some(&dix) = self.index.get(dep_id.as_str()) {
                stack.push(dix);
            }
        }
    }
}
