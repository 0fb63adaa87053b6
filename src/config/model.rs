// src/config/model.rs

use serde::Deserialize;

/// Top-level plan as read from a TOML file, before validation.
///
/// A plan is an ordered array of `[[item]]` tables:
///
/// ```toml
/// [[item]]
/// name = "camera-detect"
/// tags = ["laptop", "desktop"]
///
/// [[item]]
/// name = "camera-still"
/// depends = ["camera-detect"]
/// tags = ["laptop", "desktop"]
/// ```
///
/// Item order is meaningful: it is the insertion order used as the tie-break
/// when the dependency order is resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanFile {
    #[serde(default)]
    pub item: Vec<ItemConfig>,
}

/// One `[[item]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    /// Unique item name.
    pub name: String,

    /// Names of items that must be answered before this one.
    #[serde(default)]
    pub depends: Vec<String>,

    /// Categories this item is relevant for.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Text shown to the operator.
    #[serde(default)]
    pub description: Option<String>,
}

/// A plan that passed semantic validation (see `config::validate`).
#[derive(Debug, Clone)]
pub struct PlanFile {
    item: Vec<ItemConfig>,
}

impl PlanFile {
    /// Construct without validating. Only `TryFrom<RawPlanFile>` should call
    /// this.
    pub(crate) fn new_unchecked(item: Vec<ItemConfig>) -> Self {
        Self { item }
    }

    /// Items in plan order.
    pub fn items(&self) -> &[ItemConfig] {
        &self.item
    }

    pub fn len(&self) -> usize {
        self.item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }
}
