#![allow(dead_code)]

use certseq::config::{ItemConfig, PlanFile, RawPlanFile};

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile { item: Vec::new() },
        }
    }

    pub fn with_item(mut self, item: ItemConfig) -> Self {
        self.plan.item.push(item);
        self
    }

    /// The raw, unvalidated plan (for tests that exercise validation).
    pub fn build_raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ItemConfig`.
pub struct ItemConfigBuilder {
    item: ItemConfig,
}

impl ItemConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            item: ItemConfig {
                name: name.to_string(),
                depends: vec![],
                tags: vec![],
                description: None,
            },
        }
    }

    pub fn depends(mut self, dep: &str) -> Self {
        self.item.depends.push(dep.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.item.tags.push(tag.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.item.description = Some(text.to_string());
        self
    }

    pub fn build(self) -> ItemConfig {
        self.item
    }
}
