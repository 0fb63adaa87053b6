// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{CertseqError, Result};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = CertseqError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.item))
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_items(plan)?;
    validate_unique_names(plan)?;
    validate_item_dependencies(plan)?;
    Ok(())
}

fn ensure_has_items(plan: &RawPlanFile) -> Result<()> {
    if plan.item.is_empty() {
        return Err(CertseqError::ConfigError(
            "plan must contain at least one [[item]] table".to_string(),
        ));
    }
    Ok(())
}

fn validate_unique_names(plan: &RawPlanFile) -> Result<()> {
    let mut seen = HashSet::new();
    for item in plan.item.iter() {
        if !seen.insert(item.name.as_str()) {
            return Err(CertseqError::ConfigError(format!(
                "duplicate item name '{}'",
                item.name
            )));
        }
    }
    Ok(())
}

fn validate_item_dependencies(plan: &RawPlanFile) -> Result<()> {
    let names: HashSet<&str> = plan.item.iter().map(|i| i.name.as_str()).collect();
    for item in plan.item.iter() {
        for dep in item.depends.iter() {
            if dep == &item.name {
                return Err(CertseqError::ConfigError(format!(
                    "item '{}' cannot depend on itself",
                    item.name
                )));
            }
            if !names.contains(dep.as_str()) {
                return Err(CertseqError::ConfigError(format!(
                    "item '{}' has unknown dependency '{}'",
                    item.name, dep
                )));
            }
        }
    }
    Ok(())
}
