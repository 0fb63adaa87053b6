// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Load a plan file from a given path and return the raw [`RawPlanFile`].
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (name uniqueness, dependency references). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let plan: RawPlanFile = toml::from_str(&contents)?;

    Ok(plan)
}

/// Load a plan file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - an empty plan,
///   - duplicate item names,
///   - self-dependencies and unknown `depends` references.
///
/// Cycles are rejected later, when the items are registered with the
/// dependency graph.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw_plan = load_from_path(&path)?;
    let plan = PlanFile::try_from(raw_plan)?;
    Ok(plan)
}

/// Helper to resolve a default plan path.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Plan.toml")
}
