// src/config/mod.rs

//! Plan-file loading and validation.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_plan_path, load_and_validate, load_from_path};
pub use model::{ItemConfig, PlanFile, RawPlanFile};
