// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::graph::ItemId;

#[derive(Error, Debug)]
pub enum CertseqError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Item already registered: {0}")]
    DuplicateItem(ItemId),

    #[error("circular dependency involving '{item}' and '{via}'")]
    CycleDetected { item: ItemId, via: ItemId },

    #[error("{} item(s) blocked by missing dependencies: {}", blocked.len(), blocked.join(", "))]
    Unresolvable { blocked: Vec<ItemId> },

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CertseqError>;
