//! Core data types for the modorder tool.
//!
//! This crate defines the shapes exchanged with the resolver (package
//! descriptors and the id normalization rule) together with the on-disk
//! formats the tool reads and writes around it: mod metadata, the persisted
//! load order file and the global configuration.
//!
//! This crate is intentionally free of ordering logic.

/// File name of the mod metadata list searched for by default.
pub const DEFAULT_MODS_FILE: &str = "mods.json";

/// File name of the persisted load order by default.
pub const DEFAULT_ORDER_FILE: &str = "order.json";

pub mod config;
pub mod id;
pub mod metadata;
pub mod order_file;
pub mod package;
