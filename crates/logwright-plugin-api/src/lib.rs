//! # logwright-plugin-api
//!
//! Host-facing API for loading and driving logwright parser plugins.
//!
//! This crate sits on top of `logwright-runtime` and provides:
//!
//! - `ParserRegistry` - validated descriptors, keyed by name, in
//!   registration order
//! - `ParserInstance` - a constructed parser with an explicit lifecycle
//! - `ParserManager` - the orchestrator tying scan, filter, registry, and
//!   instantiation into one pipeline
//! - `InstanceBuilder` - option-driven construction of a single instance
//! - `HostConfig` - TOML host configuration with per-parser settings
//!
//! ## Concurrency contract
//!
//! Registration is a single-writer phase; once a registry is populated it is
//! read-only and safe to share behind `&` (or an `Arc`) across workers. An
//! instance, by contrast, is exclusively owned by one caller at a time:
//! `process` may mutate parser state, so workers that process records in
//! parallel each hold their own instance.

pub mod builder;
pub mod config;
pub mod instance;
pub mod manager;
pub mod registry;

pub use builder::{options, InstanceBuilder};
pub use config::{HostConfig, HostSettings, ParserSettings};
pub use instance::{InstanceState, ParserInstance};
pub use manager::{
    dispatch, Dispatch, DispatchOutcome, ParserManager, RejectedCandidate, ScanReport, SpawnReport,
};
pub use registry::ParserRegistry;
