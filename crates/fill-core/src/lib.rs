//! Core types for the fixture-filler framework.
//!
//! This crate provides the foundational types used across the framework:
//!
//! - [`TypeDescriptor`] / [`TypeKind`] - the type universe the filler walks
//! - [`TypeRegistry`] - name-to-descriptor table, loadable from YAML models
//! - [`Value`] - generated object graphs
//! - [`ValueGenerator`] / [`InterfaceMocker`] - pluggable strategy seams
//! - [`FillConfig`] - per-target-type overrides, bounds and policies
//!
//! # Architecture
//!
//! ```text
//! fill-core (this crate)
//!    │
//!    └─── fixture-filler  (classification, traversal, generation)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fill_core::{Property, TypeDescriptor, TypeId, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(TypeDescriptor::object(
//!     "Address",
//!     vec![Property::new("city", "text"), Property::new("zip", "text")],
//! ));
//! registry.validate().unwrap();
//!
//! let address = registry.get(&TypeId::new("Address")).unwrap();
//! assert!(registry.has_properties(address));
//! ```

pub mod config;
pub mod generator;
pub mod registry;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use config::{CyclePolicy, FillConfig, PropertyKey, VisitOrder};
pub use generator::{InterfaceMocker, SharedGenerator, ValueGenerator};
pub use registry::{ModelError, ResolvedProperty, TypeRegistry};
pub use types::{Constructor, Param, Property, ScalarKind, TypeDescriptor, TypeId, TypeKind};
pub use values::Value;
