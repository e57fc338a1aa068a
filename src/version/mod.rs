//! Version layer: parsing, registry access and the read-only oracle
//!
//! This module provides everything the resolver reads: published releases
//! from the registry, the installed version from the environment, and the
//! version type used to order them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Oracle    │◀────│    Probe    │
//! │  (fetch)    │     │ (read-only) │     │ (pip show)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │ ReleaseSet  │
//! │   (PyPI)    │     │  (parsed)   │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`oracle`]: `VersionOracle`, the resolver's only view of the outside world
//! - [`registry`]: Registry trait for fetching releases from remote sources
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`pep440`]: The `Version` type
//! - [`types`]: `ReleaseSet` and `Release`
//! - [`error`]: Error types for version parsing, registry and oracle operations

pub mod error;
pub mod oracle;
pub mod pep440;
pub mod registries;
pub mod registry;
pub mod types;
