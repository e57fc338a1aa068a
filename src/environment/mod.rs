//! Process-level access to the target Python environment
//!
//! - [`command`]: the `pip` invocation prefix shared by installer and probe
//! - [`installer`]: installing one pinned release
//! - [`probe`]: reading the currently installed version

pub mod command;
pub mod installer;
pub mod probe;
