//! Candidate window selection

use crate::version::pep440::Version;
use crate::version::types::{Release, ReleaseSet};

/// Releases strictly above `installed` and at most `latest`, oldest first
///
/// When the registry lists the same version under two spellings
/// (`1.0` and `1.0.0`), only the first reported one is kept.
pub fn candidate_window<'a>(
    releases: &'a ReleaseSet,
    installed: &Version,
    latest: &Version,
) -> Vec<&'a Release> {
    let mut window: Vec<&Release> = releases
        .sorted()
        .into_iter()
        .filter(|r| &r.version > installed && &r.version <= latest)
        .collect();
    window.dedup_by(|a, b| a.version == b.version);
    window
}
