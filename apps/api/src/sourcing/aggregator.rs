//! Fans a profile out to every address source and merges the results into
//! one candidate set.
//!
//! Union is plain `BTreeSet` extend, so repeated identical-input calls yield
//! the same set in the same (lexicographic) order. A failing source is
//! logged and contributes nothing; it never aborts the run. No truncation
//! happens here; the ceiling is applied exactly once, after deduplication.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::models::profile::SearchProfile;
use crate::sourcing::provider::AddressSource;

pub fn aggregate(
    sources: &[Box<dyn AddressSource>],
    profile: &SearchProfile,
) -> BTreeSet<String> {
    let mut union = BTreeSet::new();

    for source in sources {
        if !source.applies(profile) {
            debug!(source = source.name(), "source precondition not met, skipped");
            continue;
        }
        match source.generate(profile) {
            Ok(candidates) => {
                debug!(
                    source = source.name(),
                    count = candidates.len(),
                    "source contributed candidates"
                );
                union.extend(candidates);
            }
            Err(e) => {
                warn!(source = source.name(), "address source failed: {e:#}");
            }
        }
    }

    debug!(total = union.len(), "aggregation complete");
    union
}
