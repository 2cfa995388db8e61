//! The address-source capability and the default source list.
//!
//! Every generation strategy implements `AddressSource`; the aggregator only
//! sees the trait, so adding or removing a strategy is a one-line change to
//! `default_sources`.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::normalize;

/// One independent address-generation strategy: a pure, bounded mapping from
/// a search profile to a set of candidate addresses.
pub trait AddressSource: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Precondition for running this source against a profile. A source that
    /// does not apply is skipped, not failed.
    fn applies(&self, _profile: &SearchProfile) -> bool {
        true
    }

    /// Generates this source's candidate set. Missing optional profile
    /// fields must degrade to a less specific construction, never error.
    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>>;
}

/// Inserts a normalized address unless the set has reached `cap`.
/// Returns whether there is still room, so construction loops can break early.
pub(crate) fn insert_bounded(out: &mut BTreeSet<String>, cap: usize, addr: String) -> bool {
    if out.len() >= cap {
        return false;
    }
    out.insert(normalize(&addr));
    out.len() < cap
}

/// The production source list, in a fixed order. Order does not affect the
/// merged result (set union), only log readability.
pub fn default_sources() -> Vec<Box<dyn AddressSource>> {
    vec![
        Box::new(crate::sourcing::company::CompanyDomainSource),
        Box::new(crate::sourcing::search::SearchQuerySource),
        Box::new(crate::sourcing::network::ProfessionalNetworkSource),
        Box::new(crate::sourcing::boards::JobBoardSource),
        Box::new(crate::sourcing::careers::CareerPageSource),
        Box::new(crate::sourcing::startups::StartupEcosystemSource),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_bounded_respects_cap() {
        let mut out = BTreeSet::new();
        assert!(insert_bounded(&mut out, 2, "a@x.com".to_string()));
        assert!(!insert_bounded(&mut out, 2, "b@x.com".to_string()));
        assert!(!insert_bounded(&mut out, 2, "c@x.com".to_string()));
        assert_eq!(out.len(), 2);
        assert!(!out.contains("c@x.com"));
    }

    #[test]
    fn test_insert_bounded_normalizes() {
        let mut out = BTreeSet::new();
        insert_bounded(&mut out, 5, " HR@Example.COM ".to_string());
        assert!(out.contains("hr@example.com"));
    }

    #[test]
    fn test_insert_bounded_duplicate_does_not_consume_room() {
        let mut out = BTreeSet::new();
        insert_bounded(&mut out, 2, "a@x.com".to_string());
        insert_bounded(&mut out, 2, "A@x.com".to_string());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_default_sources_has_all_six_strategies() {
        let names: Vec<&str> = default_sources().iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"company-domains"));
        assert!(names.contains(&"startup-ecosystem"));
    }
}
