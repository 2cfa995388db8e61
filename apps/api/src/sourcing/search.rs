//! Search-query simulation: addresses shaped like the contacts a
//! `"<job title> recruiter email"` style web search would surface.
//!
//! Real search-API integration is out of scope; the construction is fully
//! deterministic over the profile.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::{compact, hyphenate};
use crate::sourcing::provider::{insert_bounded, AddressSource};

const MAX_ADDRESSES: usize = 12;
const MAX_LOCATIONS: usize = 3;
const MAX_TARGET_COMPANIES: usize = 5;

/// Local parts for the three simulated query intents: recruiter contact,
/// hiring manager, HR contact.
const QUERY_PATTERNS: &[&str] = &["recruiter", "hiring.manager", "hr.contact"];

const DIRECTORY_DOMAINS: &[&str] = &[
    "talent-search.net",
    "recruiter-directory.com",
    "hiring-network.org",
];

pub struct SearchQuerySource;

impl AddressSource for SearchQuerySource {
    fn name(&self) -> &'static str {
        "search-simulation"
    }

    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();
        let job = hyphenate(&profile.job_title);

        // Most specific first: company-qualified, then location-qualified
        // searches. The generic directory fill takes whatever room is left,
        // so a minimal profile still produces a full set.
        for company in profile.target_companies.iter().take(MAX_TARGET_COMPANIES) {
            let company = compact(company);
            if company.is_empty() {
                continue;
            }
            if !insert_bounded(
                &mut out,
                MAX_ADDRESSES,
                format!("recruiter@{company}-careers.com"),
            ) {
                return Ok(out);
            }
        }

        for location in profile.locations.iter().take(MAX_LOCATIONS) {
            let location = compact(location);
            if location.is_empty() {
                continue;
            }
            if !insert_bounded(
                &mut out,
                MAX_ADDRESSES,
                format!("recruiter.{location}@talent-search.net"),
            ) {
                return Ok(out);
            }
        }

        for domain in DIRECTORY_DOMAINS {
            for pattern in QUERY_PATTERNS {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{pattern}@{domain}"))
                    || !insert_bounded(&mut out, MAX_ADDRESSES, format!("{pattern}.{job}@{domain}"))
                {
                    return Ok(out);
                }
            }
        }

        Ok(out)
    }
}
