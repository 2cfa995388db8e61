//! Professional-network pattern synthesis: talent-acquisition style aliases
//! at network domains and at the profile's target companies.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::compact;
use crate::sourcing::provider::{insert_bounded, AddressSource};

const MAX_ADDRESSES: usize = 15;
const MAX_TARGET_COMPANIES: usize = 10;

const NETWORK_PATTERNS: &[&str] = &[
    "talent-acquisition",
    "recruiting",
    "people-ops",
    "hr-business-partner",
    "senior-recruiter",
    "technical-recruiter",
    "hiring-manager",
];

const NETWORK_DOMAINS: &[&str] = &[
    "linkedin-corp.com",
    "talent-solutions.linkedin.com",
    "recruiting.linkedin.com",
];

pub struct ProfessionalNetworkSource;

impl AddressSource for ProfessionalNetworkSource {
    fn name(&self) -> &'static str {
        "professional-network"
    }

    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();

        for company in profile.target_companies.iter().take(MAX_TARGET_COMPANIES) {
            let company = compact(company);
            if company.is_empty() {
                continue;
            }
            for pattern in &NETWORK_PATTERNS[..3] {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{pattern}@{company}.com"))
                    || !insert_bounded(
                        &mut out,
                        MAX_ADDRESSES,
                        format!("{pattern}.{company}@company.com"),
                    )
                {
                    return Ok(out);
                }
            }
        }

        // Generic network recruiters; the whole set when no companies are named.
        for domain in NETWORK_DOMAINS {
            for pattern in NETWORK_PATTERNS {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{pattern}@{domain}")) {
                    return Ok(out);
                }
            }
        }

        Ok(out)
    }
}
