//! Startup-ecosystem pattern synthesis: founder/CTO/talent roles at
//! startup-database domains. Only runs when the profile asks for
//! startup-like companies — that gate is a precondition, not a failure.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::{compact, hyphenate};
use crate::sourcing::provider::{insert_bounded, AddressSource};

const MAX_ADDRESSES: usize = 8;

const STARTUP_ROLES: &[&str] = &[
    "founder",
    "co-founder",
    "cto",
    "vp-engineering",
    "head-of-talent",
    "people-ops",
    "talent-partner",
];

const ECOSYSTEM_DOMAINS: &[&str] = &[
    "angellist-startups.com",
    "crunchbase-companies.com",
    "ycombinator-alumni.com",
    "techstars-portfolio.com",
];

/// Industries with a distinct startup hiring scene.
const STARTUP_HEAVY_INDUSTRIES: &[&str] = &["fintech", "saas", "aiml"];

pub struct StartupEcosystemSource;

impl AddressSource for StartupEcosystemSource {
    fn name(&self) -> &'static str {
        "startup-ecosystem"
    }

    fn applies(&self, profile: &SearchProfile) -> bool {
        profile.wants_startups()
    }

    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();
        let job = hyphenate(&profile.job_title);

        'industries: for industry in &profile.industries {
            let industry = compact(industry);
            if !STARTUP_HEAVY_INDUSTRIES.contains(&industry.as_str()) {
                continue;
            }
            if !insert_bounded(&mut out, MAX_ADDRESSES, format!("hiring@{industry}-startup.io"))
                || !insert_bounded(
                    &mut out,
                    MAX_ADDRESSES,
                    format!("jobs@{industry}-ventures.com"),
                )
            {
                break 'industries;
            }
        }

        'domains: for domain in ECOSYSTEM_DOMAINS {
            for role in &STARTUP_ROLES[..3] {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{role}@{domain}"))
                    || !insert_bounded(&mut out, MAX_ADDRESSES, format!("{role}-{job}@{domain}"))
                {
                    break 'domains;
                }
            }
        }

        Ok(out)
    }
}
