//! Company-domain synthesis: recruiting aliases at domains derived from the
//! profile's company types, industries, and explicit target companies.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::compact;
use crate::sourcing::provider::{insert_bounded, AddressSource};
use crate::sourcing::tables::{
    company_type_domains, industry_domains, ENTERPRISE_DOMAINS, MIDSIZE_DOMAINS,
    RECRUITING_ALIASES, STARTUP_DOMAINS,
};

const MAX_ADDRESSES: usize = 20;
const MAX_TARGET_COMPANIES: usize = 10;
const MAX_LOCATIONS: usize = 5;

pub struct CompanyDomainSource;

impl AddressSource for CompanyDomainSource {
    fn name(&self) -> &'static str {
        "company-domains"
    }

    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();
        let job = compact(&profile.job_title);

        // Named target companies map straight to alias@company.com and may
        // fill at most half the budget, leaving room for the broader tables.
        let target_budget = MAX_ADDRESSES / 2;
        'targets: for company in profile.target_companies.iter().take(MAX_TARGET_COMPANIES) {
            let company = compact(company);
            if company.is_empty() {
                continue;
            }
            for alias in &RECRUITING_ALIASES[..3] {
                if out.len() >= target_budget
                    || !insert_bounded(&mut out, MAX_ADDRESSES, format!("{alias}@{company}.com"))
                {
                    break 'targets;
                }
            }
        }

        // Company-type tables; a profile with no stated type degrades to all
        // of them rather than producing nothing.
        let mut domains: Vec<&'static str> = Vec::new();
        if profile.company_types.is_empty() {
            domains.extend(STARTUP_DOMAINS);
            domains.extend(ENTERPRISE_DOMAINS);
            domains.extend(MIDSIZE_DOMAINS);
        } else {
            for company_type in &profile.company_types {
                domains.extend(company_type_domains(company_type));
            }
        }
        for industry in &profile.industries {
            domains.extend(industry_domains(industry));
        }

        'domains: for domain in domains {
            for alias in RECRUITING_ALIASES {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{alias}@{domain}"))
                    || !insert_bounded(&mut out, MAX_ADDRESSES, format!("{alias}.{job}@{domain}"))
                {
                    break 'domains;
                }
            }
        }

        for location in profile.locations.iter().take(MAX_LOCATIONS) {
            let location = compact(location);
            if location.is_empty() {
                continue;
            }
            for alias in ["recruiter", "hr", "jobs"] {
                if !insert_bounded(
                    &mut out,
                    MAX_ADDRESSES,
                    format!("{alias}.{location}@jobsearch.com"),
                ) {
                    return Ok(out);
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SearchProfile {
        serde_json::from_str(r#"{"job_title": "Backend Engineer"}"#).unwrap()
    }

    #[test]
    fn test_minimal_profile_still_generates() {
        let out = CompanyDomainSource.generate(&profile()).unwrap();
        assert!(!out.is_empty());
        assert!(out.len() <= MAX_ADDRESSES);
    }

    #[test]
    fn test_cap_respected_with_every_field_populated() {
        let mut profile = profile();
        profile.company_types = vec!["Startup".into(), "MNC".into(), "Mid-size".into()];
        profile.industries = vec!["FinTech".into(), "SaaS".into(), "Gaming".into()];
        profile.target_companies = vec!["Stripe".into(), "Shopify".into(), "Airbnb".into()];
        profile.locations = vec!["San Francisco".into(), "New York".into()];
        let out = CompanyDomainSource.generate(&profile).unwrap();
        assert_eq!(out.len(), MAX_ADDRESSES);
    }

    #[test]
    fn test_target_companies_map_to_direct_domains() {
        let mut profile = profile();
        profile.target_companies = vec!["Stripe".into()];
        let out = CompanyDomainSource.generate(&profile).unwrap();
        assert!(out.contains("recruiter@stripe.com"));
        assert!(out.contains("hr@stripe.com"));
    }

    #[test]
    fn test_company_name_sanitized() {
        let mut profile = profile();
        profile.target_companies = vec!["Acme, Inc.".into()];
        let out = CompanyDomainSource.generate(&profile).unwrap();
        assert!(out.contains("recruiter@acmeinc.com"));
    }

    #[test]
    fn test_company_type_selects_matching_table() {
        let mut profile = profile();
        profile.company_types = vec!["MNC".into()];
        let out = CompanyDomainSource.generate(&profile).unwrap();
        assert!(out.iter().any(|a| a.ends_with("@globaltech.com")));
        assert!(!out.iter().any(|a| a.ends_with("@techstartup.io")));
    }

    #[test]
    fn test_job_title_token_is_compact() {
        let out = CompanyDomainSource.generate(&profile()).unwrap();
        assert!(out.iter().any(|a| a.contains(".backendengineer@")));
        assert!(out.iter().all(|a| !a.contains(' ')));
    }
}
