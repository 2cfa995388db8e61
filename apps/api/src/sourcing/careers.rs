//! Career-page pattern synthesis: careers/jobs/talent aliases at target
//! companies and industry-derived domains, with a job-title-derived fallback
//! so the source degrades instead of emptying when no companies are named.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::{compact, hyphenate};
use crate::sourcing::provider::{insert_bounded, AddressSource};

const MAX_ADDRESSES: usize = 12;
const MAX_TARGET_COMPANIES: usize = 10;

const CAREER_PATTERNS: &[&str] = &[
    "careers",
    "jobs",
    "talent",
    "recruiting",
    "hr",
    "people",
    "hiring",
    "opportunities",
];

pub struct CareerPageSource;

impl AddressSource for CareerPageSource {
    fn name(&self) -> &'static str {
        "career-pages"
    }

    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();

        'targets: for company in profile.target_companies.iter().take(MAX_TARGET_COMPANIES) {
            let company = compact(company);
            if company.is_empty() {
                continue;
            }
            for pattern in CAREER_PATTERNS {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{pattern}@{company}.com"))
                    || !insert_bounded(
                        &mut out,
                        MAX_ADDRESSES,
                        format!("{pattern}@careers.{company}.com"),
                    )
                {
                    break 'targets;
                }
            }
        }

        'industries: for industry in &profile.industries {
            let industry = compact(industry);
            if industry.is_empty() {
                continue;
            }
            for pattern in &CAREER_PATTERNS[..3] {
                if !insert_bounded(
                    &mut out,
                    MAX_ADDRESSES,
                    format!("{pattern}@{industry}-company.com"),
                ) {
                    break 'industries;
                }
            }
        }

        // Least-specific fallback: a career domain derived from the job title
        // itself, so a bare profile still yields candidates.
        if out.is_empty() {
            let job = hyphenate(&profile.job_title);
            for pattern in &CAREER_PATTERNS[..4] {
                if !insert_bounded(&mut out, MAX_ADDRESSES, format!("{pattern}@{job}-careers.com")) {
                    break;
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
    fn test_minimal_profile_falls_back_to_title_domain() {
        let out = CareerPageSource.generate(&profile()).unwrap();
        assert!(out.contains("careers@backend-engineer-careers.com"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_target_company_direct_and_subdomain() {
        let mut profile = profile();
        profile.target_companies = vec!["Shopify".into()];
        let out = CareerPageSource.generate(&profile).unwrap();
        assert!(out.contains("careers@shopify.com"));
        assert!(out.contains("jobs@careers.shopify.com"));
    }

    #[test]
    fn test_industry_domains_present_without_targets() {
        let mut profile = profile();
        profile.industries = vec!["FinTech".into()];
        let out = CareerPageSource.generate(&profile).unwrap();
        assert!(out.contains("careers@fintech-company.com"));
    }

    #[test]
    fn test_fallback_not_used_when_specific_fields_exist() {
        let mut profile = profile();
        profile.target_companies = vec!["Shopify".into()];
        let out = CareerPageSource.generate(&profile).unwrap();
        assert!(!out.iter().any(|a| a.ends_with("@backend-engineer-careers.com")));
    }

    #[test]
    fn test_cap_respected() {
        let mut profile = profile();
        profile.target_companies = (0..10).map(|i| format!("Company{i}")).collect();
        profile.industries = vec!["FinTech".into(), "SaaS".into()];
        let out = CareerPageSource.generate(&profile).unwrap();
        assert_eq!(out.len(), MAX_ADDRESSES);
    }
}
