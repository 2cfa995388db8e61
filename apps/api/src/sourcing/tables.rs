//! Static lookup tables shared by the address sources.
//!
//! All lookups map a finite enumerated key (industry name, company-type name)
//! to a fixed domain list. Unrecognized keys fall back to a generic list —
//! a source never fails on an unknown key.

/// Local-part aliases that recruiting teams commonly sit behind.
pub const RECRUITING_ALIASES: &[&str] = &[
    "recruiter",
    "hr",
    "talent",
    "hiring",
    "careers",
    "jobs",
    "recruitment",
    "people",
    "human.resources",
    "talent.acquisition",
];

pub const STARTUP_DOMAINS: &[&str] = &[
    "techstartup.io",
    "innovate.ai",
    "nextstep.com",
    "disruption.tech",
    "scalable.io",
    "fastgrow.co",
    "unicorn-startup.com",
    "venture.tech",
];

pub const ENTERPRISE_DOMAINS: &[&str] = &[
    "globaltech.com",
    "enterprise.corp",
    "worldwide.com",
    "international.biz",
    "multinational.org",
    "fortune500.com",
    "bigcorp.net",
    "megacorp.com",
];

pub const MIDSIZE_DOMAINS: &[&str] = &[
    "growthcompany.com",
    "midsizefirm.net",
    "established.biz",
    "mature-tech.com",
    "solidfirm.co",
    "reliable-company.net",
    "steady-growth.com",
];

/// Fallback when neither the company type nor the industry is recognized.
pub const GENERIC_DOMAINS: &[&str] = &[
    "talentnetwork.com",
    "careersportal.net",
    "hiringhub.io",
    "jobsearch.com",
];

/// Domains for a company-type key. Unknown keys get the generic list.
pub fn company_type_domains(company_type: &str) -> &'static [&'static str] {
    match company_type.to_lowercase().as_str() {
        "startup" | "start-up" => STARTUP_DOMAINS,
        "mnc" | "multinational" | "enterprise" | "large" => ENTERPRISE_DOMAINS,
        "mid-size" | "midsize" | "medium" => MIDSIZE_DOMAINS,
        _ => GENERIC_DOMAINS,
    }
}

/// Domains for an industry key. Unknown keys get the generic list.
pub fn industry_domains(industry: &str) -> &'static [&'static str] {
    match industry.to_lowercase().as_str() {
        "fintech" => &[
            "financetech.com",
            "paymentcorp.io",
            "bankingtech.net",
            "cryptofirm.co",
        ],
        "healthtech" => &[
            "medtech.com",
            "healthinnovation.io",
            "biotech-corp.net",
            "digitalhealth.co",
        ],
        "ai/ml" | "ai" | "ml" => &[
            "aicompany.tech",
            "mlstartup.ai",
            "datatech.io",
            "deeplearning.co",
        ],
        "e-commerce" | "ecommerce" => &[
            "ecommtech.com",
            "retailtech.io",
            "marketplace.biz",
            "shopping-tech.net",
        ],
        "edtech" => &["edtech-startup.com", "learningtech.io", "education-corp.net"],
        "gaming" => &["gamedev.studio", "gaming-corp.com", "entertainment.tech"],
        "saas" => &["saascompany.com", "cloudtech.io", "software-corp.net"],
        _ => GENERIC_DOMAINS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_type_lookup_known_keys() {
        assert_eq!(company_type_domains("Startup"), STARTUP_DOMAINS);
        assert_eq!(company_type_domains("start-up"), STARTUP_DOMAINS);
        assert_eq!(company_type_domains("MNC"), ENTERPRISE_DOMAINS);
        assert_eq!(company_type_domains("Mid-size"), MIDSIZE_DOMAINS);
    }

    #[test]
    fn test_company_type_unknown_falls_back() {
        assert_eq!(company_type_domains("Co-operative"), GENERIC_DOMAINS);
    }

    #[test]
    fn test_industry_lookup_known_keys() {
        assert!(industry_domains("FinTech").contains(&"financetech.com"));
        assert!(industry_domains("AI/ML").contains(&"mlstartup.ai"));
        assert!(industry_domains("SaaS").contains(&"saascompany.com"));
    }

    #[test]
    fn test_industry_unknown_falls_back() {
        assert_eq!(industry_domains("Agriculture"), GENERIC_DOMAINS);
    }

    #[test]
    fn test_tables_are_domain_safe() {
        for domain in STARTUP_DOMAINS
            .iter()
            .chain(ENTERPRISE_DOMAINS)
            .chain(MIDSIZE_DOMAINS)
            .chain(GENERIC_DOMAINS)
        {
            assert!(domain.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '.'
                || c == '-'));
        }
    }
}
