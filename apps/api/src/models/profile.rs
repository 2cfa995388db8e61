use serde::{Deserialize, Serialize};

/// Default result ceiling when the request does not set one.
pub const DEFAULT_MAX_EMAILS: u32 = 25;
/// Hard upper bound on the result ceiling. Requests above this are rejected.
pub const MAX_EMAILS_CEILING: u32 = 200;

fn default_max_emails() -> u32 {
    DEFAULT_MAX_EMAILS
}

fn default_remote_ok() -> bool {
    true
}

/// A structured job-search profile. Built once from the request body and
/// consumed read-only by every address source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProfile {
    pub job_title: String,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub experience_years: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default = "default_remote_ok")]
    pub remote_ok: bool,
    #[serde(default)]
    pub company_types: Vec<String>,
    #[serde(default)]
    pub target_companies: Vec<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default = "default_max_emails")]
    pub max_emails: u32,
}

impl SearchProfile {
    /// Checks the two hard constraints the core depends on: a non-empty job
    /// title and a result ceiling in `1..=MAX_EMAILS_CEILING`.
    pub fn validate(&self) -> Result<(), String> {
        if self.job_title.trim().is_empty() {
            return Err("job_title cannot be empty".to_string());
        }
        if self.max_emails == 0 || self.max_emails > MAX_EMAILS_CEILING {
            return Err(format!(
                "max_emails must be between 1 and {MAX_EMAILS_CEILING}"
            ));
        }
        Ok(())
    }

    /// Whether any requested company type is startup-like.
    /// Gates the startup-ecosystem source.
    pub fn wants_startups(&self) -> bool {
        self.company_types.iter().any(|ct| {
            let ct = ct.to_lowercase();
            ct.contains("startup") || ct.contains("start-up")
        })
    }

    /// Whether the profile asks to be urgent about the search.
    pub fn is_urgent(&self) -> bool {
        self.urgency
            .as_deref()
            .map(|u| u.eq_ignore_ascii_case("urgent"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(title: &str) -> SearchProfile {
        serde_json::from_str(&format!(r#"{{"job_title": "{title}"}}"#)).unwrap()
    }

    #[test]
    fn test_defaults_applied_on_minimal_body() {
        let profile = minimal("Backend Engineer");
        assert_eq!(profile.max_emails, DEFAULT_MAX_EMAILS);
        assert!(profile.remote_ok);
        assert!(profile.locations.is_empty());
        assert!(profile.target_companies.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_empty_job_title_rejected() {
        assert!(minimal("  ").validate().is_err());
    }

    #[test]
    fn test_max_emails_bounds_enforced() {
        let mut profile = minimal("Backend Engineer");
        profile.max_emails = 0;
        assert!(profile.validate().is_err());
        profile.max_emails = MAX_EMAILS_CEILING + 1;
        assert!(profile.validate().is_err());
        profile.max_emails = MAX_EMAILS_CEILING;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_wants_startups_matches_variants() {
        let mut profile = minimal("Backend Engineer");
        assert!(!profile.wants_startups());
        profile.company_types = vec!["MNC".to_string()];
        assert!(!profile.wants_startups());
        profile.company_types = vec!["Start-up".to_string()];
        assert!(profile.wants_startups());
        profile.company_types = vec!["Early Startup".to_string()];
        assert!(profile.wants_startups());
    }

    #[test]
    fn test_is_urgent_case_insensitive() {
        let mut profile = minimal("Backend Engineer");
        assert!(!profile.is_urgent());
        profile.urgency = Some("Urgent".to_string());
        assert!(profile.is_urgent());
        profile.urgency = Some("normal".to_string());
        assert!(!profile.is_urgent());
    }
}
