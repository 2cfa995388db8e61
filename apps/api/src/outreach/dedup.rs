//! Deduplication filter: subtracts the contact history from the merged
//! candidate set and applies the caller's ceiling.
//!
//! Truncation happens exactly once, here, after the subtraction: truncating
//! the union first could return fewer than the ceiling while more novel
//! addresses exist. The three counts are computed before truncation, so
//! `total_found == new_count + duplicates_skipped` holds exactly.
//!
//! Concurrent identical requests are not coalesced: the log is only written
//! after delivery, so two simultaneous runs for the same profile may both
//! report the same addresses as novel.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::history::ContactHistory;

/// Which slice of the contact history suppresses candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupScope {
    Global,
    JobTitle,
    RecentDays(u32),
}

impl Default for DedupScope {
    fn default() -> Self {
        DedupScope::Global
    }
}

/// What to do when the history store cannot be read. `Propagate` fails the
/// request; `AssumeEmpty` proceeds as if nothing was ever contacted and
/// accepts the risk of duplicate contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryErrorPolicy {
    Propagate,
    AssumeEmpty,
}

impl HistoryErrorPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "propagate" => Some(Self::Propagate),
            "assume_empty" => Some(Self::AssumeEmpty),
            _ => None,
        }
    }
}

/// The filter's output: the bounded novel list plus pre-truncation counts.
#[derive(Debug, Clone, Serialize)]
pub struct DedupOutcome {
    /// Novel addresses, lexicographic, at most the requested ceiling.
    pub novel: Vec<String>,
    /// Union size before any filtering.
    pub total_found: usize,
    /// Candidates suppressed by the contact history.
    pub duplicates_skipped: usize,
    /// Novel candidates before truncation; `total_found - duplicates_skipped`.
    pub new_count: usize,
}

pub async fn filter_novel(
    history: &dyn ContactHistory,
    scope: &DedupScope,
    job_title: &str,
    candidates: BTreeSet<String>,
    ceiling: usize,
    policy: HistoryErrorPolicy,
) -> Result<DedupOutcome, AppError> {
    let contacted = match scope {
        DedupScope::Global => history.all_contacted().await,
        DedupScope::JobTitle => history.contacted_for_job(job_title).await,
        DedupScope::RecentDays(days) => history.contacted_within_days(*days).await,
    };

    let contacted = match contacted {
        Ok(set) => set,
        Err(e) if policy == HistoryErrorPolicy::AssumeEmpty => {
            warn!("contact history unreadable, proceeding without dedup: {e:#}");
            Default::default()
        }
        Err(e) => {
            return Err(AppError::HistoryUnavailable(format!("{e:#}")));
        }
    };

    let total_found = candidates.len();
    let novel_all: Vec<String> = candidates
        .into_iter()
        .filter(|addr| !contacted.contains(addr))
        .collect();
    let new_count = novel_all.len();
    let duplicates_skipped = total_found - new_count;

    Ok(DedupOutcome {
        novel: novel_all.into_iter().take(ceiling).collect(),
        total_found,
        duplicates_skipped,
        new_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::collections::HashSet;

    /// In-memory history; each scope returns a distinct set so the dispatch
    /// is observable from the outside.
    struct StubHistory {
        global: HashSet<String>,
        per_job: HashSet<String>,
        recent: HashSet<String>,
    }

    impl StubHistory {
        fn with_global(addresses: &[&str]) -> Self {
            Self {
                global: addresses.iter().map(|a| a.to_string()).collect(),
                per_job: HashSet::new(),
                recent: HashSet::new(),
            }
        }
    }

    #[async_trait]
    impl ContactHistory for StubHistory {
        async fn all_contacted(&self) -> anyhow::Result<HashSet<String>> {
            Ok(self.global.clone())
        }
        async fn contacted_for_job(&self, _job_title: &str) -> anyhow::Result<HashSet<String>> {
            Ok(self.per_job.clone())
        }
        async fn contacted_within_days(&self, _days: u32) -> anyhow::Result<HashSet<String>> {
            Ok(self.recent.clone())
        }
    }

    struct BrokenHistory;

    #[async_trait]
    impl ContactHistory for BrokenHistory {
        async fn all_contacted(&self) -> anyhow::Result<HashSet<String>> {
            Err(anyhow!("connection refused"))
        }
        async fn contacted_for_job(&self, _job_title: &str) -> anyhow::Result<HashSet<String>> {
            Err(anyhow!("connection refused"))
        }
        async fn contacted_within_days(&self, _days: u32) -> anyhow::Result<HashSet<String>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn candidates(addresses: &[&str]) -> BTreeSet<String> {
        addresses.iter().map(|a| a.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_history_passes_everything_through() {
        let history = StubHistory::with_global(&[]);
        let outcome = filter_novel(
            &history,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com", "b@x.com", "c@x.com"]),
            5,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert_eq!(outcome.novel, vec!["a@x.com", "b@x.com", "c@x.com"]);
        assert_eq!(outcome.total_found, 3);
        assert_eq!(outcome.duplicates_skipped, 0);
        assert_eq!(outcome.new_count, outcome.novel.len());
    }

    #[tokio::test]
    async fn test_contacted_addresses_never_returned() {
        let history = StubHistory::with_global(&["b@x.com"]);
        let outcome = filter_novel(
            &history,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com", "b@x.com", "c@x.com"]),
            5,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert!(!outcome.novel.contains(&"b@x.com".to_string()));
        assert_eq!(outcome.duplicates_skipped, 1);
        assert_eq!(outcome.new_count, 2);
    }

    #[tokio::test]
    async fn test_count_invariant_holds_exactly() {
        let history = StubHistory::with_global(&["a@x.com", "c@x.com"]);
        let outcome = filter_novel(
            &history,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com", "b@x.com", "c@x.com", "d@x.com"]),
            1,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert_eq!(
            outcome.total_found,
            outcome.new_count + outcome.duplicates_skipped
        );
        assert_eq!(outcome.total_found, 4);
        assert_eq!(outcome.new_count, 2);
        assert_eq!(outcome.novel.len(), 1);
    }

    #[tokio::test]
    async fn test_truncation_after_dedup_does_not_starve() {
        // Ceiling 2, three candidates, one already contacted: the two novel
        // addresses must both be returned even though candidates > ceiling.
        let history = StubHistory::with_global(&["a@x.com"]);
        let outcome = filter_novel(
            &history,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com", "b@x.com", "c@x.com"]),
            2,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert_eq!(outcome.novel, vec!["b@x.com", "c@x.com"]);
    }

    #[tokio::test]
    async fn test_ceiling_respected() {
        let history = StubHistory::with_global(&[]);
        let outcome = filter_novel(
            &history,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com", "b@x.com", "c@x.com"]),
            2,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert_eq!(outcome.novel.len(), 2);
        assert_eq!(outcome.new_count, 3);
    }

    #[tokio::test]
    async fn test_scope_selects_matching_query() {
        let history = StubHistory {
            global: ["a@x.com".to_string()].into_iter().collect(),
            per_job: ["b@x.com".to_string()].into_iter().collect(),
            recent: ["c@x.com".to_string()].into_iter().collect(),
        };
        let all = candidates(&["a@x.com", "b@x.com", "c@x.com"]);

        let global = filter_novel(
            &history,
            &DedupScope::Global,
            "Backend Engineer",
            all.clone(),
            5,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();
        assert_eq!(global.novel, vec!["b@x.com", "c@x.com"]);

        let per_job = filter_novel(
            &history,
            &DedupScope::JobTitle,
            "Backend Engineer",
            all.clone(),
            5,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();
        assert_eq!(per_job.novel, vec!["a@x.com", "c@x.com"]);

        let recent = filter_novel(
            &history,
            &DedupScope::RecentDays(30),
            "Backend Engineer",
            all,
            5,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();
        assert_eq!(recent.novel, vec!["a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates_by_default() {
        let outcome = filter_novel(
            &BrokenHistory,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com"]),
            5,
            HistoryErrorPolicy::Propagate,
        )
        .await;

        assert!(matches!(outcome, Err(AppError::HistoryUnavailable(_))));
    }

    #[tokio::test]
    async fn test_store_failure_degrades_when_configured() {
        let outcome = filter_novel(
            &BrokenHistory,
            &DedupScope::Global,
            "Backend Engineer",
            candidates(&["a@x.com"]),
            5,
            HistoryErrorPolicy::AssumeEmpty,
        )
        .await
        .unwrap();

        assert_eq!(outcome.novel, vec!["a@x.com"]);
        assert_eq!(outcome.duplicates_skipped, 0);
    }

    #[tokio::test]
    async fn test_fresh_store_fills_up_to_ceiling() {
        use crate::models::profile::SearchProfile;
        use crate::sourcing::{aggregate, default_sources};

        let profile: SearchProfile =
            serde_json::from_str(r#"{"job_title": "Backend Engineer", "max_emails": 5}"#).unwrap();
        let candidates = aggregate(&default_sources(), &profile);
        let outcome = filter_novel(
            &StubHistory::with_global(&[]),
            &DedupScope::Global,
            &profile.job_title,
            candidates,
            profile.max_emails as usize,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert_eq!(outcome.novel.len(), 5);
        assert_eq!(outcome.duplicates_skipped, 0);
        assert_eq!(outcome.new_count, outcome.total_found);
    }

    #[tokio::test]
    async fn test_second_run_excludes_first_runs_addresses() {
        use crate::models::profile::SearchProfile;
        use crate::sourcing::{aggregate, default_sources};

        let profile: SearchProfile =
            serde_json::from_str(r#"{"job_title": "Backend Engineer"}"#).unwrap();
        let sources = default_sources();

        let first = filter_novel(
            &StubHistory::with_global(&[]),
            &DedupScope::Global,
            &profile.job_title,
            aggregate(&sources, &profile),
            profile.max_emails as usize,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();
        assert!(!first.novel.is_empty());

        // Everything delivered in the first run is now in the history.
        let history = StubHistory {
            global: first.novel.iter().cloned().collect(),
            per_job: HashSet::new(),
            recent: HashSet::new(),
        };
        let second = filter_novel(
            &history,
            &DedupScope::Global,
            &profile.job_title,
            aggregate(&sources, &profile),
            profile.max_emails as usize,
            HistoryErrorPolicy::Propagate,
        )
        .await
        .unwrap();

        assert!(second.new_count < first.new_count);
        assert!(first.novel.iter().all(|a| !second.novel.contains(a)));
        assert_eq!(
            second.total_found,
            second.new_count + second.duplicates_skipped
        );
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            HistoryErrorPolicy::parse("propagate"),
            Some(HistoryErrorPolicy::Propagate)
        );
        assert_eq!(
            HistoryErrorPolicy::parse(" ASSUME_EMPTY "),
            Some(HistoryErrorPolicy::AssumeEmpty)
        );
        assert_eq!(HistoryErrorPolicy::parse("retry"), None);
    }

    #[test]
    fn test_scope_deserializes_from_request_json() {
        let global: DedupScope = serde_json::from_str(r#""global""#).unwrap();
        assert_eq!(global, DedupScope::Global);
        let recent: DedupScope = serde_json::from_str(r#"{"recent_days": 30}"#).unwrap();
        assert_eq!(recent, DedupScope::RecentDays(30));
    }
}
