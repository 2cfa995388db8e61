//! Job-board pattern synthesis: employer-center addresses at the major
//! boards, with job-title-prefixed and location variants.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::profile::SearchProfile;
use crate::sourcing::address::hyphenate;
use crate::sourcing::provider::{insert_bounded, AddressSource};

const MAX_ADDRESSES: usize = 10;
const MAX_LOCATIONS: usize = 3;

/// Fixed employer-contact addresses per board.
const BOARD_ADDRESSES: &[(&str, &[&str])] = &[
    ("indeed", &["employer-center@indeed.com", "recruiting@indeed.com"]),
    (
        "glassdoor",
        &["employers@glassdoor.com", "recruiting@glassdoor.com"],
    ),
    ("monster", &["employers@monster.com", "recruiting@monster.com"]),
    (
        "ziprecruiter",
        &["employers@ziprecruiter.com", "recruiting@ziprecruiter.com"],
    ),
];

pub struct JobBoardSource;

impl AddressSource for JobBoardSource {
    fn name(&self) -> &'static str {
        "job-boards"
    }

    fn generate(&self, profile: &SearchProfile) -> Result<BTreeSet<String>> {
        let mut out = BTreeSet::new();
        let job = hyphenate(&profile.job_title);

        // Location variants first; the fixed board table alone can fill the
        // whole budget.
        for location in profile.locations.iter().take(MAX_LOCATIONS) {
            let location = hyphenate(location);
            if location.is_empty() {
                continue;
            }
            if !insert_bounded(&mut out, MAX_ADDRESSES, format!("jobs-{location}@jobboards.com"))
                || !insert_bounded(
                    &mut out,
                    MAX_ADDRESSES,
                    format!("recruiting-{location}@careers.com"),
                )
            {
                return Ok(out);
            }
        }

        for (_board, addresses) in BOARD_ADDRESSES {
            for base in *addresses {
                if !insert_bounded(&mut out, MAX_ADDRESSES, (*base).to_string())
                    || !insert_bounded(&mut out, MAX_ADDRESSES, format!("{job}.{base}"))
                {
                    return Ok(out);
                }
            }
        }

        Ok(out)
    }
}
