//! Static candidate store and fit-band filtering.
//!
//! Seed data ships inside the binary as JSON and is parsed once at startup.
//! Candidates are never created or mutated; jobs are handed out by value so
//! the UI can apply sync-mode edits to its own copy. "Run" and "Test
//! sample" never touch the data either, they only select a subset.

use crate::error::Result;
use crate::types::{Candidate, Job, JobStatus, ScoreFilter};

const JOBS_JSON: &str = include_str!("../seed/jobs.json");
const CANDIDATES_JSON: &str = include_str!("../seed/candidates.json");

/// Chat-screen quick suggestions shown under the opening message.
pub const QUICK_SUGGESTIONS: [&str; 5] = [
    "5+ years of experience",
    "Strong Python and Kubernetes",
    "FAANG background preferred",
    "Open to remote candidates",
    "Team leadership experience",
];

/// The fixed seed data: job requisitions and pre-scored candidates.
#[derive(Debug, Clone)]
pub struct Store {
    jobs: Vec<Job>,
    candidates: Vec<Candidate>,
}

impl Store {
    /// Parse the embedded seed data.
    pub fn load() -> Result<Self> {
        let jobs: Vec<Job> = serde_json::from_str(JOBS_JSON)?;
        let candidates: Vec<Candidate> = serde_json::from_str(CANDIDATES_JSON)?;
        tracing::debug!(
            jobs = jobs.len(),
            candidates = candidates.len(),
            "seed data loaded"
        );
        Ok(Self { jobs, candidates })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// Stable descending sort by score; ties keep their original relative order.
pub fn sort_by_score_desc(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}

/// Keep only candidates whose score falls in the filter's band, preserving
/// input order. `All` returns the input unchanged.
pub fn filter_by_band(candidates: &[Candidate], filter: ScoreFilter) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| filter.matches(c.score))
        .cloned()
        .collect()
}

/// The "test on a sample" subset: first 5 by descending score.
pub fn sample(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut sorted = sort_by_score_desc(candidates);
    sorted.truncate(5);
    sorted
}

/// Per-band counts for the results-screen stat cards and filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandCounts {
    pub total: usize,
    pub excellent: usize,
    pub strong: usize,
    pub potential: usize,
    pub weak: usize,
}

pub fn band_counts(candidates: &[Candidate]) -> BandCounts {
    let mut counts = BandCounts {
        total: candidates.len(),
        ..Default::default()
    };
    for c in candidates {
        if ScoreFilter::Excellent.matches(c.score) {
            counts.excellent += 1;
        } else if ScoreFilter::Strong.matches(c.score) {
            counts.strong += 1;
        } else if ScoreFilter::Potential.matches(c.score) {
            counts.potential += 1;
        } else {
            counts.weak += 1;
        }
    }
    counts
}

/// Jobs-screen search: case-insensitive substring over title and req id,
/// optionally narrowed to a status.
pub fn search_jobs<'a>(jobs: &'a [Job], query: &str, status: Option<JobStatus>) -> Vec<&'a Job> {
    let query = query.to_lowercase();
    jobs.iter()
        .filter(|job| {
            let matches_query = query.is_empty()
                || job.title.to_lowercase().contains(&query)
                || job.req_id.to_lowercase().contains(&query);
            let matches_status = status.map_or(true, |s| job.status == s);
            matches_query && matches_status
        })
        .collect()
}
