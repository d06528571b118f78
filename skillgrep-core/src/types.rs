//! Core domain types for Skill Grep
//!
//! Plain value records, immutable by convention. Criteria and chat messages
//! are append-only sequences; candidates are fully static; jobs are mutated
//! only through the sync-mode edits on the jobs screen.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Criterion** | One atomic requirement extracted from free text, tagged with a kind |
//! | **Fit band** | Strong/Good/Moderate/Review, derived from a score via fixed thresholds |
//! | **Sync mode** | Per-job setting controlling which pipeline stages sync from the mock ATS |

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================
// Criterion
// ============================================

/// Semantic kind of an extracted criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Experience,
    Skills,
    Location,
    Background,
    Leadership,
    Education,
    Availability,
    Custom,
}

impl CriterionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::Experience => "experience",
            CriterionKind::Skills => "skills",
            CriterionKind::Location => "location",
            CriterionKind::Background => "background",
            CriterionKind::Leadership => "leadership",
            CriterionKind::Education => "education",
            CriterionKind::Availability => "availability",
            CriterionKind::Custom => "custom",
        }
    }
}

/// One atomic requirement extracted from a user utterance.
///
/// Appended to an ordered sequence, never mutated, removable by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    /// Opaque unique identifier
    pub id: String,
    pub kind: CriterionKind,
    /// Human-readable description
    pub value: String,
}

impl Criterion {
    /// Create a criterion with a freshly generated id.
    pub fn new(kind: CriterionKind, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            value: value.into(),
        }
    }
}

// ============================================
// Chat messages
// ============================================

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation history (append-only).
///
/// `content` may carry lightweight `**bold**` emphasis markup which the UI
/// renders; it is never interpreted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ============================================
// Jobs
// ============================================

/// Where the role is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Remote => "Remote",
            WorkType::Hybrid => "Hybrid",
            WorkType::Onsite => "Onsite",
        }
    }
}

/// Requisition status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Closed => "Closed",
        }
    }
}

/// Which candidates get synced from the (mock) ATS for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Sync all candidates regardless of stage
    All,
    /// Only sync candidates in selected stages
    Specific,
    /// Skip this job when syncing
    None,
}

/// A job requisition from the mock ATS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub location: String,
    pub work_type: WorkType,
    pub req_id: String,
    pub status: JobStatus,
    pub candidate_count: u32,
    /// Display string ("2 hours ago"), static seed data
    pub last_sync: String,
    pub sync_mode: SyncMode,
    /// Non-empty only when `sync_mode == Specific`
    #[serde(default)]
    pub sync_stages: Vec<Stage>,
}

impl Job {
    /// Change the sync mode, clearing stage selections unless the new mode
    /// is `Specific`.
    pub fn set_sync_mode(&mut self, mode: SyncMode) {
        self.sync_mode = mode;
        if mode != SyncMode::Specific {
            self.sync_stages.clear();
        }
    }

    /// Toggle a stage in the sync selection. No-op unless the mode is
    /// `Specific`, preserving the sync-stages invariant.
    pub fn toggle_stage(&mut self, stage: Stage) {
        if self.sync_mode != SyncMode::Specific {
            return;
        }
        if let Some(pos) = self.sync_stages.iter().position(|s| *s == stage) {
            self.sync_stages.remove(pos);
        } else {
            self.sync_stages.push(stage);
        }
    }
}

// ============================================
// Candidates
// ============================================

/// Pipeline stage vocabulary (fixed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Applied,
    #[serde(rename = "Phone Screen")]
    PhoneScreen,
    Onsite,
    Offer,
    Hired,
    Rejected,
}

impl Stage {
    /// All stages, in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Applied,
        Stage::PhoneScreen,
        Stage::Onsite,
        Stage::Offer,
        Stage::Hired,
        Stage::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::PhoneScreen => "Phone Screen",
            Stage::Onsite => "Onsite",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
        }
    }
}

/// A candidate record with a pre-assigned score and canned explanation.
///
/// Fully static: never created or mutated by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub current_role: String,
    pub stage: Stage,
    pub location: String,
    /// Display string, e.g. "8 years"
    pub experience: String,
    pub skills: Vec<String>,
    pub leadership: String,
    pub background: String,
    /// 0-100
    pub score: u8,
    /// Canned explanation for the score
    pub reason: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Candidate {
    pub fn band(&self) -> FitBand {
        FitBand::for_score(self.score)
    }
}

// ============================================
// Fit bands
// ============================================

/// Score band derived from a candidate's numeric score.
///
/// The single source of truth for score classification: every screen that
/// labels or colors a score goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitBand {
    /// 90-100
    Strong,
    /// 75-89
    Good,
    /// 60-74
    Moderate,
    /// Below 60
    Review,
}

impl FitBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 90 {
            FitBand::Strong
        } else if score >= 75 {
            FitBand::Good
        } else if score >= 60 {
            FitBand::Moderate
        } else {
            FitBand::Review
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitBand::Strong => "Strong",
            FitBand::Good => "Good",
            FitBand::Moderate => "Moderate",
            FitBand::Review => "Review",
        }
    }
}

/// Results-screen filter over score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFilter {
    All,
    /// 90+
    Excellent,
    /// 75-89
    Strong,
    /// 60-74
    Potential,
    /// Below 60
    Weak,
}

impl ScoreFilter {
    /// Filter tabs in display order.
    pub const ALL_FILTERS: [ScoreFilter; 5] = [
        ScoreFilter::All,
        ScoreFilter::Excellent,
        ScoreFilter::Strong,
        ScoreFilter::Potential,
        ScoreFilter::Weak,
    ];

    pub fn matches(&self, score: u8) -> bool {
        match self {
            ScoreFilter::All => true,
            ScoreFilter::Excellent => score >= 90,
            ScoreFilter::Strong => (75..90).contains(&score),
            ScoreFilter::Potential => (60..75).contains(&score),
            ScoreFilter::Weak => score < 60,
        }
    }

    /// Tab label shown in the results screen.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreFilter::All => "All",
            ScoreFilter::Excellent => "Strong Fit",
            ScoreFilter::Strong => "Good Fit",
            ScoreFilter::Potential => "Moderate",
            ScoreFilter::Weak => "Review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(FitBand::for_score(100), FitBand::Strong);
        assert_eq!(FitBand::for_score(90), FitBand::Strong);
        assert_eq!(FitBand::for_score(89), FitBand::Good);
        assert_eq!(FitBand::for_score(75), FitBand::Good);
        assert_eq!(FitBand::for_score(74), FitBand::Moderate);
        assert_eq!(FitBand::for_score(60), FitBand::Moderate);
        assert_eq!(FitBand::for_score(59), FitBand::Review);
        assert_eq!(FitBand::for_score(0), FitBand::Review);
    }

    #[test]
    fn test_score_filter_bands_are_disjoint() {
        for score in 0..=100u8 {
            let hits = [
                ScoreFilter::Excellent,
                ScoreFilter::Strong,
                ScoreFilter::Potential,
                ScoreFilter::Weak,
            ]
            .iter()
            .filter(|f| f.matches(score))
            .count();
            assert_eq!(hits, 1, "score {} matched {} bands", score, hits);
            assert!(ScoreFilter::All.matches(score));
        }
    }

    #[test]
    fn test_sync_mode_clears_stages() {
        let mut job = Job {
            id: "job-1".into(),
            title: "Backend Engineer".into(),
            location: "San Francisco, CA".into(),
            work_type: WorkType::Hybrid,
            req_id: "REQ-1001".into(),
            status: JobStatus::Open,
            candidate_count: 10,
            last_sync: "just now".into(),
            sync_mode: SyncMode::Specific,
            sync_stages: vec![],
        };

        job.toggle_stage(Stage::Onsite);
        job.toggle_stage(Stage::Offer);
        assert_eq!(job.sync_stages.len(), 2);

        // Toggling off removes
        job.toggle_stage(Stage::Onsite);
        assert_eq!(job.sync_stages, vec![Stage::Offer]);

        // Leaving Specific clears the selection
        job.set_sync_mode(SyncMode::All);
        assert!(job.sync_stages.is_empty());

        // Toggles are inert outside Specific mode
        job.toggle_stage(Stage::Hired);
        assert!(job.sync_stages.is_empty());
    }

    #[test]
    fn test_stage_serde_roundtrip() {
        let json = serde_json::to_string(&Stage::PhoneScreen).unwrap();
        assert_eq!(json, "\"Phone Screen\"");
        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stage::PhoneScreen);
    }

    #[test]
    fn test_criterion_ids_are_unique() {
        let a = Criterion::new(CriterionKind::Skills, "Python");
        let b = Criterion::new(CriterionKind::Skills, "Python");
        assert_ne!(a.id, b.id);
    }
}
