//! Criterion extraction from free-text utterances.
//!
//! A pure rule pipeline: the lower-cased utterance is checked against a
//! fixed set of patterns in a fixed order (experience, skills, location,
//! background, leadership), and each rule that fires emits one criterion.
//! Deduplication looks at the criteria accumulated in previous turns plus
//! anything emitted earlier in the same call, so repeating yourself in chat
//! never produces duplicate criteria.
//!
//! There is no NLU here. That is deliberate: the pipeline must be
//! deterministic so the generated prompt is reproducible byte for byte.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Criterion, CriterionKind};

/// Skill keyword vocabulary, in emission order.
///
/// Matching is plain substring, so "javascript" also matches "java"; the
/// vocabulary and its order are part of the compatibility surface and must
/// not be reordered.
pub const SKILL_VOCABULARY: [&str; 14] = [
    "python",
    "java",
    "javascript",
    "typescript",
    "go",
    "rust",
    "kubernetes",
    "docker",
    "aws",
    "gcp",
    "react",
    "node",
    "sql",
    "nosql",
];

/// First match wins: "5 years", "5+ yrs", "12 yr" all count.
fn years_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").expect("valid years pattern"))
}

/// True if any accumulated criterion value mentions `needle`
/// (case-insensitive). `needle` must already be lower-case.
fn mentioned(existing: &[Criterion], emitted: &[Criterion], needle: &str) -> bool {
    existing
        .iter()
        .chain(emitted.iter())
        .any(|c| c.value.to_lowercase().contains(needle))
}

/// Extract new criteria from a free-text utterance.
///
/// Returns only the newly emitted criteria; the caller appends them to its
/// ordered sequence. Criteria already represented in `existing` are not
/// re-emitted. If no rule matched at all and the trimmed input is
/// non-empty, a single `Custom` criterion carries the raw input so nothing
/// the user typed is silently dropped.
pub fn extract(utterance: &str, existing: &[Criterion]) -> Vec<Criterion> {
    let lower = utterance.to_lowercase();
    let mut found: Vec<Criterion> = Vec::new();
    let mut rule_fired = false;

    // Years of experience
    if let Some(caps) = years_pattern().captures(&lower) {
        rule_fired = true;
        let has_years = existing
            .iter()
            .any(|c| c.kind == CriterionKind::Experience && c.value.contains("years"));
        if !has_years {
            found.push(Criterion::new(
                CriterionKind::Experience,
                format!("{}+ years of experience", &caps[1]),
            ));
        }
    }

    // Skills, in vocabulary order
    for keyword in SKILL_VOCABULARY {
        if lower.contains(keyword) {
            rule_fired = true;
            if !mentioned(existing, &found, keyword) {
                found.push(Criterion::new(CriterionKind::Skills, capitalize(keyword)));
            }
        }
    }

    // Location
    if lower.contains("sf") || lower.contains("san francisco") || lower.contains("bay area") {
        rule_fired = true;
        if !mentioned(existing, &found, "francisco") && !mentioned(existing, &found, "bay") {
            found.push(Criterion::new(
                CriterionKind::Location,
                "Based in SF Bay Area",
            ));
        }
    }
    if lower.contains("remote") {
        rule_fired = true;
        if !mentioned(existing, &found, "remote") {
            found.push(Criterion::new(
                CriterionKind::Location,
                "Open to remote work",
            ));
        }
    }

    // Background
    if lower.contains("faang")
        || lower.contains("big tech")
        || lower.contains("google")
        || lower.contains("meta")
        || lower.contains("amazon")
    {
        rule_fired = true;
        if !mentioned(existing, &found, "faang") && !mentioned(existing, &found, "tech") {
            found.push(Criterion::new(
                CriterionKind::Background,
                "FAANG or big tech experience preferred",
            ));
        }
    }
    if lower.contains("startup") {
        rule_fired = true;
        if !mentioned(existing, &found, "startup") {
            found.push(Criterion::new(
                CriterionKind::Background,
                "Startup experience valued",
            ));
        }
    }

    // Leadership ("team" catches phrasings like "led a team")
    if lower.contains("lead")
        || lower.contains("manage")
        || lower.contains("leadership")
        || lower.contains("team")
    {
        rule_fired = true;
        if !mentioned(existing, &found, "leadership") && !mentioned(existing, &found, "lead") {
            found.push(Criterion::new(
                CriterionKind::Leadership,
                "Team leadership experience",
            ));
        }
    }

    // Fallback: keep the raw input as a custom criterion
    let trimmed = utterance.trim();
    if !rule_fired && !trimmed.is_empty() {
        found.push(Criterion::new(CriterionKind::Custom, trimmed));
    }

    tracing::debug!(
        utterance_len = utterance.len(),
        emitted = found.len(),
        "extracted criteria"
    );

    found
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
