//! Scripted conversation driver.
//!
//! The assistant has no memory beyond the accumulated criteria and the
//! turn count. Its next question comes from a decision table evaluated
//! top to bottom, first match wins; once every tracked criterion kind is
//! covered (or the conversation has gone on long enough) it closes out.

use crate::types::{Criterion, CriterionKind};

const ASK_EXPERIENCE: &str =
    "How many years of experience should the ideal candidate have?";
const ASK_SKILLS: &str =
    "Are there any specific technical skills or technologies they should have?";
const ASK_LOCATION: &str =
    "Any location requirements? On-site in a specific area, or open to remote?";
const ASK_BACKGROUND: &str =
    "What kind of company background fits best? Big tech, startups, or either?";
const ASK_LEADERSHIP: &str =
    "How important is leadership or management experience for this role?";
const CLOSING: &str = "Got it. The generated prompt on the right covers everything so far. \
     You can edit it directly, test it on a sample, or run it across all candidates.";

/// Opening assistant message for a job's chat session.
pub fn greeting(job_title: &str) -> String {
    format!(
        "Let's build the ideal candidate criteria for **{}**.\n\n\
         What experience, skills, or background are you looking for?",
        job_title
    )
}

/// Pick the next scripted question.
///
/// Decision table, first match wins:
/// missing experience (turn < 3), missing skills (< 5), missing location
/// (< 7), missing background (< 9), missing leadership (< 11), otherwise
/// the closing message.
pub fn next_prompt(criteria: &[Criterion], turn_count: u32) -> &'static str {
    let has = |kind: CriterionKind| criteria.iter().any(|c| c.kind == kind);

    if !has(CriterionKind::Experience) && turn_count < 3 {
        ASK_EXPERIENCE
    } else if !has(CriterionKind::Skills) && turn_count < 5 {
        ASK_SKILLS
    } else if !has(CriterionKind::Location) && turn_count < 7 {
        ASK_LOCATION
    } else if !has(CriterionKind::Background) && turn_count < 9 {
        ASK_BACKGROUND
    } else if !has(CriterionKind::Leadership) && turn_count < 11 {
        ASK_LEADERSHIP
    } else {
        CLOSING
    }
}

/// Build the scripted reply to a user turn.
///
/// Lists what was just added (with emphasis markup for the UI), then asks
/// the next question. When extraction found nothing new it skips straight
/// to the question.
pub fn acknowledgement(
    new_criteria: &[Criterion],
    all_criteria: &[Criterion],
    turn_count: u32,
) -> String {
    let question = next_prompt(all_criteria, turn_count);
    if new_criteria.is_empty() {
        return question.to_string();
    }
    let added: Vec<&str> = new_criteria.iter().map(|c| c.value.as_str()).collect();
    format!("Added: **{}**\n\n{}", added.join(", "), question)
}
