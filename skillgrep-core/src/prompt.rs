//! Evaluation-prompt assembly.
//!
//! The prompt is a template with named, ordered sections so the output is
//! byte-identical for identical inputs: header, Role Context (inferred from
//! the title), Criteria grouped by kind in a fixed order, and a fixed
//! Scoring rubric.

use crate::infer;
use crate::types::{Criterion, CriterionKind};

/// Criteria groups rendered into the prompt, in section order.
///
/// Education, Availability, and Custom criteria are collected by the
/// extractor but not rendered here; the mock scorer never sees them.
const GROUPS: [(CriterionKind, &str); 5] = [
    (CriterionKind::Experience, "Experience"),
    (CriterionKind::Skills, "Technical Skills"),
    (CriterionKind::Location, "Location"),
    (CriterionKind::Background, "Background"),
    (CriterionKind::Leadership, "Leadership"),
];

const SCORING: &str = "## Scoring\n\
                       • 90-100: Excellent match\n\
                       • 75-89: Strong match\n\
                       • 60-74: Potential match\n\
                       • Below 60: Weak match";

/// Assemble the candidate-evaluation prompt for a job title and the
/// accumulated criteria.
///
/// Deterministic: no timestamps, ids, or randomness enter the output, so
/// two calls with identical ordered criteria produce byte-identical text.
pub fn assemble(title: &str, criteria: &[Criterion]) -> String {
    let mut out = String::new();

    out.push_str("Evaluate candidates for: ");
    out.push_str(title);
    out.push_str("\n\n");

    let context = infer::role_context(title);
    if !context.is_empty() {
        out.push_str("## Role Context\n");
        for line in &context {
            out.push_str("• ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    let has_rendered = criteria
        .iter()
        .any(|c| GROUPS.iter().any(|(kind, _)| *kind == c.kind));
    if has_rendered {
        out.push_str("## Criteria\n\n");
        for (kind, label) in GROUPS {
            let values: Vec<&str> = criteria
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.value.as_str())
                .collect();
            if values.is_empty() {
                continue;
            }
            out.push_str(label);
            out.push_str(":\n");
            for value in values {
                out.push_str("• ");
                out.push_str(value);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out.push_str(SCORING);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Criterion;

    #[test]
    fn test_empty_criteria_has_no_criteria_section() {
        let text = assemble("Senior Backend Engineer", &[]);

        assert!(text.starts_with("Evaluate candidates for: Senior Backend Engineer\n\n"));
        assert!(text.contains("## Role Context\n"));
        assert!(!text.contains("## Criteria"));
        assert!(text.contains("## Scoring\n"));
        assert!(text.ends_with("• Below 60: Weak match"));

        // Three inferred context lines, four scoring bullets
        let context_bullets = text
            .lines()
            .skip_while(|l| *l != "## Role Context")
            .skip(1)
            .take_while(|l| l.starts_with("• "))
            .count();
        assert_eq!(context_bullets, 3);
        let scoring_bullets = text
            .lines()
            .skip_while(|l| *l != "## Scoring")
            .skip(1)
            .count();
        assert_eq!(scoring_bullets, 4);
    }

    #[test]
    fn test_groups_render_in_fixed_order() {
        let criteria = vec![
            Criterion::new(CriterionKind::Leadership, "Team leadership experience"),
            Criterion::new(CriterionKind::Skills, "Python"),
            Criterion::new(CriterionKind::Experience, "5+ years of experience"),
        ];
        let text = assemble("Recruiter", &criteria);

        let exp = text.find("Experience:").unwrap();
        let skills = text.find("Technical Skills:").unwrap();
        let lead = text.find("Leadership:").unwrap();
        assert!(exp < skills && skills < lead);
        assert!(!text.contains("Location:"));
        assert!(!text.contains("Background:"));
        // No context rules match "Recruiter"
        assert!(!text.contains("## Role Context"));
    }

    #[test]
    fn test_custom_criteria_are_not_rendered() {
        let criteria = vec![Criterion::new(CriterionKind::Custom, "great communicator")];
        let text = assemble("Recruiter", &criteria);
        assert!(!text.contains("great communicator"));
        assert!(!text.contains("## Criteria"));
    }

    #[test]
    fn test_byte_identical_output() {
        let criteria = vec![
            Criterion::new(CriterionKind::Experience, "5+ years of experience"),
            Criterion::new(CriterionKind::Skills, "Python"),
            Criterion::new(CriterionKind::Location, "Open to remote work"),
        ];
        let a = assemble("Senior Backend Engineer", &criteria);
        let b = assemble("Senior Backend Engineer", &criteria);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_template_shape() {
        let criteria = vec![
            Criterion::new(CriterionKind::Experience, "5+ years of experience"),
            Criterion::new(CriterionKind::Skills, "Python"),
        ];
        let text = assemble("Backend Engineer", &criteria);
        let expected = "Evaluate candidates for: Backend Engineer\n\
                        \n\
                        ## Role Context\n\
                        • Backend development experience\n\
                        • Software engineering background\n\
                        \n\
                        ## Criteria\n\
                        \n\
                        Experience:\n\
                        • 5+ years of experience\n\
                        Technical Skills:\n\
                        • Python\n\
                        \n\
                        ## Scoring\n\
                        • 90-100: Excellent match\n\
                        • 75-89: Strong match\n\
                        • 60-74: Potential match\n\
                        • Below 60: Weak match";
        assert_eq!(text, expected);
    }
}
