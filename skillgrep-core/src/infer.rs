//! Role-context inference from a job title.
//!
//! A fixed, ordered rule table of case-insensitive substring checks. Rules
//! are independent: "Senior Backend Engineer" triggers the seniority,
//! backend, and engineer rules and yields three sentences.

/// (substrings to look for, sentence appended when any of them match)
const RULES: [(&[&str], &str); 7] = [
    (
        &["senior", "staff", "principal"],
        "Senior-level candidate with 5+ years of experience",
    ),
    (&["backend", "back-end"], "Backend development experience"),
    (&["frontend", "front-end"], "Frontend development skills"),
    (
        &["fullstack", "full-stack"],
        "Full-stack development capabilities",
    ),
    (&["engineer"], "Software engineering background"),
    (
        &["manager", "lead"],
        "Team leadership and management experience",
    ),
    (&["data"], "Data engineering or data science background"),
];

/// Infer implicit role-context statements from a job title.
pub fn role_context(title: &str) -> Vec<&'static str> {
    let lower = title.to_lowercase();
    RULES
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, sentence)| *sentence)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_backend_engineer_triggers_three_rules() {
        let context = role_context("Senior Backend Engineer");
        assert_eq!(
            context,
            vec![
                "Senior-level candidate with 5+ years of experience",
                "Backend development experience",
                "Software engineering background",
            ]
        );
    }

    #[test]
    fn test_rule_order_is_fixed() {
        // "Staff Full-Stack Engineer" hits seniority, full-stack, engineer,
        // in table order regardless of word order in the title.
        let context = role_context("Full-Stack Engineer, Staff");
        assert_eq!(
            context,
            vec![
                "Senior-level candidate with 5+ years of experience",
                "Full-stack development capabilities",
                "Software engineering background",
            ]
        );
    }

    #[test]
    fn test_manager_and_data() {
        let context = role_context("Data Engineering Manager");
        assert!(context.contains(&"Team leadership and management experience"));
        assert!(context.contains(&"Data engineering or data science background"));
    }

    #[test]
    fn test_unrecognized_title_yields_nothing() {
        assert!(role_context("Product Designer").is_empty());
    }
}
