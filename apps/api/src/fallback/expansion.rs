use super::{keyword_matches, tokenize};

/// Next-step titles keyed by a keyword found in the node label.
const EXPANSIONS: &[(&str, &[&str])] = &[
    ("developer", &["Senior Developer", "Tech Lead", "Software Architect", "Engineering Manager"]),
    ("engineer", &["Senior Engineer", "Staff Engineer", "Engineering Manager", "Principal Engineer"]),
    ("data", &["Data Engineer", "Data Scientist", "Analytics Manager", "Machine Learning Engineer"]),
    ("analyst", &["Senior Analyst", "Analytics Lead", "Consultant", "Strategy Manager"]),
    ("designer", &["Senior Designer", "Design Lead", "Creative Director", "Design Manager"]),
    ("nurse", &["Charge Nurse", "Nurse Practitioner", "Clinical Nurse Specialist", "Nurse Manager"]),
    ("teacher", &["Lead Teacher", "Curriculum Coordinator", "Vice Principal", "Education Consultant"]),
    ("manager", &["Senior Manager", "Director", "Vice President", "General Manager"]),
    ("writer", &["Senior Writer", "Editor", "Content Strategist", "Communications Director"]),
    ("sales", &["Account Executive", "Sales Manager", "Business Development Lead", "Sales Director"]),
];

/// Child labels for a node when the model cannot expand it.
pub fn fallback_expansion(label: &str) -> Vec<String> {
    let text = label.to_lowercase();
    let tokens = tokenize(&text);

    EXPANSIONS
        .iter()
        .find(|(kw, _)| keyword_matches(&text, &tokens, kw))
        .map(|(_, children)| children.iter().map(|c| c.to_string()).collect())
        .unwrap_or_else(|| generic_expansion(label))
}

fn generic_expansion(label: &str) -> Vec<String> {
    let label = label.trim();
    if label.is_empty() {
        return vec![
            "Entry-Level Role".to_string(),
            "Specialist".to_string(),
            "Team Lead".to_string(),
            "Consultant".to_string(),
        ];
    }
    vec![
        format!("Senior {label}"),
        format!("{label} Specialist"),
        format!("{label} Team Lead"),
        format!("{label} Consultant"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_match() {
        let children = fallback_expansion("Registered Nurse");
        assert_eq!(children[0], "Charge Nurse");
        assert_eq!(children.len(), 4);
    }

    #[test]
    fn test_first_table_entry_wins() {
        // "developer" is listed before "engineer"
        let children = fallback_expansion("Developer Experience Engineer");
        assert_eq!(children[0], "Senior Developer");
    }

    #[test]
    fn test_generic_expansion_uses_label() {
        let children = fallback_expansion("Chef");
        assert_eq!(
            children,
            vec!["Senior Chef", "Chef Specialist", "Chef Team Lead", "Chef Consultant"]
        );
    }

    #[test]
    fn test_blank_label_gets_generic_titles() {
        let children = fallback_expansion("  ");
        assert_eq!(children.len(), 4);
        assert!(children.iter().all(|c| !c.starts_with(' ')));
    }
}
