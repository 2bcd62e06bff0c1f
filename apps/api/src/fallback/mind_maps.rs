use crate::models::mind_map::{MindMap, MindMapEdge, MindMapNode};

use super::Category;

/// Root title plus (role, next steps) branches for one category.
struct CareerPaths {
    root: &'static str,
    branches: &'static [(&'static str, &'static [&'static str])],
}

fn paths_for(category: Category) -> CareerPaths {
    match category {
        Category::Technology => CareerPaths {
            root: "Technology Careers",
            branches: &[
                ("Software Developer", &["Senior Developer", "Software Architect"]),
                ("Data Analyst", &["Data Scientist", "Machine Learning Engineer"]),
                ("IT Support Specialist", &["Systems Administrator", "Cloud Engineer"]),
                ("Cybersecurity Analyst", &["Security Engineer", "Security Architect"]),
            ],
        },
        Category::Healthcare => CareerPaths {
            root: "Healthcare Careers",
            branches: &[
                ("Registered Nurse", &["Nurse Practitioner", "Nurse Manager"]),
                ("Medical Assistant", &["Physician Assistant"]),
                ("Pharmacy Technician", &["Pharmacist"]),
                ("Physical Therapy Aide", &["Physical Therapist", "Clinic Director"]),
            ],
        },
        Category::Business => CareerPaths {
            root: "Business Careers",
            branches: &[
                ("Business Analyst", &["Product Manager", "Operations Director"]),
                ("Marketing Coordinator", &["Marketing Manager", "Chief Marketing Officer"]),
                ("Financial Analyst", &["Finance Manager", "Chief Financial Officer"]),
                ("Sales Representative", &["Account Executive", "Sales Director"]),
            ],
        },
        Category::Creative => CareerPaths {
            root: "Creative Careers",
            branches: &[
                ("Graphic Designer", &["Senior Designer", "Art Director"]),
                ("UX Designer", &["Product Designer", "Design Lead"]),
                ("Content Writer", &["Editor", "Content Strategist"]),
                ("Video Editor", &["Producer", "Creative Director"]),
            ],
        },
        Category::Education => CareerPaths {
            root: "Education Careers",
            branches: &[
                ("Teaching Assistant", &["Classroom Teacher", "Head of Department"]),
                ("Tutor", &["Learning Specialist"]),
                ("Corporate Trainer", &["Learning and Development Manager"]),
                ("Instructional Designer", &["Curriculum Director"]),
            ],
        },
        Category::Engineering => CareerPaths {
            root: "Engineering Careers",
            branches: &[
                ("Mechanical Engineer", &["Senior Mechanical Engineer", "Engineering Manager"]),
                ("Civil Engineer", &["Project Engineer", "Principal Engineer"]),
                ("Electrical Engineer", &["Controls Engineer", "Chief Engineer"]),
                ("Manufacturing Technician", &["Process Engineer", "Plant Manager"]),
            ],
        },
        Category::General => CareerPaths {
            root: "Explore Careers",
            branches: &[
                ("Project Coordinator", &["Project Manager"]),
                ("Customer Success Associate", &["Customer Success Manager"]),
                ("Administrative Assistant", &["Office Manager", "Operations Manager"]),
                ("Research Assistant", &["Research Analyst"]),
            ],
        },
    }
}

/// Hard-coded career-path mind map for a category.
///
/// Node ids are stable (`root`, `1`, `1-1`, ...) so clients can diff saved maps.
pub fn fallback_mind_map(category: Category) -> MindMap {
    let paths = paths_for(category);
    let mut map = MindMap::default();
    map.nodes.push(MindMapNode::new("root", paths.root));

    for (i, (role, next_steps)) in paths.branches.iter().enumerate() {
        let role_id = (i + 1).to_string();
        map.nodes.push(MindMapNode::new(role_id.clone(), *role));
        map.edges.push(MindMapEdge::new("root", role_id.clone()));

        for (j, step) in next_steps.iter().enumerate() {
            let step_id = format!("{role_id}-{}", j + 1);
            map.nodes.push(MindMapNode::new(step_id.clone(), *step));
            map.edges.push(MindMapEdge::new(role_id.clone(), step_id));
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_a_connected_map() {
        for category in Category::ALL {
            let map = fallback_mind_map(category);
            assert!(map.nodes.len() > 4, "{category:?} map too small");
            assert_eq!(map.edges.len(), map.nodes.len() - 1, "{category:?} is not a tree");

            let ids: HashSet<_> = map.nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids.len(), map.nodes.len(), "{category:?} has duplicate ids");
            for edge in &map.edges {
                assert!(ids.contains(edge.source.as_str()));
                assert!(ids.contains(edge.target.as_str()));
            }
        }
    }

    #[test]
    fn test_root_label_names_the_category() {
        let map = fallback_mind_map(Category::Healthcare);
        assert_eq!(map.root_label(), Some("Healthcare Careers"));
        assert_eq!(map.nodes[0].id, "root");
    }

    #[test]
    fn test_branch_ids_are_nested() {
        let map = fallback_mind_map(Category::Technology);
        let senior = map
            .nodes
            .iter()
            .find(|n| n.data.label == "Senior Developer")
            .unwrap();
        assert_eq!(senior.id, "1-1");
        assert!(map.edges.iter().any(|e| e.source == "1" && e.target == "1-1"));
    }
}
