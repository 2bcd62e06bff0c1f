use crate::models::career::RoadmapStep;

/// Generic five-step transition plan between two roles.
pub fn fallback_roadmap(current_role: &str, target_role: &str) -> Vec<RoadmapStep> {
    let current = current_role.trim();
    let target = target_role.trim();
    let from = if current.is_empty() { "your current position" } else { current };

    vec![
        step(
            "Assess the gap",
            format!("Compare the skills you use as {from} with job postings for {target} roles."),
            "2 weeks",
        ),
        step(
            "Build core skills",
            format!("Take courses or certifications covering the main requirements of a {target}."),
            "3-6 months",
        ),
        step(
            "Gain practical experience",
            format!("Take on projects, volunteer work, or internal tasks that resemble {target} work."),
            "3-6 months",
        ),
        step(
            "Grow your network",
            format!("Connect with people working as {target} and ask for informational interviews."),
            "Ongoing",
        ),
        step(
            "Apply and interview",
            format!("Tailor your resume toward {target} positions and start applying."),
            "1-3 months",
        ),
    ]
}

fn step(title: &str, description: String, duration: &str) -> RoadmapStep {
    RoadmapStep {
        title: title.to_string(),
        description,
        duration: duration.to_string(),
    }
}
