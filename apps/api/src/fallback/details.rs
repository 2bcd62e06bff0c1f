use crate::models::career::CareerDetails;

use super::{keyword_matches, tokenize};

struct DetailsEntry {
    keywords: &'static [&'static str],
    title: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
    education: &'static str,
    salary_range: &'static str,
    outlook: &'static str,
    related: &'static [&'static str],
}

const DETAILS: &[DetailsEntry] = &[
    DetailsEntry {
        keywords: &["software", "developer", "programmer", "web developer"],
        title: "Software Developer",
        description: "Designs, builds, and maintains applications and services.",
        skills: &["Programming", "Problem solving", "Version control", "Testing"],
        education: "Bachelor's degree in computer science or equivalent experience",
        salary_range: "$70,000 - $150,000",
        outlook: "Much faster than average growth",
        related: &["DevOps Engineer", "QA Engineer", "Software Architect"],
    },
    DetailsEntry {
        keywords: &["data", "analyst", "scientist", "analytics"],
        title: "Data Analyst",
        description: "Turns raw data into reports and insights that guide decisions.",
        skills: &["SQL", "Statistics", "Spreadsheets", "Data visualization"],
        education: "Bachelor's degree in statistics, mathematics, or a related field",
        salary_range: "$60,000 - $110,000",
        outlook: "Faster than average growth",
        related: &["Data Scientist", "Business Analyst", "Data Engineer"],
    },
    DetailsEntry {
        keywords: &["nurse", "nursing"],
        title: "Registered Nurse",
        description: "Provides and coordinates patient care in clinical settings.",
        skills: &["Patient care", "Communication", "Critical thinking", "Clinical procedures"],
        education: "Nursing diploma, associate, or bachelor's degree plus licensure",
        salary_range: "$60,000 - $120,000",
        outlook: "Faster than average growth",
        related: &["Nurse Practitioner", "Medical Assistant", "Midwife"],
    },
    DetailsEntry {
        keywords: &["designer", "design", "ux", "graphic"],
        title: "Designer",
        description: "Creates visual and interaction designs for products and brands.",
        skills: &["Visual design", "Prototyping", "User research", "Design tools"],
        education: "Degree in design or a strong portfolio",
        salary_range: "$50,000 - $120,000",
        outlook: "Average growth",
        related: &["Art Director", "Product Designer", "Illustrator"],
    },
    DetailsEntry {
        keywords: &["teacher", "teaching", "educator", "tutor"],
        title: "Teacher",
        description: "Plans lessons and guides students through a curriculum.",
        skills: &["Lesson planning", "Communication", "Classroom management", "Patience"],
        education: "Bachelor's degree plus teaching certification",
        salary_range: "$45,000 - $85,000",
        outlook: "Average growth",
        related: &["School Counselor", "Instructional Designer", "Principal"],
    },
    DetailsEntry {
        keywords: &["marketing", "brand", "advertising"],
        title: "Marketing Specialist",
        description: "Plans and runs campaigns that grow awareness and revenue.",
        skills: &["Copywriting", "Analytics", "Campaign management", "Social media"],
        education: "Bachelor's degree in marketing, communications, or business",
        salary_range: "$50,000 - $100,000",
        outlook: "Faster than average growth",
        related: &["Marketing Manager", "Content Strategist", "Brand Manager"],
    },
    DetailsEntry {
        keywords: &["engineer", "engineering", "mechanical", "civil", "electrical"],
        title: "Engineer",
        description: "Applies science and mathematics to design and improve systems.",
        skills: &["Mathematics", "CAD", "Project management", "Technical writing"],
        education: "Bachelor's degree in an engineering discipline",
        salary_range: "$70,000 - $130,000",
        outlook: "Average growth",
        related: &["Project Engineer", "Engineering Manager", "Technical Consultant"],
    },
];

/// Detail sheet for a career title from the static table, or a generic one.
///
/// Table matches keep the requested title so the client shows what was asked for.
pub fn fallback_details(career: &str) -> CareerDetails {
    let career = career.trim();
    let text = career.to_lowercase();
    let tokens = tokenize(&text);

    let entry = DETAILS
        .iter()
        .find(|e| e.keywords.iter().any(|kw| keyword_matches(&text, &tokens, kw)));

    match entry {
        Some(e) => CareerDetails {
            title: if career.is_empty() { e.title.to_string() } else { career.to_string() },
            description: e.description.to_string(),
            skills: to_strings(e.skills),
            education: e.education.to_string(),
            salary_range: e.salary_range.to_string(),
            outlook: e.outlook.to_string(),
            related_careers: to_strings(e.related),
        },
        None => CareerDetails {
            title: career.to_string(),
            description: format!(
                "A {career} applies specialised knowledge to deliver results in their field."
            ),
            skills: to_strings(&["Communication", "Problem solving", "Teamwork", "Adaptability"]),
            education: "Varies by employer; a relevant degree or certification helps".to_string(),
            salary_range: "Varies by location and experience".to_string(),
            outlook: "Information unavailable".to_string(),
            related_careers: Vec::new(),
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
