use crate::models::career::CareerSuggestion;

use super::Category;

fn table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Technology => &[
            ("Software Developer", "Builds on an interest in programming and problem solving"),
            ("Data Analyst", "Uses data skills to answer business questions"),
            ("Cloud Engineer", "Runs the infrastructure modern apps depend on"),
            ("Cybersecurity Analyst", "Protects systems and data from attacks"),
        ],
        Category::Healthcare => &[
            ("Registered Nurse", "Direct patient care with strong job demand"),
            ("Physician Assistant", "Diagnoses and treats patients alongside physicians"),
            ("Physical Therapist", "Helps patients recover movement and strength"),
            ("Health Informatics Specialist", "Combines healthcare with data and technology"),
        ],
        Category::Business => &[
            ("Business Analyst", "Bridges business needs and technical solutions"),
            ("Marketing Manager", "Leads campaigns and brand strategy"),
            ("Financial Analyst", "Evaluates investments and financial performance"),
            ("Operations Manager", "Keeps teams and processes running efficiently"),
        ],
        Category::Creative => &[
            ("Graphic Designer", "Turns ideas into visual communication"),
            ("UX Designer", "Designs products that are easy and enjoyable to use"),
            ("Content Creator", "Produces writing, video, or audio for an audience"),
            ("Art Director", "Sets the visual direction of creative projects"),
        ],
        Category::Education => &[
            ("Teacher", "Guides students through learning in the classroom"),
            ("Instructional Designer", "Builds courses and training materials"),
            ("Education Consultant", "Advises schools on programs and outcomes"),
            ("Corporate Trainer", "Develops skills of employees in organisations"),
        ],
        Category::Engineering => &[
            ("Mechanical Engineer", "Designs machines and mechanical systems"),
            ("Civil Engineer", "Plans and builds infrastructure"),
            ("Electrical Engineer", "Works on power, electronics, and control systems"),
            ("Robotics Engineer", "Combines mechanics, electronics, and software"),
        ],
        Category::General => &[
            ("Project Coordinator", "Organises work across teams, useful in any industry"),
            ("Customer Success Manager", "Helps customers get value from a product"),
            ("Operations Associate", "Learns how a business runs end to end"),
            ("Research Assistant", "Builds analytical skills on real projects"),
        ],
    }
}

/// Static suggestions for a category, with descending match scores.
pub fn fallback_suggestions(category: Category) -> Vec<CareerSuggestion> {
    table(category)
        .iter()
        .enumerate()
        .map(|(i, (title, reason))| CareerSuggestion {
            title: title.to_string(),
            reason: reason.to_string(),
            match_score: Some(90.0 - 5.0 * i as f64),
        })
        .collect()
}
