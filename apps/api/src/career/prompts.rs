// Prompt templates for the career information routes.

/// Replace: {career}
pub const CAREER_DETAILS_PROMPT_TEMPLATE: &str = r#"Describe the career "{career}".

Return a JSON object with this EXACT schema:
{
  "title": "{career}",
  "description": "Two sentences on what the job involves day to day",
  "skills": ["Skill one", "Skill two"],
  "education": "Typical education or certification path",
  "salaryRange": "$00,000 - $00,000 (USD per year)",
  "outlook": "Short statement about job growth",
  "relatedCareers": ["Related title one", "Related title two"]
}

List 4 to 6 skills and 3 to 5 related careers."#;

/// Replace: {profile}
pub const CAREER_SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Suggest careers that suit the person described below.

PROFILE:
{profile}

Return a JSON ARRAY of 4 to 6 suggestions, best match first:
[
  {"title": "Job title", "reason": "One sentence tying the job to the profile", "matchScore": 85}
]

matchScore is an integer from 0 to 100."#;

/// Replace: {current_role}, {target_role}, {timeframe}
pub const CAREER_ROADMAP_PROMPT_TEMPLATE: &str = r#"Plan a career transition.

Current role: {current_role}
Target role: {target_role}
Available time: {timeframe}

Return a JSON object with 4 to 7 ordered steps:
{
  "steps": [
    {"title": "Short step name", "description": "What to do and why", "duration": "e.g. 2-3 months"}
  ]
}"#;
