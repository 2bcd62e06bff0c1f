use serde::{Deserialize, Deserializer, Serialize};

use crate::models::mind_map::ResponseSource;

/// Career-preference form submitted by the client.
///
/// List fields accept either a JSON array or a comma-separated string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerPreferences {
    pub user_id: Option<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub goals: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl CareerPreferences {
    /// True when the form carries nothing a prompt could be built from.
    pub fn is_blank(&self) -> bool {
        self.interests.is_empty()
            && self.skills.is_empty()
            && [
                &self.education,
                &self.experience,
                &self.goals,
                &self.category,
            ]
            .iter()
            .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }

    /// All free text, lowercased, for keyword matching against fallback tables.
    pub fn keyword_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.category.as_deref());
        parts.extend(self.interests.iter().map(String::as_str));
        parts.extend(self.skills.iter().map(String::as_str));
        parts.extend(self.goals.as_deref());
        parts.extend(self.experience.as_deref());
        parts.extend(self.education.as_deref());
        parts.join(" ").to_lowercase()
    }

    /// Human-readable profile block embedded in prompts.
    pub fn profile_block(&self) -> String {
        fn or_unspecified(value: Option<&str>) -> &str {
            match value.map(str::trim) {
                Some(s) if !s.is_empty() => s,
                _ => "not specified",
            }
        }
        fn list(items: &[String]) -> String {
            if items.is_empty() {
                "not specified".to_string()
            } else {
                items.join(", ")
            }
        }

        format!(
            "Interests: {}\nSkills: {}\nEducation: {}\nExperience: {}\nGoals: {}\nPreferred field: {}\nLocation: {}",
            list(&self.interests),
            list(&self.skills),
            or_unspecified(self.education.as_deref()),
            or_unspecified(self.experience.as_deref()),
            or_unspecified(self.goals.as_deref()),
            or_unspecified(self.category.as_deref()),
            or_unspecified(self.location.as_deref()),
        )
    }
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    let items = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::Many(v) => v,
        StringOrList::Nothing(()) => Vec::new(),
    };

    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Detail sheet for a single career title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetails {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub outlook: String,
    #[serde(default)]
    pub related_careers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub title: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub match_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetailsResponse {
    pub details: CareerDetails,
    pub source: ResponseSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestionsResponse {
    pub suggestions: Vec<CareerSuggestion>,
    pub source: ResponseSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmapResponse {
    pub current_role: String,
    pub target_role: String,
    pub steps: Vec<RoadmapStep>,
    pub source: ResponseSource,
}
