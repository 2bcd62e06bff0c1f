//! Career information pipelines. Each asks the model for JSON and substitutes
//! the matching static table when the call or the parse fails.

use serde::Deserialize;
use tracing::warn;

use crate::career::prompts::{
    CAREER_DETAILS_PROMPT_TEMPLATE, CAREER_ROADMAP_PROMPT_TEMPLATE,
    CAREER_SUGGESTIONS_PROMPT_TEMPLATE,
};
use crate::fallback::details::fallback_details;
use crate::fallback::roadmap::fallback_roadmap;
use crate::fallback::suggestions::fallback_suggestions;
use crate::fallback::Category;
use crate::llm_client::prompts::CAREER_ADVISOR_SYSTEM;
use crate::llm_client::{call_json, ChatModel, LlmError};
use crate::models::career::{CareerDetails, CareerPreferences, CareerSuggestion, RoadmapStep};
use crate::models::mind_map::ResponseSource;

/// Models answer with either a bare array or an object wrapping it.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListReply<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "suggestions", alias = "steps", alias = "items")]
        list: Vec<T>,
    },
}

impl<T> ListReply<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListReply::Bare(v) | ListReply::Wrapped { list: v } => v,
        }
    }
}

pub async fn career_details(llm: &dyn ChatModel, career: &str) -> (CareerDetails, ResponseSource) {
    let prompt = CAREER_DETAILS_PROMPT_TEMPLATE.replace("{career}", career);

    let result: Result<CareerDetails, LlmError> =
        call_json(llm, &prompt, CAREER_ADVISOR_SYSTEM).await;
    match result {
        Ok(mut details) if !details.description.trim().is_empty() => {
            if details.title.trim().is_empty() {
                details.title = career.to_string();
            }
            (details, ResponseSource::Ai)
        }
        Ok(_) => {
            warn!("Career details for '{career}' came back empty; serving fallback");
            (fallback_details(career), ResponseSource::Fallback)
        }
        Err(e) => {
            warn!("Career details for '{career}' failed ({e}); serving fallback");
            (fallback_details(career), ResponseSource::Fallback)
        }
    }
}

pub async fn career_suggestions(
    llm: &dyn ChatModel,
    prefs: &CareerPreferences,
) -> (Vec<CareerSuggestion>, ResponseSource) {
    let prompt = CAREER_SUGGESTIONS_PROMPT_TEMPLATE.replace("{profile}", &prefs.profile_block());

    let result: Result<ListReply<CareerSuggestion>, LlmError> =
        call_json(llm, &prompt, CAREER_ADVISOR_SYSTEM).await;
    let suggestions = result.map(|reply| {
        reply
            .into_vec()
            .into_iter()
            .filter(|s| !s.title.trim().is_empty())
            .collect::<Vec<_>>()
    });

    match suggestions {
        Ok(list) if !list.is_empty() => (list, ResponseSource::Ai),
        other => {
            let category = Category::resolve(prefs.category.as_deref(), &prefs.keyword_text());
            match other {
                Err(e) => warn!(
                    "Career suggestions failed ({e}); serving {} fallback",
                    category.as_str()
                ),
                Ok(_) => warn!(
                    "Career suggestions came back empty; serving {} fallback",
                    category.as_str()
                ),
            }
            (fallback_suggestions(category), ResponseSource::Fallback)
        }
    }
}

pub async fn career_roadmap(
    llm: &dyn ChatModel,
    current_role: &str,
    target_role: &str,
    timeframe: Option<&str>,
) -> (Vec<RoadmapStep>, ResponseSource) {
    let current = if current_role.trim().is_empty() {
        "not specified"
    } else {
        current_role.trim()
    };
    let prompt = CAREER_ROADMAP_PROMPT_TEMPLATE
        .replace("{timeframe}", timeframe.unwrap_or("flexible"))
        .replace("{current_role}", current)
        .replace("{target_role}", target_role);

    let result: Result<ListReply<RoadmapStep>, LlmError> =
        call_json(llm, &prompt, CAREER_ADVISOR_SYSTEM).await;
    match result.map(ListReply::into_vec) {
        Ok(steps) if !steps.is_empty() => (steps, ResponseSource::Ai),
        Ok(_) => {
            warn!("Roadmap to '{target_role}' came back empty; serving fallback");
            (fallback_roadmap(current_role, target_role), ResponseSource::Fallback)
        }
        Err(e) => {
            warn!("Roadmap to '{target_role}' failed ({e}); serving fallback");
            (fallback_roadmap(current_role, target_role), ResponseSource::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedModel;

    #[tokio::test]
    async fn test_details_from_ai() {
        let llm = ScriptedModel::replying(
            r#"{"title": "", "description": "Flies planes.", "skills": ["Navigation"], "salaryRange": "$100k"}"#,
        );
        let (details, source) = career_details(&llm, "Pilot").await;
        assert_eq!(source, ResponseSource::Ai);
        assert_eq!(details.title, "Pilot");
        assert_eq!(details.salary_range, "$100k");
        assert!(llm.prompts.lock().unwrap()[0].contains("\"Pilot\""));
    }

    #[tokio::test]
    async fn test_details_fallback_on_parse_failure() {
        let llm = ScriptedModel::replying(r#"{"description": 12}"#);
        let (details, source) = career_details(&llm, "Data Scientist").await;
        assert_eq!(source, ResponseSource::Fallback);
        assert_eq!(details.salary_range, "$60,000 - $110,000");
    }

    #[tokio::test]
    async fn test_suggestions_accept_bare_array() {
        let llm = ScriptedModel::replying(
            r#"[{"title": "Vet Tech", "reason": "Loves animals", "matchScore": 88}, {"title": " "}]"#,
        );
        let (list, source) = career_suggestions(&llm, &CareerPreferences::default()).await;
        assert_eq!(source, ResponseSource::Ai);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].match_score, Some(88.0));
    }

    #[tokio::test]
    async fn test_suggestions_accept_wrapped_list() {
        let llm = ScriptedModel::replying(r#"{"suggestions": [{"title": "Actuary"}]}"#);
        let (list, source) = career_suggestions(&llm, &CareerPreferences::default()).await;
        assert_eq!(source, ResponseSource::Ai);
        assert_eq!(list[0].title, "Actuary");
    }

    #[tokio::test]
    async fn test_suggestions_fallback_uses_category() {
        let llm = ScriptedModel::failing(503);
        let prefs = CareerPreferences {
            category: Some("education".to_string()),
            ..Default::default()
        };
        let (list, source) = career_suggestions(&llm, &prefs).await;
        assert_eq!(source, ResponseSource::Fallback);
        assert_eq!(list, fallback_suggestions(Category::Education));
    }

    #[tokio::test]
    async fn test_roadmap_from_wrapped_steps() {
        let llm = ScriptedModel::replying(
            r#"Plan: {"steps": [{"title": "Learn SQL", "duration": "1 month"}, {"title": "Build a portfolio"}]}"#,
        );
        let (steps, source) = career_roadmap(&llm, "Cashier", "Data Analyst", Some("6 months")).await;
        assert_eq!(source, ResponseSource::Ai);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].duration, "1 month");
        let prompt = llm.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("Available time: 6 months"));
    }

    #[tokio::test]
    async fn test_roadmap_fallback_on_empty_steps() {
        let llm = ScriptedModel::replying(r#"{"steps": []}"#);
        let (steps, source) = career_roadmap(&llm, "", "Nurse", None).await;
        assert_eq!(source, ResponseSource::Fallback);
        assert_eq!(steps, fallback_roadmap("", "Nurse"));
    }
}
