use crate::pipeline::prompts::CAREER_SUGGESTION_TEMPLATE;
use crate::pipeline::PromptPipeline;
use crate::schema::career::CareerSuggestionResult;
use crate::schema::profile::StudentProfile;

/// Student profile → 3-5 scored career paths with a rationale.
pub struct CareerSuggestion;

impl PromptPipeline for CareerSuggestion {
    type Input = StudentProfile;
    type Output = CareerSuggestionResult;

    const NAME: &'static str = "career_suggestion";
    const TEMPLATE: &'static str = CAREER_SUGGESTION_TEMPLATE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedLlm;
    use crate::pipeline::{build_prompt, run, PipelineError};
    use crate::schema::profile::fixtures::sample_profile;
    use crate::schema::profile::EducationLevel;

    #[test]
    fn test_prompt_renders_every_section() {
        let wire = serde_json::to_value(sample_profile()).unwrap();
        let prompt = build_prompt::<CareerSuggestion>(&wire);
        assert!(prompt.contains("Location: Nagpur (Urban)"));
        assert!(prompt.contains("Stream: Science"));
        assert!(prompt.contains("Technical Skills: Python, Excel"));
        assert!(prompt.contains("Logical: 82%, Verbal: 64%, Creativity: 55%"));
        assert!(prompt.contains("Interested Industries: Information Technology, Healthcare"));
        assert!(!prompt.contains("{personal."));
    }

    #[test]
    fn test_class_10_prompt_has_empty_stream() {
        let mut profile = sample_profile();
        profile.education.level = EducationLevel::Class10;
        profile.education.stream = None;
        let wire = serde_json::to_value(profile).unwrap();
        let prompt = build_prompt::<CareerSuggestion>(&wire);
        assert!(prompt.contains("*   Stream: \n"));
    }

    #[tokio::test]
    async fn test_scores_are_bounded() {
        let llm = ScriptedLlm::new().reply(
            r#"{"suggestedCareers": [
                {"career": "Data Scientist", "matchScore": 91},
                {"career": "Biomedical Engineer", "matchScore": 84},
                {"career": "Software Developer", "matchScore": 80}
            ], "rationale": "Strong logical score and interest in healthcare."}"#,
        );
        let result = run::<CareerSuggestion>(&llm, &sample_profile()).await.unwrap();
        assert_eq!(result.suggested_careers.len(), 3);
        assert!(result
            .suggested_careers
            .iter()
            .all(|c| (0.0..=100.0).contains(&c.match_score)));
    }

    #[tokio::test]
    async fn test_single_suggestion_fails_closed() {
        let llm = ScriptedLlm::new().reply(
            r#"{"suggestedCareers": [{"career": "Doctor", "matchScore": 99}], "rationale": "r"}"#,
        );
        let err = run::<CareerSuggestion>(&llm, &sample_profile()).await.unwrap_err();
        assert!(matches!(err, PipelineError::OutputRejected { .. }));
    }
}
