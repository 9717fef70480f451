use crate::pipeline::prompts::ROADMAP_TEMPLATE;
use crate::pipeline::PromptPipeline;
use crate::schema::roadmap::{RoadmapInput, RoadmapResult};

/// Profile summary, chosen career and its gaps → ordered learning steps.
pub struct RoadmapGeneration;

impl PromptPipeline for RoadmapGeneration {
    type Input = RoadmapInput;
    type Output = RoadmapResult;

    const NAME: &'static str = "roadmap_generation";
    const TEMPLATE: &'static str = ROADMAP_TEMPLATE;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::pipeline::build_prompt;
    use crate::schema::roadmap::{Demographics, RoadmapStudentProfile};

    #[test]
    fn test_maps_render_as_key_value_lines() {
        let input = RoadmapInput {
            student_profile: RoadmapStudentProfile {
                demographics: Demographics {
                    age: Some(17),
                    location: "Nagpur (Urban)".to_string(),
                    education_level: "Class 12".to_string(),
                },
                interests: vec!["chess".to_string(), "robotics".to_string()],
                assessment_results: BTreeMap::from([
                    ("logicalScore".to_string(), json!(82)),
                    ("personality".to_string(), json!("Analytical")),
                ]),
                skills: vec!["Python".to_string()],
            },
            career_suggestions: vec!["Data Scientist".to_string()],
            skill_gaps: BTreeMap::from([(
                "Data Scientist".to_string(),
                vec!["Statistics".to_string(), "SQL".to_string()],
            )]),
        };
        let prompt = build_prompt::<RoadmapGeneration>(&serde_json::to_value(input).unwrap());
        assert!(prompt.contains("age: 17\neducationLevel: Class 12\nlocation: Nagpur (Urban)"));
        assert!(prompt.contains("logicalScore: 82\npersonality: Analytical"));
        assert!(prompt.contains("Interests: chess, robotics"));
        assert!(prompt.contains("Skill Gaps:\nData Scientist: Statistics, SQL"));
    }
}
