//! Required skills for one career. Feeds the "required" side of the skills gap.

use serde::{Deserialize, Serialize};

use crate::pipeline::prompts::CAREER_SKILLS_TEMPLATE;
use crate::pipeline::PromptPipeline;
use crate::schema::{Field, Schema, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSkillsInput {
    pub career_name: String,
}

impl Schema for CareerSkillsInput {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("careerName", Shape::text()).describe("The career to look up.")
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSkillsResult {
    pub skills: Vec<String>,
}

impl Schema for CareerSkillsResult {
    fn shape() -> Shape {
        Shape::Object(vec![Field::required("skills", Shape::list(Shape::text()))
            .describe("About 10 skills, most important first.")])
    }
}

pub struct CareerSkills;

impl PromptPipeline for CareerSkills {
    type Input = CareerSkillsInput;
    type Output = CareerSkillsResult;

    const NAME: &'static str = "career_skills";
    const TEMPLATE: &'static str = CAREER_SKILLS_TEMPLATE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedLlm;
    use crate::pipeline::run;

    fn data_scientist() -> CareerSkillsInput {
        CareerSkillsInput {
            career_name: "Data Scientist".to_string(),
        }
    }

    // The model is non-deterministic: each call is checked for shape, not for equal values.
    #[tokio::test]
    async fn test_repeated_calls_each_conform() {
        let llm = ScriptedLlm::new()
            .reply(r#"{"skills": ["Python", "Statistics", "SQL"]}"#)
            .reply(r#"{"skills": ["Machine Learning", "Communication"]}"#);

        let first = run::<CareerSkills>(&llm, &data_scientist()).await.unwrap();
        let second = run::<CareerSkills>(&llm, &data_scientist()).await.unwrap();

        assert!(!first.skills.is_empty());
        assert!(!second.skills.is_empty());
        assert!(llm.prompts().iter().all(|p| p.contains("career in Data Scientist.")));
    }

    #[tokio::test]
    async fn test_non_string_skill_rejected() {
        let llm = ScriptedLlm::new().reply(r#"{"skills": ["Python", 42]}"#);
        assert!(run::<CareerSkills>(&llm, &data_scientist()).await.is_err());
    }
}
