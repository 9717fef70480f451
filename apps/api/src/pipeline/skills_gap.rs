use crate::pipeline::prompts::SKILLS_GAP_TEMPLATE;
use crate::pipeline::PromptPipeline;
use crate::schema::skills_gap::{SkillsGapInput, SkillsGapResult};

/// Student skills vs. career skills → missing / overlapping skills and a summary.
pub struct SkillsGap;

impl PromptPipeline for SkillsGap {
    type Input = SkillsGapInput;
    type Output = SkillsGapResult;

    const NAME: &'static str = "skills_gap";
    const TEMPLATE: &'static str = SKILLS_GAP_TEMPLATE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::build_prompt;

    #[test]
    fn test_skill_lists_render_comma_joined() {
        let input = SkillsGapInput {
            student_skills: vec!["Python".to_string(), "Public Speaking".to_string()],
            career_path_skills: vec!["Python".to_string(), "Statistics".to_string()],
            career_path_name: "Data Scientist".to_string(),
        };
        let prompt = build_prompt::<SkillsGap>(&serde_json::to_value(input).unwrap());
        assert!(prompt.contains("A student with the following skills: Python, Public Speaking"));
        assert!(prompt.contains(
            "career path: Data Scientist which requires the following skills: Python, Statistics."
        ));
    }
}
