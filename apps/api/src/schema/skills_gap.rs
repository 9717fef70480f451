//! Skills-gap pipeline input/output, plus the career-skills lookup that feeds it.

use serde::{Deserialize, Serialize};

use super::{Field, Schema, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGapInput {
    pub student_skills: Vec<String>,
    pub career_path_skills: Vec<String>,
    pub career_path_name: String,
}

impl Schema for SkillsGapInput {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("studentSkills", Shape::list(Shape::text()))
                .describe("A list of skills the student currently possesses."),
            Field::required("careerPathSkills", Shape::list(Shape::text()))
                .describe("A list of skills required for the suggested career path."),
            Field::required("careerPathName", Shape::text())
                .describe("The name of the career path."),
        ])
    }
}

/// `missing_skills` and `overlap_skills` are expected to be disjoint but the
/// model is not forced to comply. Consumers decide how to treat overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGapResult {
    pub missing_skills: Vec<String>,
    pub overlap_skills: Vec<String>,
    pub analysis_summary: String,
}

impl Schema for SkillsGapResult {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("missingSkills", Shape::list(Shape::text()))
                .describe("A list of skills the student is missing for the career path."),
            Field::required("overlapSkills", Shape::list(Shape::text()))
                .describe("A list of skills that overlaps between the student and career path."),
            Field::required("analysisSummary", Shape::text()).describe(
                "A summary of the skills gap analysis, including the importance of the missing skills.",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    #[test]
    fn test_empty_skill_lists_are_valid() {
        let result: SkillsGapResult = validate(json!({
            "missingSkills": [],
            "overlapSkills": [],
            "analysisSummary": "You already match this role."
        }))
        .unwrap();
        assert!(result.missing_skills.is_empty());
        assert!(result.overlap_skills.is_empty());
    }

    #[test]
    fn test_overlapping_lists_pass_validation() {
        let result: SkillsGapResult = validate(json!({
            "missingSkills": ["SQL"],
            "overlapSkills": ["SQL", "Python"],
            "analysisSummary": "..."
        }))
        .unwrap();
        assert_eq!(result.overlap_skills.len(), 2);
    }

    #[test]
    fn test_missing_summary_and_non_array_lists_reported_together() {
        let err = validate::<SkillsGapResult>(json!({
            "missingSkills": "SQL, Statistics",
            "overlapSkills": ["Python"]
        }))
        .unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.touches("missingSkills"));
        assert!(err.touches("analysisSummary"));
    }
}
