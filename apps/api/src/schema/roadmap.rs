//! Roadmap pipeline input/output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Field, Schema, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// `None` when the profile's free-text age is not a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub location: String,
    pub education_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStudentProfile {
    pub demographics: Demographics,
    pub interests: Vec<String>,
    pub assessment_results: BTreeMap<String, Value>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapInput {
    pub student_profile: RoadmapStudentProfile,
    pub career_suggestions: Vec<String>,
    /// Career name → skills still missing for it.
    pub skill_gaps: BTreeMap<String, Vec<String>>,
}

impl Schema for RoadmapInput {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required(
                "studentProfile",
                Shape::Object(vec![
                    Field::required(
                        "demographics",
                        Shape::Object(vec![
                            Field::optional("age", Shape::Integer { min: 0, max: 150 })
                                .describe("Age of the student"),
                            Field::required("location", Shape::text())
                                .describe("Location of the student"),
                            Field::required("educationLevel", Shape::text())
                                .describe("Highest education level attained"),
                        ]),
                    )
                    .describe("Demographic information of the student"),
                    Field::required("interests", Shape::list(Shape::text()))
                        .describe("List of interests of the student"),
                    Field::required("assessmentResults", Shape::record(Shape::Any))
                        .describe("Results from psychometric assessments"),
                    Field::required("skills", Shape::list(Shape::text()))
                        .describe("List of current skills of the student"),
                ]),
            )
            .describe("Detailed profile of the student"),
            Field::required("careerSuggestions", Shape::list_between(Shape::text(), 1, None))
                .describe("List of suggested career paths for the student"),
            Field::required("skillGaps", Shape::record(Shape::list(Shape::text())))
                .describe("Analysis of skill gaps for each career suggestion"),
        ])
    }
}

/// One curriculum step. Resources are free text; some are URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    #[serde(rename = "step")]
    pub title: String,
    pub description: String,
    pub resources: Vec<String>,
    pub estimated_time: String,
}

/// Steps are sequential; their order is meaningful and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapResult {
    pub roadmap: Vec<RoadmapStep>,
}

impl Schema for RoadmapResult {
    fn shape() -> Shape {
        Shape::Object(vec![Field::required(
            "roadmap",
            Shape::list_between(
                Shape::Object(vec![
                    Field::required("step", Shape::text()).describe("A step in the roadmap"),
                    Field::required("description", Shape::text())
                        .describe("Description of the step"),
                    Field::required("resources", Shape::list(Shape::text()))
                        .describe("List of resources for the step"),
                    Field::required("estimatedTime", Shape::text())
                        .describe("Estimated time to complete the step"),
                ]),
                1,
                None,
            ),
        )
        .describe("A personalized learning roadmap")])
    }
}
