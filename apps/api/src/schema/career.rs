//! Career-suggestion pipeline output. Its input is the full `StudentProfile`.

use serde::{Deserialize, Serialize};

use super::{Field, Schema, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub career: String,
    pub match_score: f64,
}

/// 3-5 suggestions in model order plus one rationale covering all of them.
/// Scores need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestionResult {
    pub suggested_careers: Vec<CareerMatch>,
    pub rationale: String,
}

impl CareerSuggestionResult {
    pub fn contains(&self, career: &str) -> bool {
        self.suggested_careers.iter().any(|c| c.career == career)
    }
}

impl Schema for CareerSuggestionResult {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required(
                "suggestedCareers",
                Shape::list_between(
                    Shape::Object(vec![
                        Field::required("career", Shape::text())
                            .describe("The name of the suggested career path."),
                        Field::required("matchScore", Shape::Number { min: 0.0, max: 100.0 })
                            .describe(
                                "A score from 0 to 100 indicating how well this career matches the user's profile.",
                            ),
                    ]),
                    3,
                    Some(5),
                ),
            )
            .describe("A list of 3-5 suggested career paths, tailored to the student profile and assessment results."),
            Field::required("rationale", Shape::text()).describe(
                "A detailed explanation of why each career path is suggested, based on the student profile and assessment results.",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    fn careers(n: usize) -> serde_json::Value {
        let list: Vec<_> = (0..n)
            .map(|i| json!({"career": format!("Career {i}"), "matchScore": 70 + i}))
            .collect();
        json!({"suggestedCareers": list, "rationale": "Strong logical aptitude."})
    }

    #[test]
    fn test_three_to_five_suggestions_accepted() {
        for n in 3..=5 {
            let result: CareerSuggestionResult = validate(careers(n)).unwrap();
            assert_eq!(result.suggested_careers.len(), n);
        }
    }

    #[test]
    fn test_too_few_or_too_many_suggestions_rejected() {
        assert!(validate::<CareerSuggestionResult>(careers(2)).is_err());
        assert!(validate::<CareerSuggestionResult>(careers(6)).is_err());
    }

    #[test]
    fn test_fractional_and_duplicate_scores_accepted() {
        let value = json!({
            "suggestedCareers": [
                {"career": "Data Scientist", "matchScore": 88.5},
                {"career": "ML Engineer", "matchScore": 88.5},
                {"career": "Actuary", "matchScore": 0}
            ],
            "rationale": "..."
        });
        let result: CareerSuggestionResult = validate(value).unwrap();
        assert!(result.contains("ML Engineer"));
        assert!(!result.contains("Doctor"));
    }

    #[test]
    fn test_score_outside_range_rejected_with_path() {
        let value = json!({
            "suggestedCareers": [
                {"career": "A", "matchScore": 50},
                {"career": "B", "matchScore": -1},
                {"career": "C", "matchScore": 101}
            ],
            "rationale": "r"
        });
        let err = validate::<CareerSuggestionResult>(value).unwrap_err();
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["suggestedCareers[1].matchScore", "suggestedCareers[2].matchScore"]
        );
    }
}
