use serde::{Deserialize, Serialize};

use super::{Field, Schema, Shape};

/// A single-turn question. The transcript lives with the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotInput {
    pub language: String,
    pub query: String,
}

impl Schema for ChatbotInput {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("language", Shape::text()).describe(
                "The language in which the student wants to interact (e.g., English, Hindi).",
            ),
            Field::required("query", Shape::text()).describe("The student's question or request."),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotReply {
    pub response: String,
}

impl Schema for ChatbotReply {
    fn shape() -> Shape {
        Shape::Object(vec![Field::required("response", Shape::text())
            .describe("The chatbot's response in the specified language.")])
    }
}
