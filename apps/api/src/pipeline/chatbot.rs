use crate::pipeline::prompts::CHATBOT_TEMPLATE;
use crate::pipeline::PromptPipeline;
use crate::schema::chatbot::{ChatbotInput, ChatbotReply};

/// Single-turn answer in the student's chosen language.
pub struct Chatbot;

impl PromptPipeline for Chatbot {
    type Input = ChatbotInput;
    type Output = ChatbotReply;

    const NAME: &'static str = "chatbot";
    const TEMPLATE: &'static str = CHATBOT_TEMPLATE;
}
