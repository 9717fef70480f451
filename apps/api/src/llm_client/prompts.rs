// Shared prompt fragments used by every pipeline.
// Each pipeline's own template text lives in pipeline/prompts.rs.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Heading placed before the rendered output shape at the end of every prompt.
pub const OUTPUT_SHAPE_INSTRUCTION: &str =
    "Return a JSON object with this EXACT schema (no extra fields). \
    Each string value below describes what belongs in that field:";
