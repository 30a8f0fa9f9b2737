// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Instruction that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Instruction that keeps evaluations free of demographic inference.
pub const FAIRNESS_INSTRUCTION: &str = "Be professional, structured, and avoid sensitive \
    demographic assumptions (age, gender, race, religion, etc.). \
    Focus on skills, experience, evidence, and role alignment.";
