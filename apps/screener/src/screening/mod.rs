// Applicant screening: prompt rendering, model evaluation, response
// normalization, status classification, and the batch pipeline tying them together.
// All LLM calls go through llm_client, reached via the CandidateEvaluator seam.

pub mod evaluator;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod status;
