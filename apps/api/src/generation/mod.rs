// Content generation for the résumé builder.
// Implements: experience rewrite, summary, cover letter, and the HTTP handlers
// that drive generation and rendering.
// All LLM calls go through the TextGenerator trait in llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
