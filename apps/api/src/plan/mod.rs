// Academic Plan — AI-generated 4-year course plans.
// Implements: prompt construction, the lenient JSON extraction cascade over
// raw model output, structural validation, and the static fallback plan.
// Plans are created/replaced wholesale by (re)generation, never edited
// incrementally. All LLM calls go through llm_client.

pub mod extract;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
