// Resume generation: prompt construction, the LLM round trip, and shaping the model's
// JSON into a LaTeX document. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
