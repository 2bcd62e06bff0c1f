// Mind map generation, node expansion, and persistence routes.
// All model calls go through llm_client; shapes go through normalize.

pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
