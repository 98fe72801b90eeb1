// Ad generation: prompt building, the completion round trip, and parsing.
// All completion calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
