// Resume generation: free-form career text → structured, fitted ResumeContent.
// The only module that talks to the LLM, always through llm_client::TextCompletion.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod repair;
