//! Report generation — prompt construction, LLM orchestration, section
//! parsing and the redacted preview.

pub mod generator;
pub mod parser;
pub mod preview;
pub mod prompts;
