pub mod stateless_llm;
pub mod system;
pub mod tts;
pub mod utils;
