pub mod client;
pub mod interface;
pub mod queue;

pub use client::TTSClient;
pub use interface::{SpeechError, TTSInterface, TTSRequest, TTSResponse};
