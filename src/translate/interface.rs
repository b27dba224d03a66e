//! Wire types for the jargon translation endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub output: String,
}
