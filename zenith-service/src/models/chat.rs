use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_COUNTRY;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub crisis: bool,
}

impl ChatResponse {
    pub fn calm(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            crisis: false,
        }
    }

    pub fn crisis(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            crisis: true,
        }
    }
}
