//! Reply selection for the chatbot.
//!
//! Branch order is fixed: crisis, then "breathe", then "stress"/"anxious",
//! then the generic prompt.

use crate::models::{ChatRequest, ChatResponse, HelplineRecord};
use crate::services::crisis::is_crisis;
use crate::services::helplines::HelplineTable;
use service_core::error::AppError;

pub const BOX_BREATHING_REPLY: &str = "Try Box Breathing: inhale 4, hold 4, exhale 4, hold 4.";
pub const STRESS_REPLY: &str = "Take a 2-min breathing break — tap Breathe → Start.";
pub const FALLBACK_REPLY: &str = "I’m here. Try asking about breathing or motivation.";

/// Classifies and answers a chat request.
pub fn respond(request: &ChatRequest, helplines: &HelplineTable) -> Result<ChatResponse, AppError> {
    let message = request.message.to_lowercase();
    let crisis = is_crisis(&message);
    compose_reply(&message, crisis, &request.country, helplines)
}

/// `message` is expected lower-cased already.
pub fn compose_reply(
    message: &str,
    crisis: bool,
    country: &str,
    helplines: &HelplineTable,
) -> Result<ChatResponse, AppError> {
    if crisis {
        let record = helplines.lookup(country).ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "No helpline record for '{}' or default '{}'",
                country,
                helplines.default_code()
            ))
        })?;
        return Ok(ChatResponse::crisis(crisis_reply(record)));
    }

    if message.contains("breathe") {
        return Ok(ChatResponse::calm(BOX_BREATHING_REPLY));
    }

    if message.contains("stress") || message.contains("anxious") {
        return Ok(ChatResponse::calm(STRESS_REPLY));
    }

    Ok(ChatResponse::calm(FALLBACK_REPLY))
}

fn crisis_reply(record: &HelplineRecord) -> String {
    format!(
        "I'm really glad you told me. You’re not alone.\n\
         If you're in danger, call {}.\n\
         Helplines in {}: {}, {}\n\
         Let's take a slow breath together — inhale 4, hold 4, exhale 4.",
        record.emergency, record.country, record.primary, record.secondary
    )
}
