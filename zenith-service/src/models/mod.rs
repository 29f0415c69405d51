pub mod chat;
pub mod exercise;
pub mod helpline;

pub use chat::{ChatRequest, ChatResponse};
pub use exercise::Exercise;
pub use helpline::HelplineRecord;
