pub mod chat;
pub mod exercises;
pub mod health;

pub use chat::chatbot;
pub use exercises::list_exercises;
pub use health::{health_check, ping};
