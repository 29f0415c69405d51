//! Zenith Service - crisis-aware chatbot, coping exercises and liveness.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
