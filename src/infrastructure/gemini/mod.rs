//! Generative content service adapter.

mod client;
mod dto;
mod prompts;

pub use client::GeminiContentClient;
