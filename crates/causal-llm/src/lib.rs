//! # causal-llm
//!
//! The three decision-policy collaborators implemented over an
//! OpenAI-compatible chat-completions endpoint.

pub mod client;
pub mod collaborators;
pub mod parse;
pub mod prompts;

pub use client::{ChatBackend, ChatClient, ChatMessage, ChatRequest};
pub use collaborators::{LlmClaimExtractor, LlmQuestionGenerator, LlmRiskAssessor};
