//! tweet-triage: customer-service triage for bank tweets via a hosted LLM.
//!
//! A single `POST /get_response` endpoint turns a tweet and a bank name into
//! a fixed assessment prompt, forwards it to Gemini, and returns the model's
//! free-text verdict unchanged.

pub mod config;
pub mod error;
pub mod generation;
pub mod server;
