//! Headline Generator: an ad-brief → ad-variant service and its brief collector.

pub mod ads;
pub mod collector;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
