//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the four scheduling operations.
//! - Render operation outcomes as the caller-facing text results.

pub mod scheduler_service;
