//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model and search calls into command-loop level APIs.
//! - Keep the CLI decoupled from record internals.

pub mod book_service;
