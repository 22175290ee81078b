//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot persistence into the task store use-case API.
//! - Keep UI layers decoupled from storage details.

pub mod task_store;
