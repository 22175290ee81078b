//! Presentation transforms.
//!
//! # Responsibility
//! - Turn the unordered task collection into a render-ready view model.
//! - Keep the rendering layer free of sorting, filtering, and escaping
//!   duties.

pub mod presenter;
