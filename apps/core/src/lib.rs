//! Career Insights chatbot core.
//!
//! "The Brain" classifies a message and picks canned role content; the
//! completion client optionally expands it into richer prose.

pub mod brain;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fs_manager;
pub mod llm;
pub mod models;
pub mod responder;
pub mod session;
pub mod telemetry;

pub use config::ChatConfig;
pub use dataset::RoleDataset;
pub use error::AppError;
pub use responder::{Reply, ResponseAssembler};
pub use session::Transcript;

#[cfg(test)]
mod tests;
