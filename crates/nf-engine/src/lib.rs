//! Question orchestration for Nextframe.
//!
//! The [`Orchestrator`] picks a pattern family, runs it against the caller's
//! random stream, and retries until the result is valid and new to the
//! [`Session`]. Unavailable or failing families degrade to a placeholder
//! question, so [`Orchestrator::generate_question`] always returns.

pub mod config;
pub mod orchestrator;
pub mod placeholder;
pub mod registry;
pub mod session;

pub use config::EngineConfig;
pub use orchestrator::{CREATIVE_WEIGHTS, Orchestrator, PLACEHOLDER_KEY};
pub use placeholder::Placeholder;
pub use registry::{Generator, Registry};
pub use session::{DEFAULT_RECENCY_CAPACITY, RecencyWindow, Session, SessionStats};
