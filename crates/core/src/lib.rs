//! # Postcraft Core
//!
//! Domain types, traits, and error definitions for the Postcraft post
//! generator. This crate has **no framework dependencies**: it defines the
//! domain model that the other crates implement against.
//!
//! The inference backend (`Provider`) and the agent-skill surface (`Tool`)
//! are traits here; implementations live in their own crates so they can be
//! swapped via configuration and replaced with stubs in tests.

pub mod error;
pub mod message;
pub mod post;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, GenerationError, ProviderError, Result, ToolError, ValidationError};
pub use message::{Message, Role};
pub use post::{GenerationMethod, PostMetadata, PostRequest, PostResult, PostType, Tone};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
