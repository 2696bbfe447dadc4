//! Agent skills for Postcraft.
//!
//! The post pipeline is exposed as a single skill, `createLinkedInPost`,
//! registered on a [`ContentAgent`]. Callers discover it through its JSON
//! schema and invoke it with JSON arguments.

pub mod agent;
pub mod create_post;

use std::sync::Arc;

use postcraft_core::tool::ToolRegistry;
use postcraft_generator::PostGenerator;

pub use agent::ContentAgent;
pub use create_post::CreatePostTool;

/// Create a registry with every built-in skill.
pub fn default_registry(generator: Arc<PostGenerator>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(CreatePostTool::new(generator)));
    registry
}
