//! The content agent: a named bundle of skills.

use std::sync::Arc;

use postcraft_core::error::ToolError;
use postcraft_core::tool::{ToolCall, ToolDefinition, ToolRegistry, ToolResult};
use postcraft_generator::PostGenerator;
use tracing::{debug, warn};

pub const AGENT_NAME: &str = "LinkedInContentAgent";
pub const AGENT_DESCRIPTION: &str =
    "An agent specialized in creating professional LinkedIn posts using AI";

pub struct ContentAgent {
    registry: ToolRegistry,
}

impl ContentAgent {
    /// An agent with the built-in skills, all sharing `generator`.
    pub fn new(generator: Arc<PostGenerator>) -> Self {
        Self {
            registry: crate::default_registry(generator),
        }
    }

    pub fn name(&self) -> &str {
        AGENT_NAME
    }

    pub fn description(&self) -> &str {
        AGENT_DESCRIPTION
    }

    /// Skill definitions, sorted by name.
    pub fn skills(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Run the skill `skill` with JSON `arguments`.
    pub async fn invoke(
        &self,
        skill: &str,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let call = ToolCall {
            id: uuid::Uuid::new_v4().to_string(),
            name: skill.to_string(),
            arguments,
        };

        debug!(agent = AGENT_NAME, skill, call_id = %call.id, "Invoking skill");
        let result = self.registry.execute(&call).await;
        if let Err(e) = &result {
            warn!(agent = AGENT_NAME, skill, error = %e, "Skill invocation failed");
        }
        result
    }
}
