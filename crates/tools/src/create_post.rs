//! `createLinkedInPost` skill: runs the post pipeline from JSON arguments.

use std::sync::Arc;

use async_trait::async_trait;
use postcraft_core::error::ToolError;
use postcraft_core::post::PostRequest;
use postcraft_core::tool::{Tool, ToolResult};
use postcraft_generator::{PostGenerator, template_options};

pub const SKILL_NAME: &str = "createLinkedInPost";

pub struct CreatePostTool {
    generator: Arc<PostGenerator>,
}

impl CreatePostTool {
    pub fn new(generator: Arc<PostGenerator>) -> Self {
        Self { generator }
    }

    /// Decode arguments leniently: absent fields take their defaults and
    /// unknown tone or post type names are passed through.
    fn parse_request(arguments: serde_json::Value) -> Result<PostRequest, ToolError> {
        let arguments = if arguments.is_null() {
            serde_json::json!({})
        } else {
            arguments
        };

        let request: PostRequest = serde_json::from_value(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        request
            .validate()
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        Ok(request)
    }
}

#[async_trait]
impl Tool for CreatePostTool {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    fn description(&self) -> &str {
        "Generates a professional LinkedIn post based on topic and tone"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        let options = template_options();
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic or subject of the LinkedIn post"
                },
                "tone": {
                    "type": "string",
                    "description": "The tone of the post",
                    "enum": options.tones
                },
                "includeHashtags": {
                    "type": "boolean",
                    "description": "Whether to include relevant hashtags"
                },
                "postType": {
                    "type": "string",
                    "description": "Type of post to create",
                    "enum": options.post_types
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let request = Self::parse_request(arguments)?;
        let post = self.generator.create_post(&request).await;

        let data = serde_json::to_value(&post).map_err(|e| ToolError::ExecutionFailed {
            tool_name: SKILL_NAME.into(),
            reason: e.to_string(),
        })?;

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: post.content,
            data: Some(data),
        })
    }
}
