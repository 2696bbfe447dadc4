//! Generation orchestrator: picks the AI or template path, composes the
//! final post and attaches metadata.
//!
//! An AI failure is a value ([`Draft::Template`] after a logged `Err`),
//! never an error returned to the caller. `create_post` always produces a
//! [`PostResult`].

use std::sync::Arc;

use postcraft_config::AppConfig;
use postcraft_core::post::{GenerationMethod, PostRequest, PostResult};
use postcraft_core::provider::Provider;
use tracing::{debug, info, warn};

use crate::ai_generator::{AiPostGenerator, GenerationOptions};
use crate::format::{format_post, generate_hashtags};
use crate::templates::get_template;

/// Raw post body plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Ai(String),
    Template(String),
}

impl Draft {
    pub fn method(&self) -> GenerationMethod {
        match self {
            Draft::Ai(_) => GenerationMethod::Ai,
            Draft::Template(_) => GenerationMethod::Template,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Draft::Ai(text) | Draft::Template(text) => text,
        }
    }
}

/// Turns post requests into finished posts.
///
/// Stateless between calls; share it behind an `Arc`.
#[derive(Clone, Default)]
pub struct PostGenerator {
    ai: Option<AiPostGenerator>,
}

impl PostGenerator {
    pub fn new(ai: Option<AiPostGenerator>) -> Self {
        Self { ai }
    }

    /// A generator that never calls a model.
    pub fn template_only() -> Self {
        Self { ai: None }
    }

    pub fn with_ai(provider: Arc<dyn Provider>, options: GenerationOptions) -> Self {
        Self {
            ai: Some(AiPostGenerator::new(provider, options)),
        }
    }

    /// Wire the generator from configuration. `provider` is usually
    /// `postcraft_providers::inference_provider(config)`.
    pub fn from_config(config: &AppConfig, provider: Option<Arc<dyn Provider>>) -> Self {
        match provider {
            Some(provider) => {
                let options = GenerationOptions::from_config(config);
                info!(provider = %provider.name(), model = %options.model, "AI generation enabled");
                Self::with_ai(provider, options)
            }
            None => {
                info!("No inference provider, posts will come from templates");
                Self::template_only()
            }
        }
    }

    pub fn has_ai(&self) -> bool {
        self.ai.is_some()
    }

    /// Whether the inference provider answers its health check. `None` in
    /// template-only mode; a failed check counts as unreachable.
    pub async fn provider_reachable(&self) -> Option<bool> {
        let ai = self.ai.as_ref()?;
        match ai.health_check().await {
            Ok(reachable) => Some(reachable),
            Err(e) => {
                warn!(error = %e, "Provider health check failed");
                Some(false)
            }
        }
    }

    /// Produce the raw body: AI when available and successful, otherwise a
    /// template.
    pub async fn draft(&self, request: &PostRequest) -> Draft {
        let template = || get_template(&request.topic, &request.post_type, &request.tone);

        let Some(ai) = &self.ai else {
            return Draft::Template(template());
        };

        match ai
            .generate(&request.topic, &request.tone, &request.post_type)
            .await
        {
            Ok(text) => Draft::Ai(text),
            Err(e) => {
                warn!(error = %e, topic = %request.topic, "AI generation failed, falling back to template");
                Draft::Template(template())
            }
        }
    }

    /// Create a finished post. Never fails: AI errors fall back to templates.
    pub async fn create_post(&self, request: &PostRequest) -> PostResult {
        let draft = self.draft(request).await;
        let method = draft.method();
        let body = draft.into_text();

        let body = if request.include_hashtags {
            format!("{body}\n\n{}", generate_hashtags(&request.topic, &request.post_type))
        } else {
            body
        };

        let content = format_post(&body, &request.topic);
        debug!(
            method = method.as_str(),
            chars = content.chars().count(),
            "Post created"
        );

        PostResult::assemble(content, request, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingProvider, ScriptedProvider};
    use postcraft_core::post::{POST_KIND, RECOMMENDED_POST_TIME};

    #[tokio::test]
    async fn template_only_post_with_hashtags() {
        let generator = PostGenerator::template_only();
        let request = PostRequest::new("Remote Work")
            .with_tone("professional")
            .with_post_type("career_tip");

        let result = generator.create_post(&request).await;

        let expected_body = get_template("Remote Work", "career_tip", "professional");
        let expected = format_post(
            &format!(
                "{expected_body}\n\n{}",
                generate_hashtags("Remote Work", "career_tip")
            ),
            "Remote Work",
        );
        assert_eq!(result.content, expected);
        assert!(result.content.contains("#CareerAdvice"));
        assert!(result.content.ends_with("What's your experience with Remote Work?"));
        assert_eq!(result.metadata.generation_method, GenerationMethod::Template);
        assert_eq!(result.metadata.kind, POST_KIND);
        assert_eq!(result.metadata.recommended_post_time, RECOMMENDED_POST_TIME);
        assert_eq!(result.metadata.character_count, result.content.chars().count());
    }

    #[tokio::test]
    async fn hashtags_can_be_disabled() {
        let generator = PostGenerator::template_only();
        let request = PostRequest::new("Remote Work").with_hashtags(false);
        let result = generator.create_post(&request).await;
        assert!(!result.content.contains('#'));
    }

    #[tokio::test]
    async fn failing_provider_falls_back_to_template() {
        let generator =
            PostGenerator::with_ai(Arc::new(FailingProvider), GenerationOptions::default());
        let request = PostRequest::new("Edge Computing").with_hashtags(false);

        let draft = generator.draft(&request).await;
        assert_eq!(
            draft,
            Draft::Template(get_template(
                "Edge Computing",
                "thought_leadership",
                "professional"
            ))
        );

        let result = generator.create_post(&request).await;
        assert_eq!(result.metadata.generation_method, GenerationMethod::Template);
        assert!(result.content.contains("Edge Computing"));
    }

    #[tokio::test]
    async fn successful_provider_marks_post_as_ai() {
        let provider = Arc::new(ScriptedProvider::new(
            "Great insights on scaling teams. #growth #leadership",
        ));
        let generator = PostGenerator::with_ai(provider, GenerationOptions::default());
        let request = PostRequest::new("Scaling Teams")
            .with_tone("casual")
            .with_post_type("personal_achievement")
            .with_hashtags(false);

        let result = generator.create_post(&request).await;
        assert_eq!(result.metadata.generation_method, GenerationMethod::Ai);
        assert_eq!(
            result.content,
            "Great insights on scaling teams.\n\nWhat's your experience with Scaling Teams?"
        );
        assert_eq!(result.metadata.tone, "casual");
        assert_eq!(result.metadata.post_type, "personal_achievement");
    }

    #[tokio::test]
    async fn empty_ai_reply_falls_back() {
        let generator = PostGenerator::with_ai(
            Arc::new(ScriptedProvider::new("   #only #tags   ")),
            GenerationOptions::default(),
        );
        let draft = generator.draft(&PostRequest::new("AI")).await;
        assert_eq!(draft.method(), GenerationMethod::Template);
    }

    #[tokio::test]
    async fn provider_reachability() {
        assert_eq!(PostGenerator::template_only().provider_reachable().await, None);

        let healthy = PostGenerator::with_ai(
            Arc::new(ScriptedProvider::new("ok")),
            GenerationOptions::default(),
        );
        assert_eq!(healthy.provider_reachable().await, Some(true));

        let down = PostGenerator::with_ai(Arc::new(FailingProvider), GenerationOptions::default());
        assert_eq!(down.provider_reachable().await, Some(false));
    }

    #[test]
    fn from_config_without_provider_is_template_only() {
        let generator = PostGenerator::from_config(&AppConfig::default(), None);
        assert!(!generator.has_ai());
        let generator =
            PostGenerator::from_config(&AppConfig::default(), Some(Arc::new(FailingProvider)));
        assert!(generator.has_ai());
    }
}
