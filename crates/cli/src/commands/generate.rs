//! `postcraft generate` — One-shot post generation to stdout.

use std::sync::Arc;

use postcraft_config::AppConfig;
use postcraft_core::Error;
use postcraft_core::post::{PostRequest, PostResult};
use postcraft_generator::PostGenerator;
use tracing::debug;

/// Command-line inputs for a single post.
pub struct GenerateArgs {
    pub topic: String,
    pub tone: Option<String>,
    pub post_type: Option<String>,
    pub no_hashtags: bool,
    pub template_only: bool,
    pub json: bool,
}

impl GenerateArgs {
    fn to_request(&self) -> PostRequest {
        let mut request = PostRequest::new(self.topic.trim()).with_hashtags(!self.no_hashtags);
        if let Some(tone) = &self.tone {
            request = request.with_tone(tone);
        }
        if let Some(post_type) = &self.post_type {
            request = request.with_post_type(post_type);
        }
        request
    }
}

pub async fn run(args: GenerateArgs) -> postcraft_core::Result<()> {
    let request = args.to_request();
    request.validate()?;

    let config = AppConfig::load().map_err(|e| Error::Config {
        message: format!("Failed to load config: {e}"),
    })?;
    let provider = if args.template_only {
        None
    } else {
        postcraft_providers::inference_provider(&config)
    };
    let generator = Arc::new(PostGenerator::from_config(&config, provider));

    let post = generator.create_post(&request).await;
    debug!(
        method = post.metadata.generation_method.as_str(),
        chars = post.metadata.character_count,
        "Generated post"
    );
    println!("{}", render(&post, args.json)?);

    Ok(())
}

fn render(post: &PostResult, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(post);
    }

    Ok(format!(
        "{}\n\n---\n{} chars · {} · best time: {}",
        post.content,
        post.metadata.character_count,
        post.metadata.generation_method.as_str(),
        post.metadata.recommended_post_time
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::post::GenerationMethod;

    fn args(topic: &str) -> GenerateArgs {
        GenerateArgs {
            topic: topic.into(),
            tone: None,
            post_type: None,
            no_hashtags: false,
            template_only: true,
            json: false,
        }
    }

    #[test]
    fn request_uses_defaults() {
        let request = args("  Remote Work ").to_request();
        assert_eq!(request.topic, "Remote Work");
        assert_eq!(request.tone, "professional");
        assert_eq!(request.post_type, "thought_leadership");
        assert!(request.include_hashtags);
    }

    #[test]
    fn request_carries_overrides() {
        let mut a = args("AI");
        a.tone = Some("analytical".into());
        a.post_type = Some("career_tip".into());
        a.no_hashtags = true;
        let request = a.to_request();
        assert_eq!(request.tone, "analytical");
        assert_eq!(request.post_type, "career_tip");
        assert!(!request.include_hashtags);
    }

    #[tokio::test]
    async fn blank_topic_fails_before_loading_config() {
        assert!(args("   ").to_request().validate().is_err());
        let err = run(args("   ")).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Topic is required");
    }

    #[test]
    fn render_text_and_json() {
        let post = PostResult::assemble(
            "Body".into(),
            &PostRequest::new("AI"),
            GenerationMethod::Template,
        );

        let text = render(&post, false).unwrap();
        assert!(text.starts_with("Body\n\n---\n4 chars"));
        assert!(text.contains("template"));

        let json: serde_json::Value =
            serde_json::from_str(&render(&post, true).unwrap()).unwrap();
        assert_eq!(json["metadata"]["characterCount"], 4);
    }
}
