//! AI drafting of post bodies through an inference [`Provider`].
//!
//! One request per post: a system instruction plus a user prompt built from
//! the topic, tone and post type. The reply is cleaned (hashtags stripped,
//! whitespace normalized) and cut to the character budget at the last
//! sentence boundary that fits.

use std::sync::{Arc, LazyLock};

use postcraft_config::AppConfig;
use postcraft_core::error::{GenerationError, ProviderError};
use postcraft_core::message::Message;
use postcraft_core::post::{PostType, Tone};
use postcraft_core::provider::{Provider, ProviderRequest};
use regex_lite::Regex;
use tracing::{debug, warn};

pub const DEFAULT_MAX_LENGTH: usize = 1300;
pub const DEFAULT_MODEL: &str = "@cf/meta/llama-3-8b-instruct";

/// Upper bound on the completion token budget.
const MAX_TOKENS_CAP: usize = 1000;

const SYSTEM_PROMPT: &str = "You are a professional LinkedIn content creator who specializes in creating engaging, valuable posts that drive engagement while maintaining a professional image.";

const DEFAULT_TONE_INSTRUCTION: &str = "Use a clear, professional tone appropriate for LinkedIn.";
const DEFAULT_POST_TYPE_DESCRIPTION: &str = "sharing professional insights and perspectives";

/// Knobs for a single AI generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Character budget for the cleaned post body.
    pub max_length: usize,
    pub model: String,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            model: DEFAULT_MODEL.into(),
            temperature: 0.7,
        }
    }
}

impl GenerationOptions {
    /// Options from the loaded configuration. A per-provider model wins over
    /// the top-level default.
    pub fn from_config(config: &AppConfig) -> Self {
        let model = config
            .providers
            .get(&config.default_provider)
            .and_then(|p| p.default_model.clone())
            .unwrap_or_else(|| config.default_model.clone());

        Self {
            max_length: config.generation.max_length,
            model,
            temperature: config.default_temperature,
        }
    }

    /// `min(1000, ceil(max_length / 2))`
    pub fn token_budget(&self) -> u32 {
        let budget = self.max_length.div_ceil(2).min(MAX_TOKENS_CAP);
        u32::try_from(budget).unwrap_or(MAX_TOKENS_CAP as u32)
    }
}

/// Inputs for one prompt. Lives only for the duration of a call.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub topic: &'a str,
    pub tone: &'a str,
    pub post_type: &'a str,
    pub max_length: usize,
    pub model: &'a str,
}

fn tone_instruction(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Use a formal, authoritative tone with clear points.",
        Tone::Thoughtful => "Use a reflective tone that poses questions and explores implications.",
        Tone::Inspirational => "Use an uplifting, motivational tone with powerful language.",
        Tone::Analytical => "Use a data-driven tone with statistics and structured analysis.",
        Tone::Casual => "Use a conversational, approachable tone that feels authentic.",
        Tone::Technical => {
            "Use precise terminology and structured explanations relevant to experts."
        }
    }
}

fn post_type_description(post_type: PostType) -> &'static str {
    match post_type {
        PostType::ThoughtLeadership => {
            "sharing innovative ideas to position yourself as an industry leader"
        }
        PostType::IndustryInsight => "providing analysis of industry trends and developments",
        PostType::CareerTip => "offering professional advice and development strategies",
        PostType::CompanyUpdate => "sharing news about your organization's achievements",
        PostType::IndustryNews => "sharing breaking news and developments in your industry",
        PostType::CaseStudy => "presenting a real-world example with results and lessons learned",
        PostType::PersonalAchievement => {
            "highlighting personal or team accomplishments with humility"
        }
    }
}

/// Build the user prompt. Unknown tones and post types get generic wording.
pub fn build_prompt(ctx: &PromptContext<'_>) -> String {
    let description = PostType::from_name(ctx.post_type)
        .map(post_type_description)
        .unwrap_or(DEFAULT_POST_TYPE_DESCRIPTION);
    let instruction = Tone::from_name(ctx.tone)
        .map(tone_instruction)
        .unwrap_or(DEFAULT_TONE_INSTRUCTION);

    format!(
        "Create a LinkedIn post about \"{topic}\" in the style of {description}.\n\
         \n\
         Tone: {instruction}\n\
         \n\
         Guidelines:\n\
         - Write 3-4 short paragraphs with a logical flow\n\
         - Include one concrete example or data point to add credibility\n\
         - End with a question that encourages engagement\n\
         - Keep under {max_length} characters total\n\
         - No hashtags or emojis in the content\n\
         - Focus on providing value to the reader\n\
         - Use white space effectively for readability",
        topic = ctx.topic,
        max_length = ctx.max_length,
    )
}

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

/// Replace each run of non-newline whitespace (Unicode included) with one
/// ASCII space.
fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() && c != '\n' && c != '\r' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Strip hashtags, collapse horizontal whitespace, cap blank lines at one.
pub fn clean_response(raw: &str) -> String {
    let text = HASHTAG.replace_all(raw.trim(), "");
    let text = collapse_spaces(&text);
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Cut `text` to `max_length` characters, preferring to end on the last
/// `.`, `?` or `!` inside the budget.
pub fn enforce_length(text: String, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text;
    }

    let truncated: String = text.chars().take(max_length).collect();
    match truncated.rfind(|c: char| matches!(c, '.' | '?' | '!')) {
        Some(end) if end > 0 => truncated[..=end].to_string(),
        _ => truncated,
    }
}

/// Drafts post bodies with a hosted model.
#[derive(Clone)]
pub struct AiPostGenerator {
    provider: Arc<dyn Provider>,
    options: GenerationOptions,
}

impl AiPostGenerator {
    pub fn new(provider: Arc<dyn Provider>, options: GenerationOptions) -> Self {
        Self { provider, options }
    }

    /// Ask the provider whether it is reachable.
    pub async fn health_check(&self) -> Result<bool, ProviderError> {
        self.provider.health_check().await
    }

    /// Generate a cleaned, length-bounded post body.
    pub async fn generate(
        &self,
        topic: &str,
        tone: &str,
        post_type: &str,
    ) -> Result<String, GenerationError> {
        let ctx = PromptContext {
            topic,
            tone,
            post_type,
            max_length: self.options.max_length,
            model: &self.options.model,
        };

        let request = ProviderRequest::new(
            ctx.model,
            vec![Message::system(SYSTEM_PROMPT), Message::user(build_prompt(&ctx))],
        )
        .with_max_tokens(self.options.token_budget())
        .with_temperature(self.options.temperature);

        debug!(
            provider = %self.provider.name(),
            model = %ctx.model,
            max_tokens = ?request.max_tokens,
            "Requesting AI post"
        );

        let response = self.provider.complete(request).await.map_err(|e| {
            warn!(provider = %self.provider.name(), error = %e, "AI post generation failed");
            GenerationError::from(e)
        })?;

        let cleaned = clean_response(&response.message.content);
        if cleaned.is_empty() {
            warn!(provider = %self.provider.name(), "AI post generation returned no usable text");
            return Err(GenerationError::EmptyResponse);
        }

        Ok(enforce_length(cleaned, self.options.max_length))
    }
}
