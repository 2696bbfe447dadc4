//! Post request/result value objects and the closed vocabularies of tone and
//! post type.
//!
//! Tone and post type travel as the caller's raw strings so that results echo
//! exactly what was asked for. Unknown names are not rejected here; each
//! component resolves them to its own defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Metadata tag stamped on every result.
pub const POST_KIND: &str = "linkedin_post";

/// Advisory posting window included in every result.
pub const RECOMMENDED_POST_TIME: &str = "Tuesday or Thursday between 10-11am";

/// Stylistic register of the generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Thoughtful,
    Inspirational,
    Analytical,
    Casual,
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Thoughtful,
        Tone::Inspirational,
        Tone::Analytical,
        Tone::Casual,
        Tone::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Thoughtful => "thoughtful",
            Tone::Inspirational => "inspirational",
            Tone::Analytical => "analytical",
            Tone::Casual => "casual",
            Tone::Technical => "technical",
        }
    }

    /// Look up a tone by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of content intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    #[default]
    ThoughtLeadership,
    IndustryInsight,
    CareerTip,
    CompanyUpdate,
    IndustryNews,
    CaseStudy,
    PersonalAchievement,
}

impl PostType {
    pub const ALL: [PostType; 7] = [
        PostType::ThoughtLeadership,
        PostType::IndustryInsight,
        PostType::CareerTip,
        PostType::CompanyUpdate,
        PostType::IndustryNews,
        PostType::CaseStudy,
        PostType::PersonalAchievement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::ThoughtLeadership => "thought_leadership",
            PostType::IndustryInsight => "industry_insight",
            PostType::CareerTip => "career_tip",
            PostType::CompanyUpdate => "company_update",
            PostType::IndustryNews => "industry_news",
            PostType::CaseStudy => "case_study",
            PostType::PersonalAchievement => "personal_achievement",
        }
    }

    /// Look up a post type by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the post body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    Ai,
    Template,
}

impl GenerationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::Ai => "ai",
            GenerationMethod::Template => "template",
        }
    }
}

/// A request to generate one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    /// Subject of the post. Must be non-blank.
    #[serde(default)]
    pub topic: String,

    /// Tone name (default "professional")
    #[serde(default = "default_tone")]
    pub tone: String,

    /// Append generated hashtags (default true)
    #[serde(default = "default_true")]
    pub include_hashtags: bool,

    /// Post type name (default "thought_leadership")
    #[serde(default = "default_post_type")]
    pub post_type: String,
}

fn default_tone() -> String {
    Tone::default().as_str().into()
}
fn default_post_type() -> String {
    PostType::default().as_str().into()
}
fn default_true() -> bool {
    true
}

impl PostRequest {
    /// A request for `topic` with every other field at its default.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: default_tone(),
            include_hashtags: true,
            post_type: default_post_type(),
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    pub fn with_hashtags(mut self, include: bool) -> Self {
        self.include_hashtags = include;
        self
    }

    /// Reject requests without a usable topic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        Ok(())
    }
}

/// Descriptive data attached to a generated post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub topic: String,
    pub tone: String,
    pub post_type: String,
    pub generation_method: GenerationMethod,
    /// Length of the final content in characters
    pub character_count: usize,
    pub recommended_post_time: String,
    pub generated_at: DateTime<Utc>,
}

/// A finished post plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResult {
    pub content: String,
    pub metadata: PostMetadata,
}

impl PostResult {
    /// Wrap final content with metadata derived from the request.
    pub fn assemble(content: String, request: &PostRequest, method: GenerationMethod) -> Self {
        let metadata = PostMetadata {
            kind: POST_KIND.into(),
            topic: request.topic.clone(),
            tone: request.tone.clone(),
            post_type: request.post_type.clone(),
            generation_method: method,
            character_count: content.chars().count(),
            recommended_post_time: RECOMMENDED_POST_TIME.into(),
            generated_at: Utc::now(),
        };
        Self { content, metadata }
    }
}
