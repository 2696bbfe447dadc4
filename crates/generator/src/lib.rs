//! The post generation pipeline.
//!
//! A request flows through the [`PostGenerator`]:
//!
//! 1. **Draft** the body with the AI generator when a provider is configured
//! 2. **Fall back** to the template table when there is no provider or the
//!    AI call fails
//! 3. **Compose**: append hashtags if requested, break paragraphs and add the
//!    closing question
//! 4. **Assemble** the [`PostResult`](postcraft_core::PostResult) with metadata

pub mod ai_generator;
pub mod format;
pub mod orchestrator;
pub mod templates;

#[cfg(test)]
mod test_helpers;

pub use ai_generator::{
    AiPostGenerator, DEFAULT_MAX_LENGTH, DEFAULT_MODEL, GenerationOptions, PromptContext,
    build_prompt, clean_response, enforce_length,
};
pub use format::{format_post, generate_hashtags};
pub use orchestrator::{Draft, PostGenerator};
pub use templates::{TemplateOptions, get_template, template_options};
