//! Hashtag derivation and final post formatting.

/// Most hashtags a post carries.
const MAX_HASHTAGS: usize = 5;

/// Always-eligible tags, appended after the topic tags.
const BASE_HASHTAGS: [&str; 2] = ["#Leadership", "#Innovation"];

fn post_type_hashtags(post_type: &str) -> &'static [&'static str] {
    match post_type {
        "thought_leadership" => &["#ThoughtLeadership", "#FutureOfWork"],
        "industry_insight" => &["#IndustryTrends", "#MarketInsights"],
        "career_tip" => &["#CareerAdvice", "#ProfessionalGrowth"],
        "company_update" => &["#CompanyNews", "#BusinessGrowth"],
        _ => &[],
    }
}

/// Turn a topic word into a hashtag: ASCII alphanumerics only, first letter
/// upper-cased. Words with nothing left after stripping yield `None`.
fn word_hashtag(word: &str) -> Option<String> {
    let mut chars = word.chars().filter(char::is_ascii_alphanumeric);
    let first = chars.next()?;
    let mut tag = String::with_capacity(word.len() + 1);
    tag.push('#');
    tag.push(first.to_ascii_uppercase());
    tag.extend(chars);
    Some(tag)
}

/// Derive up to five space-separated hashtags for a post.
///
/// Order: post-type tags, then tags from topic words longer than three
/// characters, then the base tags.
pub fn generate_hashtags(topic: &str, post_type: &str) -> String {
    let topic_tags = topic
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .filter_map(word_hashtag);

    post_type_hashtags(post_type)
        .iter()
        .map(|tag| (*tag).to_string())
        .chain(topic_tags)
        .chain(BASE_HASHTAGS.iter().map(|tag| (*tag).to_string()))
        .take(MAX_HASHTAGS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Break paragraphs after each sentence and close with an engagement question.
pub fn format_post(text: &str, topic: &str) -> String {
    let with_paragraphs = text.replace(". ", ".\n\n");
    format!("{with_paragraphs}\n\nWhat's your experience with {topic}?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thought_leadership_tags_come_first() {
        let tags = generate_hashtags("Machine Learning Strategy", "thought_leadership");
        assert_eq!(
            tags,
            "#ThoughtLeadership #FutureOfWork #Machine #Learning #Strategy"
        );
        let tokens: Vec<&str> = tags.split(' ').collect();
        assert!(tokens.len() <= 5);
        assert!(tokens.iter().all(|t| t.starts_with('#')));
    }

    #[test]
    fn base_tags_are_cut_at_five() {
        let tags = generate_hashtags("Remote Work", "career_tip");
        assert_eq!(
            tags,
            "#CareerAdvice #ProfessionalGrowth #Remote #Work #Leadership"
        );
    }

    #[test]
    fn short_words_are_skipped() {
        let tags = generate_hashtags("AI in HR", "company_update");
        assert_eq!(tags, "#CompanyNews #BusinessGrowth #Leadership #Innovation");
    }

    #[test]
    fn unknown_post_type_has_no_type_tags() {
        let tags = generate_hashtags("Cloud Costs", "case_study");
        assert_eq!(tags, "#Cloud #Costs #Leadership #Innovation");
    }

    #[test]
    fn punctuation_is_stripped_and_first_letter_capitalized() {
        let tags = generate_hashtags("data-driven (hiring)", "unknown");
        assert_eq!(tags, "#Datadriven #Hiring #Leadership #Innovation");
    }

    #[test]
    fn words_with_no_alphanumerics_are_dropped() {
        let tags = generate_hashtags("---- growth", "unknown");
        assert_eq!(tags, "#Growth #Leadership #Innovation");
    }

    #[test]
    fn format_breaks_sentences_and_appends_question() {
        let out = format_post("AI is transforming work. It changes roles.", "AI");
        assert_eq!(
            out,
            "AI is transforming work.\n\nIt changes roles.\n\nWhat's your experience with AI?"
        );
        assert!(out.ends_with("What's your experience with AI?"));
    }

    #[test]
    fn format_leaves_terminal_period_alone() {
        let out = format_post("One sentence.", "Focus");
        assert_eq!(out, "One sentence.\n\nWhat's your experience with Focus?");
    }

    #[test]
    fn format_handles_decimal_points_without_spaces() {
        let out = format_post("Growth hit 3.5x. Nice", "Growth");
        assert!(out.starts_with("Growth hit 3.5x.\n\nNice"));
    }
}
