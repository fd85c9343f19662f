use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::llm::{Prompt, ResponseFormat};

const SYSTEM_PROMPT: &str = "You are a website categorization assistant. Analyze the website summary and generate relevant keywords/tags that describe what the website is about. Return ONLY a comma-separated list of keywords (5-10 keywords). Focus on the main topics, industry, content type, and purpose of the website.";

const MAX_FALLBACK_TAGS: usize = 10;

const QUOTES: [char; 2] = ['"', '\''];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "should", "could", "may", "might", "must", "can",
    ]
    .into_iter()
    .collect()
});

pub fn build_prompt(title: Option<&str>, summary: &str) -> Prompt {
    let user = format!(
        "Generate relevant meta tags (keywords) for this website:\n\nTitle: {}\n\nSummary: {}\n\nReturn ONLY a comma-separated list of keywords, nothing else. Example: \"technology, programming, web development, tutorials, education\"",
        title.unwrap_or("N/A"),
        summary
    );

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
        temperature: 0.5,
        format: ResponseFormat::Text,
    }
}

/// Cleans a model reply into a `", "` separated keyword list.
///
/// Quotes are dropped only when they wrap the whole reply; line breaks count
/// as separators. Cleaning repeats until nothing changes, so the output is a
/// fixed point of this function.
pub fn normalize(reply: &str) -> String {
    let mut current = clean(reply);
    loop {
        let next = clean(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean(reply: &str) -> String {
    let trimmed = reply.trim();
    let trimmed = if trimmed.len() >= 2 && trimmed.starts_with(QUOTES) && trimmed.ends_with(QUOTES) {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    trimmed
        .split([',', '\n'])
        .map(|entry| entry.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|entry| !entry.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keywords picked straight out of the title and summary text.
pub fn fallback(title: Option<&str>, summary: &str) -> String {
    let text = format!("{} {}", title.unwrap_or(""), summary).to_lowercase();
    let mut seen = HashSet::new();

    text.split_whitespace()
        .filter(|word| word.chars().count() > 3 && !STOPWORDS.contains(word))
        .filter(|word| seen.insert(*word))
        .take(MAX_FALLBACK_TAGS)
        .collect::<Vec<_>>()
        .join(", ")
}
