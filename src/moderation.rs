use serde_json::Value;

use crate::llm::{Prompt, ResponseFormat};

const SYSTEM_PROMPT: &str = "You are a content moderation assistant. Analyze the provided website summary and determine if the website is legitimate and safe. A legitimate website should NOT contain pornographic content, illicit material, illegal activities, or harmful content. Respond with a JSON object containing \"isLegit\" (boolean) and \"reason\" (string explaining your decision).";

/// Words whose presence in an unparsable reply counts as a positive verdict.
const POSITIVE_MARKERS: [&str; 3] = ["true", "legitimate", "safe"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegitimacyVerdict {
    pub is_legit: bool,
    pub reason: String,
}

impl LegitimacyVerdict {
    /// Verdict recorded when the judgment call itself fails.
    pub fn unverified(cause: impl std::fmt::Display) -> Self {
        Self {
            is_legit: false,
            reason: format!("Failed to verify legitimacy: {}", cause),
        }
    }
}

pub fn build_prompt(title: Option<&str>, summary: &str) -> Prompt {
    let user = format!(
        "Analyze the following website summary and determine if this website is legitimate (no pornographic, illicit, or harmful content):\n\nTitle: {}\n\nSummary: {}\n\nRespond with ONLY a valid JSON object in this format: {{\"isLegit\": true/false, \"reason\": \"your explanation here\"}}",
        title.unwrap_or("N/A"),
        summary
    );

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
        temperature: 0.3,
        format: ResponseFormat::JsonObject,
    }
}

/// Reads the model's reply as JSON, falling back to a substring scan of the
/// raw text when it does not parse or is `null`.
pub fn parse_verdict(reply: &str) -> LegitimacyVerdict {
    if reply.trim().is_empty() {
        return LegitimacyVerdict {
            is_legit: false,
            reason: "Moderation model returned an empty response".to_string(),
        };
    }

    match serde_json::from_str::<Value>(reply) {
        Ok(Value::Null) | Err(_) => heuristic_verdict(reply),
        // Scalars and arrays have no fields, so they read as not legit
        Ok(value) => LegitimacyVerdict {
            is_legit: value.get("isLegit") == Some(&Value::Bool(true)),
            reason: value
                .get("reason")
                .and_then(Value::as_str)
                .filter(|r| !r.is_empty())
                .unwrap_or("No reason provided")
                .to_string(),
        },
    }
}

fn heuristic_verdict(reply: &str) -> LegitimacyVerdict {
    let lowered = reply.to_lowercase();
    LegitimacyVerdict {
        is_legit: POSITIVE_MARKERS.iter().any(|m| lowered.contains(m)),
        reason: reply.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reply_is_used_directly() {
        let verdict = parse_verdict(r#"{"isLegit": true, "reason": "no harmful content"}"#);
        assert_eq!(
            verdict,
            LegitimacyVerdict {
                is_legit: true,
                reason: "no harmful content".to_string()
            }
        );

        let verdict = parse_verdict(r#"{"isLegit": false, "reason": "gambling"}"#);
        assert!(!verdict.is_legit);
        assert_eq!(verdict.reason, "gambling");
    }

    #[test]
    fn only_literal_true_passes() {
        assert!(!parse_verdict(r#"{"isLegit": "true"}"#).is_legit);
        assert!(!parse_verdict(r#"{"isLegit": 1}"#).is_legit);
        assert!(!parse_verdict(r#"{"verdict": true}"#).is_legit);
    }

    #[test]
    fn json_that_is_not_an_object_is_not_legit() {
        for reply in ["true", "\"safe\"", "[\"legitimate\"]", "42"] {
            let verdict = parse_verdict(reply);
            assert!(!verdict.is_legit, "reply: {}", reply);
            assert_eq!(verdict.reason, "No reason provided");
        }
    }

    #[test]
    fn json_null_uses_substring_scan() {
        let verdict = parse_verdict("null");
        assert!(!verdict.is_legit);
        assert_eq!(verdict.reason, "null");
    }

    #[test]
    fn missing_reason_gets_placeholder() {
        let verdict = parse_verdict(r#"{"isLegit": true}"#);
        assert_eq!(verdict.reason, "No reason provided");
    }

    #[test]
    fn malformed_reply_uses_substring_scan() {
        let verdict = parse_verdict("The site looks SAFE to me");
        assert!(verdict.is_legit);
        assert_eq!(verdict.reason, "The site looks SAFE to me");

        let verdict = parse_verdict("{isLegit: true");
        assert!(verdict.is_legit);

        let verdict = parse_verdict("This page hosts pirated material.");
        assert!(!verdict.is_legit);
    }

    #[test]
    fn empty_reply_is_not_legit() {
        assert!(!parse_verdict("").is_legit);
        assert!(!parse_verdict("  \n").is_legit);
    }

    #[test]
    fn call_failure_is_recorded_as_not_legit() {
        let verdict = LegitimacyVerdict::unverified("timeout");
        assert!(!verdict.is_legit);
        assert_eq!(verdict.reason, "Failed to verify legitimacy: timeout");
    }

    #[test]
    fn prompt_carries_title_and_summary() {
        let prompt = build_prompt(None, "A benign test page.");
        assert!(prompt.user.contains("Title: N/A"));
        assert!(prompt.user.contains("Summary: A benign test page."));
        assert_eq!(prompt.format, ResponseFormat::JsonObject);
    }
}
