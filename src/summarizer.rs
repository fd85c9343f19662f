use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::api::models::SummarizeResponse;
use crate::config::Config;
use crate::error::{AppError, ClientError, Collaborator, Result};
use crate::exa::{ContentSource, ExaClient};
use crate::llm::{ChatModel, GroqClient};
use crate::moderation::{self, LegitimacyVerdict};
use crate::tags;

const NO_SUMMARY: &str = "No summary available";

/// Title and summary of the first document the content service returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSummary {
    pub title: Option<String>,
    pub summary: String,
}

/// Runs one URL through content retrieval, moderation and tagging.
pub struct Summarizer {
    source: Arc<dyn ContentSource>,
    model: Arc<dyn ChatModel>,
}

impl Summarizer {
    pub fn new(source: Arc<dyn ContentSource>, model: Arc<dyn ChatModel>) -> Self {
        Self { source, model }
    }

    /// Builds the Exa and Groq clients, failing when a credential is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let creds = config.credentials()?;

        let source = ExaClient::new(creds.exa_api_key, &config.exa_api_url, config.request_timeout)
            .map_err(|e| AppError::ConfigError(format!("Failed to build Exa client: {}", e)))?;
        let model = GroqClient::new(
            creds.groq_api_key,
            &config.groq_api_url,
            &config.groq_model,
            config.request_timeout,
        )
        .map_err(|e| AppError::ConfigError(format!("Failed to build Groq client: {}", e)))?;

        Ok(Self::new(Arc::new(source), Arc::new(model)))
    }

    pub async fn summarize(&self, url: Option<&str>) -> Result<SummarizeResponse> {
        let url = validate_url(url)?;
        info!(%url, "Summarizing URL");

        let content = self.fetch_summary(url.as_str()).await?;
        debug!(
            has_title = content.title.is_some(),
            summary_len = content.summary.len(),
            "Fetched content summary"
        );

        let verdict = self.judge(&content).await?;
        info!(is_legit = verdict.is_legit, reason = %verdict.reason, "Legitimacy verdict");

        let meta_tags = self.extract_tags(&content).await;

        Ok(SummarizeResponse {
            pass: verdict.is_legit,
            meta_tags: Some(meta_tags).filter(|t| !t.is_empty()),
        })
    }

    async fn fetch_summary(&self, url: &str) -> Result<ContentSummary> {
        let results = self.source.get_contents(url).await.map_err(|e| {
            error!(error = %e, "Exa API error");
            if e.is_unauthorized() {
                AppError::Unauthorized(Collaborator::Exa)
            } else {
                AppError::Upstream(e.to_string())
            }
        })?;

        let first = results.into_iter().next().ok_or_else(|| {
            warn!(url, "No content found");
            AppError::NotFound
        })?;

        Ok(ContentSummary {
            title: first.title.filter(|t| !t.is_empty()),
            summary: first
                .summary
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
        })
    }

    async fn judge(&self, content: &ContentSummary) -> Result<LegitimacyVerdict> {
        let prompt = moderation::build_prompt(content.title.as_deref(), &content.summary);

        match self.model.complete(&prompt).await {
            Ok(reply) => Ok(moderation::parse_verdict(&reply)),
            Err(e) if e.is_unauthorized() => {
                error!(error = %e, "Groq rejected credentials during moderation");
                Err(AppError::Unauthorized(Collaborator::Groq))
            }
            Err(e) => {
                warn!(error = %e, "Moderation call failed, treating content as not legitimate");
                Ok(LegitimacyVerdict::unverified(failure_message(&e)))
            }
        }
    }

    async fn extract_tags(&self, content: &ContentSummary) -> String {
        let prompt = tags::build_prompt(content.title.as_deref(), &content.summary);

        match self.model.complete(&prompt).await {
            Ok(reply) => tags::normalize(&reply),
            Err(e) => {
                warn!(error = %e, "Tag generation failed, using keywords from the summary");
                tags::fallback(content.title.as_deref(), &content.summary)
            }
        }
    }
}

/// Rejects a missing, empty or unparsable URL before any external call.
pub fn validate_url(url: Option<&str>) -> Result<Url> {
    let url = url.filter(|u| !u.is_empty()).ok_or(AppError::MissingUrl)?;
    Url::parse(url).map_err(|_| AppError::InvalidUrl)
}

fn failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Api { body, .. } if !body.is_empty() => body.clone(),
        other => other.to_string(),
    }
}
