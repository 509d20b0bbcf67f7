//! HTTP client for the summary service.
//!
//! A small blocking client for the summary backend: narrative summaries for
//! a date range, tag suggestions for note text, and a health probe.

use crate::errors::{ApiError, AppResult};
use crate::journal::{Entry, Mood};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive date range for a summary request.
#[derive(Debug, Serialize)]
struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Request body for summary generation.
#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    date_range: DateRange,
    entries: Vec<&'a Entry>,
    focus: &'a str,
}

/// Response from summary generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResponse {
    /// Narrative summary text.
    pub summary: String,
    /// Key highlights, in presentation order.
    pub highlights: Vec<String>,
}

/// Request body for tag analysis.
#[derive(Debug, Serialize)]
struct TagAnalysisRequest<'a> {
    text: &'a str,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    mood: Option<&'a Mood>,
}

/// Tag suggestions extracted from note text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagAnalysis {
    /// Suggested tags.
    pub tags: Vec<String>,
    /// Confidence score in 0–1.
    pub confidence: f64,
}

/// Client for the summary service API.
pub struct SummaryClient {
    base_url: String,
    client: Client,
}

impl SummaryClient {
    /// Creates a new summary service client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the service (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Generates a narrative summary for a date range.
    ///
    /// # Arguments
    ///
    /// * `start`, `end` - Inclusive date range
    /// * `entries` - The journal entries within the range
    /// * `focus` - Optional focus area (e.g. "mood", "activities"); the
    ///   service defaults to "all"
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The service is not reachable
    /// - The service returns a failure status
    /// - The response payload can't be parsed
    pub fn generate_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        entries: &[&Entry],
        focus: Option<&str>,
    ) -> AppResult<SummaryResponse> {
        debug!(
            "Requesting summary for {}..{} ({} entries)",
            start,
            end,
            entries.len()
        );

        let url = format!("{}/api/summaries/generate", self.base_url);
        let request = SummaryRequest {
            date_range: DateRange { start, end },
            entries: entries.to_vec(),
            focus: focus.unwrap_or("all"),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(ApiError::Offline)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Http { status, body }.into());
        }

        let summary: SummaryResponse = response.json().map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse summary response: {}", e))
        })?;

        debug!(
            "Received summary ({} chars, {} highlights)",
            summary.summary.len(),
            summary.highlights.len()
        );
        Ok(summary)
    }

    /// Suggests tags for an entry's note text.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, rejects the request,
    /// or returns an unparseable payload. Callers that only want best-effort
    /// suggestions should degrade to an empty list.
    pub fn analyze_tags(
        &self,
        text: &str,
        date: NaiveDate,
        mood: Option<&Mood>,
    ) -> AppResult<TagAnalysis> {
        debug!("Requesting tag analysis for {}", date);

        let url = format!("{}/api/analyze/tags", self.base_url);
        let request = TagAnalysisRequest { text, date, mood };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(ApiError::Offline)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Http { status, body }.into());
        }

        let analysis: TagAnalysis = response.json().map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse tag analysis response: {}", e))
        })?;

        debug!(
            "Received {} tag suggestions (confidence {:.2})",
            analysis.tags.len(),
            analysis.confidence
        );
        Ok(analysis)
    }

    /// Probes whether the summary service is reachable and healthy.
    ///
    /// Never fails — an unreachable service is simply `false`.
    pub fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send() {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }
}
