//! # Remote Analysis Client
//!
//! Sends scan findings to a cloud text-generation endpoint and returns the
//! narrative. Strictly a non-critical enhancement: callers surface failures
//! as inline text on the affected entry and carry on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("analysis service returned {status}")]
    Status { status: u16 },
    #[error("empty response from analysis service")]
    EmptyResponse,
}

/// Turns findings for one device into a short narrative.
#[async_trait]
pub trait Analyst: Send + Sync {
    async fn analyze(&self, addr: &str, findings: &[String]) -> Result<String, AnalysisError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiAnalyst {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiAnalyst {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    fn prompt(addr: &str, findings: &[String]) -> String {
        format!(
            "You are a home network security assistant. A scan of device {addr} \
             reported the following:\n{}\nIn two or three plain sentences, explain \
             the practical risk and the single most useful next step. No markdown.",
            findings
                .iter()
                .map(|finding| format!("- {finding}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

#[async_trait]
impl Analyst for GeminiAnalyst {
    async fn analyze(&self, addr: &str, findings: &[String]) -> Result<String, AnalysisError> {
        let request = GenerateRequest::from_prompt(Self::prompt(addr, findings));

        let response = self
            .client
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        body.first_text().ok_or(AnalysisError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn from_prompt(text: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .next()
            .filter(|text| !text.trim().is_empty())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
