/// LLM Client — the single point of entry for all Gemini API calls in Rahnuma.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API
/// directly. All guidance generation MUST go through `GuidanceClient`.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// The generateContent endpoint used for all guidance calls.
/// The API key is appended as a `key` query parameter per the Gemini contract.
pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Marker used when the service returns an error payload without a message.
const NO_SPECIFIC_MESSAGE: &str = "No specific error message.";

/// Closed error set for a single guidance call. Every variant is terminal —
/// there is no retry here; callers decide whether to ask the user to try again.
#[derive(Debug, Error)]
pub enum GuidanceError {
    /// Transport failure or non-2xx status from the API.
    /// `status` is present when an HTTP response was actually received.
    #[error("network error: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode API response: {reason}")]
    Parse { reason: String, body: String },

    /// Valid JSON, but `candidates[0].content.parts[0].text` is missing.
    /// Carries the service's declared `error.message` when there is one,
    /// and the full raw body for diagnostics.
    #[error("unexpected API response structure: {message}")]
    MalformedResponse { message: String, raw: String },
}

impl From<reqwest::Error> for GuidanceError {
    fn from(e: reqwest::Error) -> Self {
        GuidanceError::Network {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

// Response structs are all-optional on purpose: any missing piece of the
// candidates path is a contract violation we classify ourselves, not a
// deserialization failure.

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// The single LLM client used by both callers (HTTP API and console).
/// Holds the immutable API key and endpoint; safe to clone and to call
/// concurrently, each `generate` is one independent outbound request.
#[derive(Clone)]
pub struct GuidanceClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GuidanceClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, GEMINI_API_URL.to_string())
    }

    /// Same client against a non-default endpoint. Used by the integration
    /// tests to point at a local stub server.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint,
        }
    }

    /// Builds the counselor prompt from the profile and study level, makes
    /// one generateContent call, and returns the generated text verbatim.
    pub async fn generate(
        &self,
        profile: &str,
        study_level: &str,
    ) -> Result<String, GuidanceError> {
        let prompt = prompts::build_guidance_prompt(profile, study_level);

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Gemini API returned {}: {}", status, body);
            return Err(GuidanceError::Network {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        let text = extract_guidance_text(&body)?;
        debug!("guidance call succeeded ({} bytes)", text.len());
        Ok(text)
    }
}

/// Classifies a 2xx response body: the first candidate's first part's text
/// on success, `Parse` for non-JSON, `MalformedResponse` for JSON that does
/// not carry the expected path (an empty candidate list included).
fn extract_guidance_text(body: &str) -> Result<String, GuidanceError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GuidanceError::Parse {
            reason: e.to_string(),
            body: body.to_string(),
        })?;

    let text = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|p| p.text);

    match text {
        Some(t) => Ok(t),
        None => Err(GuidanceError::MalformedResponse {
            message: response
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| NO_SPECIFIC_MESSAGE.to_string()),
            raw: body.to_string(),
        }),
    }
}
