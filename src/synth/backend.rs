use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the generative backend credential.
pub const AUTH_ENV_VAR: &str = "OPENAI_API_KEY";

/// Model requested from the generative backend.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Bound on any single backend call. A timeout is a per-call failure like
/// any other backend error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An error from a single generative-backend call.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The HTTP request failed, timed out, or returned an error status.
    #[error("backend request failed")]
    Http(#[from] reqwest::Error),

    /// The response was well-formed but carried no completion text.
    #[error("backend response contained no completion")]
    EmptyResponse,
}

/// Transport seam between [`AiSynthesizer`](super::AiSynthesizer) and the
/// generative-language service.
///
/// The production implementation is [`HttpBackend`]; tests substitute canned
/// or failing transports to exercise the fallback policy.
pub trait ChatBackend {
    /// Sends `prompt` to the backend and returns the completion text
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no
    /// text. Callers treat any error as a signal to degrade that single
    /// call.
    fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Blocking HTTP transport to the chat-completions endpoint.
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl HttpBackend {
    /// Builds a client for the given credential, with a bounded request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed; the caller treats this as a permanent downgrade to
    /// template output.
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }
}

impl ChatBackend for HttpBackend {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response: ChatResponse = self
            .client
            .post(ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(BackendError::EmptyResponse)
    }
}
