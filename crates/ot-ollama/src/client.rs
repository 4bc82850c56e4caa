//! HTTP client for a locally running Ollama server.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use ot_engine::{AnalysisResult, BackendError, Thinker};

use crate::error::{OllamaError, OllamaResult};
use crate::response::{StructuredAnalysis, response_format};

/// System prompt establishing the OVERTHINK persona for every query.
const SYSTEM_PROMPT: &str = "You are an excessively dramatic analytical engine called OVERTHINK.

Your sole purpose is to overanalyze simple questions with theatrical, pseudo-academic intensity.

Rules:
- Treat every question as a matter of profound significance.
- Use dramatic vocabulary. Never say \"maybe\" when you can say \"with alarming probability.\"
- All statistics are fabricated but must sound rigorous. Probabilities must sum to exactly 100.
- Citations are fictional. Author names optional. Years required.
- Tone: confident, pseudo-academic, self-aware, slightly absurd.
- Do NOT add disclaimers about being an AI.
- You are OVERTHINK. Act accordingly.";

/// Default Ollama endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:11434";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Environment variable overriding the Ollama endpoint.
pub const ENDPOINT_ENV: &str = "OVERTHINK_OLLAMA_HOST";

/// Wire shape of Ollama's non-streaming generate reply. The structured
/// analysis arrives JSON-encoded inside `response`.
#[derive(Debug, Deserialize)]
struct GenerateReply {
    response: String,
}

/// Client for one Ollama model.
#[derive(Debug, Clone)]
pub struct Client {
    model: String,
    endpoint: String,
    timeout: Duration,
}

impl Client {
    /// Client for the given model name (e.g. "llama3", "mistral").
    ///
    /// The endpoint defaults to [`DEFAULT_ENDPOINT`] unless the
    /// [`ENDPOINT_ENV`] environment variable is set.
    pub fn new(model: impl Into<String>) -> Self {
        let endpoint = env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self {
            model: model.into(),
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the server endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Query the model and convert its structured reply into an analysis
    /// record.
    pub fn query(&self, question: &str) -> OllamaResult<AnalysisResult> {
        let http = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let url = format!("{}/api/generate", self.endpoint.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "system": SYSTEM_PROMPT,
            "prompt": question,
            "stream": false,
            "format": response_format(),
        });

        let reply = http.post(url).json(&body).send()?;
        let status = reply.status();
        if !status.is_success() {
            let detail = reply.text().unwrap_or_default().trim().to_string();
            return Err(OllamaError::ModelFailed {
                model: self.model.clone(),
                status: status.as_u16(),
                detail,
            });
        }

        let generate: GenerateReply = reply.json()?;
        let raw = generate.response.trim();
        if raw.is_empty() {
            return Err(OllamaError::EmptyResponse {
                model: self.model.clone(),
            });
        }

        let structured: StructuredAnalysis = serde_json::from_str(raw)?;
        Ok(structured.into_result())
    }
}

impl Thinker for Client {
    fn analyze(&self, question: &str) -> Result<AnalysisResult, BackendError> {
        Ok(self.query(question)?)
    }
}
