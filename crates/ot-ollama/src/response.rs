//! Structured response contract for Ollama models.

use serde::Deserialize;
use serde_json::{Value, json};

use ot_engine::{AnalysisResult, Citation, Probability};

/// JSON schema passed as Ollama's `format` parameter.
///
/// Constrains the model to emit a machine-readable object that maps
/// directly onto [`StructuredAnalysis`], so no text parsing is needed.
pub fn response_format() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "An ALL-CAPS dramatic title summarising the situation"
            },
            "summary": {
                "type": "string",
                "description": "2-3 sentences of alarming pseudo-academic insight"
            },
            "probabilities": {
                "type": "array",
                "description": "3-5 entries that must sum to exactly 100",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "percentage": { "type": "number" }
                    },
                    "required": ["label", "percentage"]
                }
            },
            "risk_index": {
                "type": "integer",
                "description": "Emotional Risk Index, 0-100",
                "minimum": 0,
                "maximum": 100
            },
            "risk_justification": {
                "type": "string",
                "description": "One sentence justifying the risk index score"
            },
            "citations": {
                "type": "array",
                "description": "2-3 entirely fabricated but plausible academic citations",
                "items": {
                    "type": "object",
                    "properties": {
                        "source": { "type": "string" }
                    },
                    "required": ["source"]
                }
            },
            "conclusion": {
                "type": "string",
                "description": "2-3 sentences of theatrical finality"
            },
            "closing_remark": {
                "type": "string",
                "description": "One self-aware, witty closing sentence"
            }
        },
        "required": [
            "title", "summary", "probabilities",
            "risk_index", "risk_justification",
            "citations", "conclusion", "closing_remark"
        ]
    })
}

/// The structured JSON object the model must return.
#[derive(Debug, Deserialize)]
pub struct StructuredAnalysis {
    /// Dramatic ALL-CAPS title.
    pub title: String,
    /// Executive summary.
    pub summary: String,
    /// Probability breakdown as the model reported it.
    pub probabilities: Vec<ProbabilityEntry>,
    /// Emotional Risk Index as the model reported it.
    pub risk_index: i64,
    /// One-sentence justification for the risk index. The record has no
    /// slot for it, so conversion drops it.
    pub risk_justification: String,
    /// Fabricated citations, unindexed.
    pub citations: Vec<CitationEntry>,
    /// Theatrical conclusion.
    pub conclusion: String,
    /// Self-aware closing sentence.
    pub closing_remark: String,
}

/// One probability entry in the model's response.
#[derive(Debug, Deserialize)]
pub struct ProbabilityEntry {
    /// Outcome description.
    pub label: String,
    /// Percentage assigned to this outcome.
    pub percentage: f64,
}

/// One citation entry in the model's response.
#[derive(Debug, Deserialize)]
pub struct CitationEntry {
    /// The fabricated reference string.
    pub source: String,
}

impl StructuredAnalysis {
    /// Convert into the shared analysis record.
    ///
    /// The risk index is clamped into 0-100; probabilities are passed
    /// through exactly as the model reported them; citation indices are
    /// assigned 1-based in response order.
    pub fn into_result(self) -> AnalysisResult {
        let probabilities = self
            .probabilities
            .into_iter()
            .map(|p| Probability {
                label: p.label,
                percentage: p.percentage,
            })
            .collect();

        let citations = self
            .citations
            .into_iter()
            .enumerate()
            .map(|(i, c)| Citation {
                index: i as u32 + 1,
                source: c.source,
            })
            .collect();

        AnalysisResult {
            title: self.title,
            summary: self.summary,
            probabilities,
            risk_index: self.risk_index.clamp(0, 100) as u32,
            citations,
            conclusion: self.conclusion,
            closing_line: self.closing_remark,
        }
    }
}
