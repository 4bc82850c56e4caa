//! Analysis assembly and the backend contract.

use rand::rngs::StdRng;

use crate::citation::generate_citations;
use crate::error::EngineResult;
use crate::narrative::{generate_closing_line, generate_conclusion, generate_summary};
use crate::probability::generate_probabilities;
use crate::random::{new_rng, seeded_rng};
use crate::result::AnalysisResult;
use crate::risk::risk_index;
use crate::title::generate_title;

/// Error type shared by every analysis backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Common interface for analysis backends.
///
/// Implemented by [`LocalThinker`] and by the Ollama client. Callers that
/// delegate to an external backend fall back to the built-in engine when
/// it returns an error.
pub trait Thinker {
    /// Produce a complete analysis for the given question.
    fn analyze(&self, question: &str) -> Result<AnalysisResult, BackendError>;
}

/// Assemble a complete analysis using a fresh clock-seeded RNG, so each
/// run produces different, equally authoritative findings.
pub fn analyze(question: &str) -> EngineResult<AnalysisResult> {
    analyze_with(question, &mut new_rng())
}

/// Assemble a complete analysis from a fixed seed for reproducible output.
pub fn analyze_seeded(question: &str, seed: u64) -> EngineResult<AnalysisResult> {
    analyze_with(question, &mut seeded_rng(seed))
}

fn analyze_with(question: &str, rng: &mut StdRng) -> EngineResult<AnalysisResult> {
    Ok(AnalysisResult {
        title: generate_title(question, rng)?,
        summary: generate_summary(rng)?.to_string(),
        probabilities: generate_probabilities(rng),
        risk_index: risk_index(question, rng),
        citations: generate_citations(rng)?,
        conclusion: generate_conclusion(rng)?.to_string(),
        closing_line: generate_closing_line(rng)?.to_string(),
    })
}

/// The built-in analysis backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThinker {
    /// Fixed RNG seed; a clock seed is used when absent.
    pub seed: Option<u64>,
}

impl LocalThinker {
    /// Backend with a fixed seed for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Thinker for LocalThinker {
    fn analyze(&self, question: &str) -> Result<AnalysisResult, BackendError> {
        let result = match self.seed {
            Some(seed) => analyze_seeded(question, seed),
            None => analyze(question),
        }?;
        Ok(result)
    }
}
