//! The analysis record shared by every backend.

use serde::{Deserialize, Serialize};

/// The complete output of one analysis pass.
///
/// Every field is populated before the record is handed to the formatter;
/// no partial records are observable. A record is built once per
/// invocation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Dramatic ALL-CAPS title.
    pub title: String,
    /// Executive summary sentence(s).
    pub summary: String,
    /// Pseudo-statistical breakdown; percentages sum to exactly 100.0.
    pub probabilities: Vec<Probability>,
    /// Emotional Risk Index, 0-100.
    pub risk_index: u32,
    /// Fabricated academic references, 1-indexed in order.
    pub citations: Vec<Citation>,
    /// Theatrical conclusion.
    pub conclusion: String,
    /// Self-aware closing remark.
    pub closing_line: String,
}

/// A single entry in the pseudo-statistical breakdown.
///
/// The label describes the outcome; the percentage is a suspiciously
/// precise number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probability {
    /// Outcome description.
    pub label: String,
    /// Percentage assigned to this outcome, one decimal place.
    pub percentage: f64,
}

/// A single fabricated academic reference.
///
/// All citations are entirely fictional. Any resemblance to real journals
/// is a symptom of academic overexposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// 1-based position in the citation list.
    pub index: u32,
    /// The fabricated reference string.
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serde_round_trip() {
        let result = AnalysisResult {
            title: "THE INEVITABLE SPIRAL OF TESTING".to_string(),
            summary: "It compiles, therefore it worries.".to_string(),
            probabilities: vec![
                Probability {
                    label: "chance of immediate regret".to_string(),
                    percentage: 62.5,
                },
                Probability {
                    label: "chance of consulting a horoscope".to_string(),
                    percentage: 37.5,
                },
            ],
            risk_index: 73,
            citations: vec![Citation {
                index: 1,
                source: "Journal of Theoretical What-Ifs et al. (2019)".to_string(),
            }],
            conclusion: "The outcome was decided before the test ran.".to_string(),
            closing_line: "You already knew this.".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, result.title);
        assert_eq!(back.probabilities, result.probabilities);
        assert_eq!(back.risk_index, 73);
        assert_eq!(back.citations, result.citations);
    }
}
