//! Dramatic title extraction.
//!
//! Pulls the meaningful content words out of the question and welds them
//! onto a randomly chosen prefix/noun pair, in ALL CAPS, as is proper.

use rand::rngs::StdRng;

use crate::error::EngineResult;
use crate::random::pick_one;

/// Dramatic title prefixes (14 entries).
pub const DRAMATIC_PREFIXES: &[&str] = &[
    "THE INEVITABLE",
    "THE CATASTROPHIC",
    "THE UNRESOLVED",
    "THE IRREVERSIBLE",
    "THE DEEPLY ALARMING",
    "THE STATISTICALLY SIGNIFICANT",
    "THE EXISTENTIALLY CHARGED",
    "THE CHRONICALLY UNRESOLVED",
    "THE QUIETLY DEVASTATING",
    "THE ACADEMICALLY CONCERNING",
    "THE PERENNIALLY UNFINISHED",
    "THE SUSPICIOUSLY FAMILIAR",
    "THE UNCOMFORTABLY RELATABLE",
    "THE STRUCTURALLY INEVITABLE",
];

/// Dramatic title nouns (15 entries).
pub const DRAMATIC_NOUNS: &[&str] = &[
    "EMOTIONAL CASCADE",
    "COGNITIVE SPIRAL",
    "EXISTENTIAL TRAJECTORY",
    "PSYCHOLOGICAL UNDERTOW",
    "DECISION VORTEX",
    "ANALYTICAL PARADOX",
    "TEMPORAL RECKONING",
    "NEUROLOGICAL EVENT",
    "PHILOSOPHICAL QUANDARY",
    "INTERNAL MONOLOGUE",
    "CONSEQUENCE MATRIX",
    "ANXIETY FEEDBACK LOOP",
    "UNCERTAINTY GRADIENT",
    "NARRATIVE ARC",
    "RISK TOPOLOGY",
];

/// Common English function words excluded from title keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
    "her", "was", "one", "our", "out", "get", "has", "him", "his", "how",
    "its", "may", "now", "see", "two", "who", "did", "does", "any", "too",
    "that", "with", "this", "from", "they", "will", "have", "been", "into",
    "your", "when", "what", "more", "also", "than", "then", "some", "even",
    "just", "like", "over", "such", "here", "very", "much", "should",
    "would", "could", "there", "their", "theirs", "about", "these", "those",
    "where", "which", "while", "after", "before", "because", "being",
    "both", "each", "only", "same", "were", "again", "once", "under",
    "above", "below", "between", "during", "through", "until", "most",
    "many", "must", "whom", "whose", "upon", "ever", "every", "other",
];

/// Trim the surrounding punctuation class shared by the tokenizers.
pub(crate) fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '.' | ',' | '?' | '!' | ';' | ':' | '\'' | '"'))
}

/// Construct an ALL-CAPS title from the question.
///
/// Tokens longer than three characters that are not stop words survive;
/// the first four survivors become the subject, in their original order.
/// A question with no survivors still gets a title.
pub fn generate_title(question: &str, rng: &mut StdRng) -> EngineResult<String> {
    let prefix = pick_one(rng, DRAMATIC_PREFIXES)?;
    let noun = pick_one(rng, DRAMATIC_NOUNS)?;

    let lowered = question.to_lowercase();
    let meaningful: Vec<String> = lowered
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|w| w.len() > 3 && !STOP_WORDS.contains(w))
        .map(str::to_uppercase)
        .take(4)
        .collect();

    if meaningful.is_empty() {
        return Ok(format!("{prefix} {noun} OF THIS SITUATION"));
    }
    Ok(format!("{prefix} {noun} OF {}", meaningful.join(" ")))
}
