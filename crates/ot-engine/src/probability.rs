//! Pseudo-statistical probability synthesis.

use rand::Rng;
use rand::rngs::StdRng;

use crate::random::shuffled_copy;
use crate::result::Probability;

/// Canonical pool of dramatic outcome descriptions (18 entries).
///
/// Designed to sound plausible while remaining universally applicable to
/// any question a human might ask at 2am.
pub const OUTCOME_LABELS: &[&str] = &[
    "chance of immediate regret",
    "chance of mild existential dread",
    "chance of ambiguous, unresolvable outcome",
    "chance of catastrophic nostalgia",
    "chance of unexpected, inconvenient clarity",
    "chance of productive downward spiral",
    "chance of overanalyzing the analysis itself",
    "chance of dramatic internal monologue",
    "chance of second-guessing this decision tomorrow",
    "chance of googling the same question in 3 days",
    "chance of late-night retroactive justification",
    "chance of unsolicited opinion from a friend",
    "chance of creating a pros/cons list that solves nothing",
    "chance of consulting a horoscope",
    "chance of blaming Mercury retrograde",
    "chance of writing a journal entry about this",
    "chance of inexplicable calm followed by panic",
    "chance of doing it anyway regardless of this report",
];

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Produce 3-5 probability entries that sum to exactly 100.0.
///
/// All but the last entry are rounded weighted shares; the last entry
/// takes the rounded remainder, so the sum holds no matter how rounding
/// error lands on the earlier entries.
pub fn generate_probabilities(rng: &mut StdRng) -> Vec<Probability> {
    let count: usize = rng.random_range(3..=5);
    let chosen = shuffled_copy(rng, OUTCOME_LABELS);

    // Weights biased toward mid-range for plausibility.
    let weights: Vec<f64> = (0..count).map(|_| rng.random_range(10.0..70.0)).collect();
    let total: f64 = weights.iter().sum();

    let mut probs = Vec::with_capacity(count);
    let mut running = 0.0;
    for (label, weight) in chosen.iter().zip(&weights).take(count - 1) {
        let pct = round1(weight / total * 100.0);
        running += pct;
        probs.push(Probability {
            label: (*label).to_string(),
            percentage: pct,
        });
    }
    probs.push(Probability {
        label: chosen[count - 1].to_string(),
        percentage: round1(100.0 - running),
    });
    probs
}
