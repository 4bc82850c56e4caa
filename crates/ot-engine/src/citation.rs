//! Citation fabrication.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::EngineResult;
use crate::random::{pick_one, shuffled_copy};
use crate::result::Citation;

/// Authoritative pool of imaginary academic publications (20 entries).
pub const JOURNAL_NAMES: &[&str] = &[
    "Journal of Existential Hesitation",
    "International Review of Questionable Decisions",
    "Proceedings of the Annual Regret Symposium",
    "Journal of Romantic Miscalculation",
    "Quarterly Bulletin of Applied Catastrophizing",
    "Annals of Unnecessary Second-Guessing",
    "Transactions on Cognitive Overload",
    "Institute for Advanced Overanalysis",
    "Review of Premature Conclusions",
    "Journal of Speculative Self-Sabotage",
    "Archives of Temporal Panic",
    "Reports on Unresolved Ambiguity",
    "Compendium of Midnight Decisions",
    "Survey of Avoidant Coping Strategies",
    "Journal of Theoretical What-Ifs",
    "Bulletin of the Society for Spiraling Thoughts",
    "Proceedings on Human Indecision (Special Issue)",
    "Cambridge Handbook of Feelings You Cannot Name",
    "Oxford Review of Things You Almost Said",
    "Wiley Encyclopedia of Overthought Outcomes",
];

/// Fictitious author credentials for maximum credibility (6 entries).
pub const AUTHOR_SUFFIXES: &[&str] = &[
    "et al.",
    "& Associates",
    "(Independent Research Division)",
    "(Posthumous Edition)",
    "(Retracted, then re-instated)",
    "(Peer-reviewed by one very tired colleague)",
];

/// Fabricate 2-4 distinct academic citations with 1-based indices.
pub fn generate_citations(rng: &mut StdRng) -> EngineResult<Vec<Citation>> {
    let count: usize = rng.random_range(2..=4);
    let selected = shuffled_copy(rng, JOURNAL_NAMES);

    let mut citations = Vec::with_capacity(count);
    for (i, journal) in selected.iter().take(count).enumerate() {
        let year: u32 = rng.random_range(2008..2025);
        let suffix = pick_one(rng, AUTHOR_SUFFIXES)?;
        citations.push(Citation {
            index: i as u32 + 1,
            source: format!("{journal} {suffix} ({year})"),
        });
    }
    Ok(citations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn count_is_between_two_and_four() {
        for seed in 0..50 {
            let mut rng = seeded_rng(seed);
            let citations = generate_citations(&mut rng).unwrap();
            assert!((2..=4).contains(&citations.len()), "seed {seed}");
        }
    }

    #[test]
    fn indices_are_one_based_and_contiguous() {
        for seed in 0..50 {
            let mut rng = seeded_rng(seed);
            let citations = generate_citations(&mut rng).unwrap();
            for (i, citation) in citations.iter().enumerate() {
                assert_eq!(citation.index, i as u32 + 1);
            }
        }
    }

    #[test]
    fn sources_are_distinct_within_a_record() {
        for seed in 0..100 {
            let mut rng = seeded_rng(seed);
            let citations = generate_citations(&mut rng).unwrap();
            let mut sources: Vec<&str> = citations.iter().map(|c| c.source.as_str()).collect();
            sources.sort_unstable();
            sources.dedup();
            assert_eq!(sources.len(), citations.len(), "seed {seed}: duplicate source");
        }
    }

    #[test]
    fn source_contains_journal_suffix_and_year() {
        let mut rng = seeded_rng(42);
        for citation in generate_citations(&mut rng).unwrap() {
            assert!(JOURNAL_NAMES.iter().any(|j| citation.source.starts_with(j)));
            assert!(AUTHOR_SUFFIXES.iter().any(|s| citation.source.contains(s)));
            let year: u32 = citation
                .source
                .rsplit('(')
                .next()
                .and_then(|tail| tail.strip_suffix(')'))
                .and_then(|y| y.parse().ok())
                .unwrap();
            assert!((2008..2025).contains(&year), "{}", citation.source);
        }
    }

    #[test]
    fn pools_have_expected_sizes() {
        assert_eq!(JOURNAL_NAMES.len(), 20);
        assert_eq!(AUTHOR_SUFFIXES.len(), 6);
    }
}
