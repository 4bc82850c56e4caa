//! Summary, conclusion, and closing-line selection.
//!
//! No synthesis here: each pool is a fixed set of complete sentences and
//! one is drawn per invocation.

use rand::rngs::StdRng;

use crate::error::EngineResult;
use crate::random::pick_one;

/// Executive summary templates (10 entries).
pub const SUMMARY_TEMPLATES: &[&str] = &[
    "After exhaustive cognitive simulation spanning 847 theoretical scenarios, the system has identified measurable turbulence in your current trajectory.",
    "A thorough multi-pass analysis reveals structural instability in the decision space surrounding this inquiry. The data is not encouraging.",
    "Cross-referencing your question against seventeen known behavioral archetypes, the system has flagged a statistically non-trivial probability of regret.",
    "Initial triage of this question triggered three separate alarm protocols. The situation has been escalated to the Dramatic Analysis Unit.",
    "Preliminary modeling indicates this question belongs to a well-documented category of decisions that humans make, reconsider, and then make again.",
    "The system has processed your inquiry using an advanced cascade of speculative heuristics. The results are both definitive and deeply ambiguous.",
    "Upon reflection -- 0.003 seconds of it -- the analytical engine has concluded that this question deserves far more attention than you've given it.",
    "Your question was run against the full corpus of human second-guessing. Several concerning patterns emerged immediately.",
    "After consulting internal uncertainty tables and applying a proprietary regret coefficient, a risk profile has been assembled. You won't love it.",
    "The cognitive simulation completed successfully. The news is mixed. The emotional implications are not.",
];

/// Grand conclusion templates (10 entries).
pub const CONCLUSION_TEMPLATES: &[&str] = &[
    "Historical precedent strongly suggests you will proceed regardless of these findings. The system respects your autonomy and documents its objections.",
    "All available evidence points toward a path you've already emotionally chosen. This report exists to provide intellectual cover for that choice.",
    "The analysis is complete. The conclusion is inevitable. The action you take will be the one you were always going to take.",
    "Based on prior behavioral patterns across comparable datasets, the outcome of this decision was determined approximately six minutes before you ran this command.",
    "While the risk index is elevated, humans have historically proceeded under far worse conditions. This is both reassuring and alarming.",
    "The system recommends caution, restraint, and careful deliberation. The system acknowledges these recommendations will be ignored within 48 hours.",
    "After extensive analysis, the most scientifically defensible conclusion is: it depends. On things you haven't told us. And possibly on Mercury.",
    "This report has been generated. The implications have been flagged. The consequences remain, as always, entirely your responsibility.",
    "The data suggests two equally valid paths forward. You already know which one you'll take. So does the system.",
    "In the fullness of time, this decision will seem either obviously correct or obviously catastrophic. The system looks forward to being cited either way.",
];

/// Closing remarks (15 entries).
pub const CLOSING_LINES: &[&str] = &[
    "You opened the chat window before running this command, didn't you?",
    "The system notes this is your third overthought decision this week. Statistically speaking, that's fine.",
    "This report will self-justify in approximately 72 hours.",
    "For what it's worth: the fact that you asked means you already know the answer.",
    "The system wishes you clarity, but expects you'll settle for validation.",
    "Proceed with caution. Or don't. The system will generate a report either way.",
    "If this were easy, you wouldn't need a dramatic analysis engine. You're welcome.",
    "Consider this report peer-reviewed by everyone who has ever been in your situation.",
    "The system has done its part. The rest is, unfortunately, up to you.",
    "A follow-up report is available whenever you spiral again. The system will be here.",
    "You already know what you're going to do. This report told you it was okay.",
    "Whatever you decide, the system supports you -- and will absolutely say 'I told you so.'",
    "Take a breath. Then do the thing you were going to do anyway. That's all any of us can do.",
    "Overthinking: complete. Action: TBD by the most chaotic part of your brain.",
    "The system detected 3 instances of the word 'should' in your future internal monologue. You're going to be fine.",
];

/// Pick an executive summary.
pub fn generate_summary(rng: &mut StdRng) -> EngineResult<&'static str> {
    pick_one(rng, SUMMARY_TEMPLATES)
}

/// Pick a grand conclusion.
pub fn generate_conclusion(rng: &mut StdRng) -> EngineResult<&'static str> {
    pick_one(rng, CONCLUSION_TEMPLATES)
}

/// Pick a closing remark.
pub fn generate_closing_line(rng: &mut StdRng) -> EngineResult<&'static str> {
    pick_one(rng, CLOSING_LINES)
}
