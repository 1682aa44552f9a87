//! Naive negation-aware keyword matching over lowercased note text.
//!
//! Matching is plain case-insensitive substring search, deliberately not
//! tokenized: "tube" will match inside a longer word. That is a policy
//! decision carried over from the source ruleset, not an engineering bug.

/// Cues that suppress a keyword match when they appear in the window
/// immediately before it. The trailing space keeps "notable" from reading
/// as a negation.
pub const NEGATION_CUES: [&str; 4] = ["no ", "denies ", "without ", "not "];

/// How many characters of preceding text to inspect for a negation cue.
pub const NEGATION_WINDOW: usize = 12;

/// Swallowing-impairment evidence.
pub const DYSPHAGIA: [&str; 4] = [
    "dysphagia",
    "aspiration risk",
    "difficulty swallowing",
    "unable to swallow",
];

/// Gastrointestinal dysfunction evidence.
pub const GI_DYSFUNCTION: [&str; 4] = [
    "malabsorption",
    "ileus",
    "bowel obstruction",
    "severe gastroparesis",
];

/// Failed or insufficient oral intake evidence.
pub const INTAKE_FAILURE: [&str; 5] = [
    "unable to meet",
    "< 50%",
    "less than 50%",
    "insufficient oral intake",
    "failed oral supplements",
];

/// Reports whether any keyword occurs in `text` without a negation cue in
/// the preceding [`NEGATION_WINDOW`]. Keywords are tried in order and the
/// first non-negated occurrence short-circuits; a negated occurrence does
/// not disqualify a later keyword. Empty text or an empty keyword list
/// never match.
pub fn contains_keyword(text: &str, keywords: &[&str]) -> bool {
    let t = text.to_lowercase();
    for kw in keywords {
        if kw.is_empty() {
            continue;
        }
        if let Some(idx) = t.find(kw) {
            // The window is counted in characters, not bytes, so multibyte
            // text keeps the same reach as ASCII.
            let start = t[..idx]
                .char_indices()
                .rev()
                .take(NEGATION_WINDOW)
                .last()
                .map_or(idx, |(i, _)| i);
            let window = &t[start..idx];
            if NEGATION_CUES.iter().any(|cue| window.contains(cue)) {
                log::debug!("keyword {kw:?} negated by window {window:?}");
                continue;
            }
            return true;
        }
    }
    false
}

/// Plain case-insensitive substring check with no negation handling, used
/// for the documentation facts (nutrition plan, physician order).
pub fn contains_any_plain(text: &str, needles: &[&str]) -> bool {
    let t = text.to_lowercase();
    needles.iter().any(|n| !n.is_empty() && t.contains(n))
}
