//! Heuristic scoring for model responses.
//!
//! The keyword scorer only looks for a fixed set of approving words in the
//! model's prose. Keyword list, base, increment and bounds are part of the
//! scoring contract that stored results rely on.

use crate::analysis::models::SectionResult;

/// Approving words searched for (case-insensitive substring) in each response.
pub const SCORE_KEYWORDS: [&str; 4] = ["excellent", "strong", "impressive", "good"];
pub const BASE_SCORE: u32 = 50;
pub const KEYWORD_INCREMENT: u32 = 5;
pub const MAX_SCORE: u32 = 100;

pub const NO_RECOMMENDATIONS: &str = "No specific recommendations provided.";

/// Section weights in tenths: skills 0.4, experience 0.4, education 0.2.
const SKILLS_WEIGHT: u32 = 4;
const EXPERIENCE_WEIGHT: u32 = 4;
const EDUCATION_WEIGHT: u32 = 2;

/// Scores one response: 50 + 5 per distinct keyword present, clamped to [0, 100].
pub fn keyword_score(text: &str) -> u8 {
    let lower = text.to_lowercase();
    let matched = SCORE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count() as u32;
    (BASE_SCORE + KEYWORD_INCREMENT * matched).min(MAX_SCORE) as u8
}

/// `round(0.4·skills + 0.4·experience + 0.2·education)`, clamped to [0, 100].
///
/// Computed in integer tenths; the weighted sum is never a half, so no tie rule is needed.
pub fn overall_score(skills: u8, experience: u8, education: u8) -> u8 {
    let tenths = SKILLS_WEIGHT * skills as u32
        + EXPERIENCE_WEIGHT * experience as u32
        + EDUCATION_WEIGHT * education as u32;
    ((tenths + 5) / 10).min(MAX_SCORE) as u8
}

/// Pulls the recommendation part out of a response.
///
/// Takes the segment after the first `"4."`; if there is none (or it is empty)
/// the segment after the first `"Suggestions"`. The segment ends at the next
/// occurrence of the same marker. Surrounding whitespace is dropped, and on the
/// `"Suggestions"` path so is the heading colon. Falls back to
/// `NO_RECOMMENDATIONS` when nothing remains.
pub fn extract_recommendations(text: &str) -> String {
    let section = match segment_after(text, "4.") {
        Some(segment) => segment.trim(),
        None => segment_after(text, "Suggestions")
            .map(|s| s.trim().trim_start_matches(':').trim_start())
            .unwrap_or(""),
    };

    if section.is_empty() {
        NO_RECOMMENDATIONS.to_string()
    } else {
        section.to_string()
    }
}

fn segment_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.split(marker).nth(1).filter(|s| !s.is_empty())
}

/// Packages one raw model response as a scored section.
pub fn build_section(raw: String) -> SectionResult {
    SectionResult {
        recommendation_text: extract_recommendations(&raw),
        score: keyword_score(&raw),
        summary_text: raw,
    }
}
