//! Preview redactor — derives the partially obscured teaser shown before
//! payment from the full report.

use serde::{Deserialize, Serialize};

use crate::report::generator::FullReport;

const LOCKED_MARKER: &str = "███████ (Unlock to reveal)";
const EMPTY_MARKER: &str = "███ (Unlock to reveal)";
const TIMING_PLACEHOLDER: &str = "2025年██月 (Unlock to reveal)";

/// Character budget for the love_approach teaser.
const LOVE_APPROACH_PREVIEW_CHARS: usize = 200;

const DEFAULT_KEEP_RATIO: f64 = 0.4;
const TIPS_KEEP_RATIO: f64 = 0.3;

/// The redacted teaser view of a reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewReport {
    pub personality_analysis: String,
    pub love_approach: String,
    pub soulmate_appearance: String,
    pub soulmate_personality: String,
    pub soulmate_career: String,
    pub meeting_places: String,
    pub best_timing: String,
    pub compatibility_tips: String,
    pub blur_image_url: String,
}

/// Builds the preview: personality verbatim, love approach truncated,
/// appearance/personality/tips word-redacted, the rest fully locked.
pub fn create_preview_from_full(full: &FullReport) -> PreviewReport {
    PreviewReport {
        personality_analysis: full.sections.personality_analysis.clone(),
        love_approach: truncate_with_ellipsis(
            &full.sections.love_approach,
            LOVE_APPROACH_PREVIEW_CHARS,
        ),
        soulmate_appearance: blur_text(&full.sections.soulmate_appearance, DEFAULT_KEEP_RATIO),
        soulmate_personality: blur_text(&full.sections.soulmate_personality, DEFAULT_KEEP_RATIO),
        soulmate_career: LOCKED_MARKER.to_string(),
        meeting_places: LOCKED_MARKER.to_string(),
        best_timing: TIMING_PLACEHOLDER.to_string(),
        compatibility_tips: blur_text(&full.sections.compatibility_tips, TIPS_KEEP_RATIO),
        blur_image_url: full.blur_image_url.clone(),
    }
}

fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}

/// Keeps the first `max(3, ceil(words × keep_ratio))` words and appends the
/// locked marker. Empty input gets the short marker alone.
fn blur_text(text: &str, keep_ratio: f64) -> String {
    if text.is_empty() {
        return EMPTY_MARKER.to_string();
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let keep_count = ((words.len() as f64 * keep_ratio).ceil() as usize).max(3);
    let visible = words[..keep_count.min(words.len())].join(" ");
    format!("{visible} {LOCKED_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parser::ReportSections;

    fn full_report(love_approach: &str) -> FullReport {
        FullReport {
            sections: ReportSections {
                personality_analysis: "Kept exactly as written.".to_string(),
                love_approach: love_approach.to_string(),
                soulmate_appearance: "one two three four five six seven eight nine ten".to_string(),
                soulmate_personality: "alpha beta gamma delta epsilon".to_string(),
                soulmate_career: "Secret career details.".to_string(),
                meeting_places: "Secret places.".to_string(),
                best_timing: "Secret timing.".to_string(),
                compatibility_tips: "a b c d e f g h i j".to_string(),
            },
            hd_image_url: "https://img.example/hd.png".to_string(),
            blur_image_url: "https://img.example/blur.png".to_string(),
        }
    }

    fn visible_words(redacted: &str) -> usize {
        let stripped = redacted
            .strip_suffix(&format!(" {LOCKED_MARKER}"))
            .expect("locked marker missing");
        stripped.split_whitespace().count()
    }

    #[test]
    fn test_personality_is_copied_verbatim() {
        let preview = create_preview_from_full(&full_report("short"));
        assert_eq!(preview.personality_analysis, "Kept exactly as written.");
    }

    #[test]
    fn test_short_love_approach_is_untruncated() {
        let preview = create_preview_from_full(&full_report("A short approach."));
        assert_eq!(preview.love_approach, "A short approach.");
    }

    #[test]
    fn test_long_love_approach_is_truncated_with_ellipsis() {
        let long = "x".repeat(450);
        let preview = create_preview_from_full(&full_report(&long));
        assert_eq!(preview.love_approach.chars().count(), 203);
        assert!(preview.love_approach.ends_with("..."));
    }

    #[test]
    fn test_blur_keeps_ceil_of_word_count_times_ratio() {
        // 10 words × 0.4 → ceil(4.0) = 4 visible words.
        let preview = create_preview_from_full(&full_report("x"));
        assert_eq!(visible_words(&preview.soulmate_appearance), 4);
        assert!(preview.soulmate_appearance.starts_with("one two three four ███████"));
    }

    #[test]
    fn test_blur_ceil_rounds_up() {
        // 5 words × 0.4 = 2.0 → max(3, 2) = 3; 10 × 0.3 = 3.0 → 3.
        let preview = create_preview_from_full(&full_report("x"));
        assert_eq!(visible_words(&preview.soulmate_personality), 3);
        assert_eq!(visible_words(&preview.compatibility_tips), 3);
    }

    #[test]
    fn test_blur_minimum_three_words() {
        assert_eq!(blur_text("one two three four", 0.1), format!("one two three {LOCKED_MARKER}"));
    }

    #[test]
    fn test_blur_short_text_shows_everything_plus_marker() {
        assert_eq!(blur_text("just two", 0.4), format!("just two {LOCKED_MARKER}"));
    }

    #[test]
    fn test_blur_empty_text_gets_short_marker() {
        assert_eq!(blur_text("", 0.4), EMPTY_MARKER);
    }

    #[test]
    fn test_fully_locked_fields() {
        let preview = create_preview_from_full(&full_report("x"));
        assert_eq!(preview.soulmate_career, LOCKED_MARKER);
        assert_eq!(preview.meeting_places, LOCKED_MARKER);
        assert_eq!(preview.best_timing, TIMING_PLACEHOLDER);
    }

    #[test]
    fn test_blur_image_url_is_copied() {
        let preview = create_preview_from_full(&full_report("x"));
        assert_eq!(preview.blur_image_url, "https://img.example/blur.png");
    }
}
