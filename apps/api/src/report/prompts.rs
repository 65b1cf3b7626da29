// All LLM prompt constants for the report module.

use crate::chart::{ChartData, ChartPoint};

/// System prompt fixing persona, tone and language for the reading.
pub const REPORT_SYSTEM: &str = "You are a professional astrologer specializing in soulmate readings.
Your style: Specific and detailed, warm and empathetic, mystical but modern.
Output in English only.";

/// Reading prompt template. Placeholders are substituted in `build_report_prompt`.
///
/// The `## NAME ##` delimiters are load-bearing: the parser keys sections off
/// them, so the order and spelling here must match `parser::parse_sections`.
pub const REPORT_PROMPT_TEMPLATE: &str = r#"Based on this birth chart, create a detailed soulmate profile.

Chart Data:
- Sun in {sun_sign} (House {sun_house})
- Moon in {moon_sign} (House {moon_house})
- Venus in {venus_sign} (House {venus_house})
- Mars in {mars_sign}
- Rising in {rising_sign}
- 7th House in {house7_sign}

User gender: {gender}

Generate in this EXACT format:

## PERSONALITY_ANALYSIS ##
(2-3 sentences)

## LOVE_APPROACH ##
(3-4 sentences)

## SOULMATE_APPEARANCE ##
(4-5 sentences with specific details)

## SOULMATE_PERSONALITY ##
(5-6 traits)

## SOULMATE_CAREER ##
(4-5 fields)

## MEETING_PLACES ##
(5-6 places)

## BEST_TIMING ##
(2-3 months in 2025)

## COMPATIBILITY_TIPS ##
(3-4 tips)

Be specific, personal, vivid."#;

/// Portrait prompt template. `{subject}` is the opposite of the user's
/// gender; `{key_features}` is the leading fragment of the appearance section.
pub const PORTRAIT_PROMPT_TEMPLATE: &str = "Portrait photo of an attractive {subject}, {key_features}
Professional photography, natural lighting, warm smile, looking at camera,
soft bokeh background, cinematic quality, photo-realistic";

/// Characters of the appearance section fed into the portrait prompt.
const PORTRAIT_FEATURE_CHARS: usize = 200;

fn house_label(point: &ChartPoint) -> String {
    match point.house {
        Some(placement) => placement.to_string(),
        None => "Unknown".to_string(),
    }
}

/// Builds the reading prompt from chart placements.
pub fn build_report_prompt(chart: &ChartData, gender: &str) -> String {
    REPORT_PROMPT_TEMPLATE
        .replace("{sun_sign}", &chart.sun.sign)
        .replace("{sun_house}", &house_label(&chart.sun))
        .replace("{moon_sign}", &chart.moon.sign)
        .replace("{moon_house}", &house_label(&chart.moon))
        .replace("{venus_sign}", &chart.venus.sign)
        .replace("{venus_house}", &house_label(&chart.venus))
        .replace("{mars_sign}", &chart.mars.sign)
        .replace("{rising_sign}", &chart.rising.sign)
        .replace("{house7_sign}", &chart.house7.sign)
        .replace("{gender}", gender)
}

/// Builds the portrait prompt. The subject is the opposite of the user's
/// gender; only the first ~200 characters of the appearance text are used.
pub fn build_portrait_prompt(appearance: &str, gender: &str) -> String {
    let subject = if gender == "female" { "man" } else { "woman" };
    let key_features: String = appearance.chars().take(PORTRAIT_FEATURE_CHARS).collect();

    PORTRAIT_PROMPT_TEMPLATE
        .replace("{subject}", subject)
        .replace("{key_features}", &key_features)
}
