//! Section parser — scans the model's free-text reply into the eight named
//! report sections.
//!
//! The reply is untrusted semi-structured text: the parser tolerates extra
//! whitespace, stray preamble, unknown or missing sections, and never fails —
//! absent sections simply come back empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The eight fixed sections of a reading. Missing sections default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSections {
    #[serde(default)]
    pub personality_analysis: String,
    #[serde(default)]
    pub love_approach: String,
    #[serde(default)]
    pub soulmate_appearance: String,
    #[serde(default)]
    pub soulmate_personality: String,
    #[serde(default)]
    pub soulmate_career: String,
    #[serde(default)]
    pub meeting_places: String,
    #[serde(default)]
    pub best_timing: String,
    #[serde(default)]
    pub compatibility_tips: String,
}

/// Parses model output into sections.
///
/// A trimmed line that starts and ends with `##` opens a section; its key is
/// the delimiter text lower-cased with spaces as underscores. Non-empty lines
/// accumulate into the open section until the next delimiter; the trailing
/// section is flushed at end of input.
pub fn parse_sections(content: &str) -> ReportSections {
    let mut sections: HashMap<String, String> = HashMap::new();
    let mut current_section: Option<String> = None;
    let mut current_content: Vec<&str> = Vec::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.starts_with("##") && line.ends_with("##") {
            if let Some(key) = current_section.take() {
                sections.insert(key, current_content.join("\n"));
            }
            let key = line
                .replace('#', "")
                .trim()
                .to_lowercase()
                .replace(' ', "_");
            current_section = Some(key);
            current_content.clear();
        } else if !line.is_empty() && current_section.is_some() {
            current_content.push(line);
        }
    }

    if let Some(key) = current_section {
        sections.insert(key, current_content.join("\n"));
    }

    let mut take = |key: &str| sections.remove(key).unwrap_or_default();

    ReportSections {
        personality_analysis: take("personality_analysis"),
        love_approach: take("love_approach"),
        soulmate_appearance: take("soulmate_appearance"),
        soulmate_personality: take("soulmate_personality"),
        soulmate_career: take("soulmate_career"),
        meeting_places: take("meeting_places"),
        best_timing: take("best_timing"),
        compatibility_tips: take("compatibility_tips"),
    }
}
