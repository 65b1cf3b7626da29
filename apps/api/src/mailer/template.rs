//! HTML body for the full-report email. Placeholder substitution, no
//! templating engine — the layout is fixed.

use crate::report::generator::FullReport;

const EMAIL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {
            font-family: 'Georgia', serif;
            line-height: 1.8;
            color: #333;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        }
        .container {
            background: white;
            border-radius: 12px;
            padding: 40px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.2);
        }
        h1 {
            color: #667eea;
            text-align: center;
            font-size: 32px;
            margin-bottom: 10px;
        }
        .section {
            margin: 30px 0;
        }
        .section-title {
            color: #667eea;
            font-size: 20px;
            font-weight: bold;
            margin-bottom: 15px;
        }
        img {
            max-width: 100%;
            border-radius: 12px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>✨ Your Soulmate Reading ✨</h1>
        <p style="text-align:center">Personalized for {name}</p>

        <div style="text-align:center; margin:20px 0">
            <img src="{hd_image_url}" alt="Soulmate Portrait">
        </div>

        <div class="section">
            <div class="section-title">💫 Your Love Style</div>
            <p>{personality_analysis}</p>
        </div>

        <div class="section">
            <div class="section-title">💖 How You Approach Love</div>
            <p>{love_approach}</p>
        </div>

        <div class="section">
            <div class="section-title">👤 Physical Appearance</div>
            <p>{soulmate_appearance}</p>
        </div>

        <div class="section">
            <div class="section-title">✨ Personality Traits</div>
            <p>{soulmate_personality}</p>
        </div>

        <div class="section">
            <div class="section-title">💼 Career & Lifestyle</div>
            <p>{soulmate_career}</p>
        </div>

        <div class="section">
            <div class="section-title">📍 Where You'll Meet</div>
            <p>{meeting_places}</p>
        </div>

        <div class="section">
            <div class="section-title">📅 Best Timing in 2025</div>
            <p>{best_timing}</p>
        </div>

        <div class="section">
            <div class="section-title">💡 Compatibility Tips</div>
            <p>{compatibility_tips}</p>
        </div>

        <p style="text-align:center; color:#888; margin-top:40px">
            © 2025 Soulmate Astrology
        </p>
    </div>
</body>
</html>
"#;

/// Renders the email body for a recipient and their report.
pub fn build_email_html(name: &str, report: &FullReport) -> String {
    EMAIL_TEMPLATE
        .replace("{name}", name)
        .replace("{hd_image_url}", &report.hd_image_url)
        .replace("{personality_analysis}", &report.sections.personality_analysis)
        .replace("{love_approach}", &report.sections.love_approach)
        .replace("{soulmate_appearance}", &report.sections.soulmate_appearance)
        .replace("{soulmate_personality}", &report.sections.soulmate_personality)
        .replace("{soulmate_career}", &report.sections.soulmate_career)
        .replace("{meeting_places}", &report.sections.meeting_places)
        .replace("{best_timing}", &report.sections.best_timing)
        .replace("{compatibility_tips}", &report.sections.compatibility_tips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parser::ReportSections;

    fn sample_report() -> FullReport {
        FullReport {
            sections: ReportSections {
                personality_analysis: "PA-BODY".to_string(),
                love_approach: "LA-BODY".to_string(),
                soulmate_appearance: "SA-BODY".to_string(),
                soulmate_personality: "SP-BODY".to_string(),
                soulmate_career: "SC-BODY".to_string(),
                meeting_places: "MP-BODY".to_string(),
                best_timing: "BT-BODY".to_string(),
                compatibility_tips: "CT-BODY".to_string(),
            },
            hd_image_url: "https://img.example/hd.png".to_string(),
            blur_image_url: "https://img.example/hd.png".to_string(),
        }
    }

    #[test]
    fn test_email_embeds_name_image_and_all_sections() {
        let html = build_email_html("Ada", &sample_report());

        assert!(html.contains("Personalized for Ada"));
        assert!(html.contains(r#"<img src="https://img.example/hd.png""#));
        for body in [
            "PA-BODY", "LA-BODY", "SA-BODY", "SP-BODY", "SC-BODY", "MP-BODY", "BT-BODY",
            "CT-BODY",
        ] {
            assert!(html.contains(body), "missing section body {body}");
        }
        // CSS braces are fine; template placeholders are not.
        assert!(!html.contains("{name}"));
        assert!(!html.contains("{hd_image_url}"));
        assert!(!html.contains("_analysis}") && !html.contains("_tips}"));
    }

    #[test]
    fn test_email_has_all_eight_section_headings() {
        let html = build_email_html("Ada", &sample_report());
        for heading in [
            "💫 Your Love Style",
            "💖 How You Approach Love",
            "👤 Physical Appearance",
            "✨ Personality Traits",
            "💼 Career & Lifestyle",
            "📍 Where You'll Meet",
            "📅 Best Timing in 2025",
            "💡 Compatibility Tips",
        ] {
            assert!(html.contains(heading), "missing heading {heading}");
        }
    }
}
