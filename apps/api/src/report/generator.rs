//! Report generation pipeline.
//!
//! Flow: build prompt → chat completion → parse sections → portrait image →
//! combined FullReport. A text-generation failure is fatal to the whole
//! operation; an image failure degrades to a placeholder URL.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chart::ChartData;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::report::parser::{parse_sections, ReportSections};
use crate::report::prompts::{build_portrait_prompt, build_report_prompt, REPORT_SYSTEM};

/// Served when portrait generation fails; the reading still goes out.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/1024x1024?text=Soulmate+Portrait";

/// The complete reading: eight sections plus the portrait URLs (both point at
/// the same generated image).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullReport {
    #[serde(flatten)]
    pub sections: ReportSections,
    pub hd_image_url: String,
    pub blur_image_url: String,
}

/// Generates the full reading for a chart: narrative text plus portrait.
pub async fn generate_full_report_with_image(
    llm: &LlmClient,
    chart: &ChartData,
    gender: &str,
) -> Result<FullReport, AppError> {
    let prompt = build_report_prompt(chart, gender);

    let content = llm
        .chat(REPORT_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let sections = parse_sections(&content);
    info!("Report text generated ({} chars)", content.len());

    let portrait_prompt = build_portrait_prompt(&sections.soulmate_appearance, gender);
    let image_url = match llm.generate_image(&portrait_prompt).await {
        Ok(url) => url,
        Err(e) => {
            warn!("Image generation failed, using placeholder: {e}");
            PLACEHOLDER_IMAGE_URL.to_string()
        }
    };

    Ok(FullReport {
        sections,
        hd_image_url: image_url.clone(),
        blur_image_url: image_url,
    })
}
