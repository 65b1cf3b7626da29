//! Axum route handlers for reading creation and report delivery.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chart::{calculate_birth_chart, BirthRequest};
use crate::errors::AppError;
use crate::report::generator::generate_full_report_with_image;
use crate::report::preview::{create_preview_from_full, PreviewReport};
use crate::state::AppState;
use crate::store::{NewReading, ReadingPatch};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw create-reading body. Everything is optional so validation can name the
/// first missing required field instead of failing opaquely in deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReadingRequest {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub city: Option<String>,
    pub nation: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

impl CreateReadingRequest {
    /// Checks required fields in their documented order and applies defaults
    /// for the optional ones. Nothing downstream runs if this fails.
    pub fn validate(self) -> Result<BirthRequest, AppError> {
        let year = self.year.ok_or(AppError::MissingField("year"))?;
        let month = self.month.ok_or(AppError::MissingField("month"))?;
        let day = self.day.ok_or(AppError::MissingField("day"))?;
        let hour = self.hour.ok_or(AppError::MissingField("hour"))?;
        let minute = self.minute.ok_or(AppError::MissingField("minute"))?;
        let city = self.city.ok_or(AppError::MissingField("city"))?;
        let email = self.email.ok_or(AppError::MissingField("email"))?;

        Ok(BirthRequest {
            name: self.name.unwrap_or_else(|| "User".to_string()),
            year,
            month,
            day,
            hour,
            minute,
            city,
            nation: self.nation.unwrap_or_else(|| "US".to_string()),
            gender: self.gender.unwrap_or_else(|| "female".to_string()),
            email,
        })
    }
}

/// The compact chart summary returned to the frontend: four sign names.
#[derive(Debug, Serialize)]
pub struct ChartSummary {
    pub sun: String,
    pub moon: String,
    pub venus: String,
    pub rising: String,
}

#[derive(Debug, Serialize)]
pub struct CreateReadingResponse {
    pub success: bool,
    pub reading_id: Uuid,
    pub chart: ChartSummary,
    pub preview: PreviewReport,
}

#[derive(Debug, Serialize)]
pub struct SendReportResponse {
    pub success: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/create-reading
///
/// Full pipeline: validate → chart → AI report + portrait → preview → persist.
/// Returns the new id, a compact chart summary and the redacted preview.
pub async fn handle_create_reading(
    State(state): State<AppState>,
    Json(request): Json<CreateReadingRequest>,
) -> Result<Json<CreateReadingResponse>, AppError> {
    let birth = request.validate()?;
    info!("New reading request for {}", birth.email);

    let chart = calculate_birth_chart(&birth).map_err(|e| AppError::Chart(e.to_string()))?;

    let full_report =
        generate_full_report_with_image(&state.llm, &chart, &birth.gender).await?;

    let preview = create_preview_from_full(&full_report);

    let reading = state
        .store
        .create(NewReading {
            email: birth.email.clone(),
            name: birth.name.clone(),
            birth_data: serde_json::to_value(&birth).map_err(|e| AppError::Internal(e.into()))?,
            chart: chart.clone(),
            full_report,
            preview: preview.clone(),
            gender: birth.gender.clone(),
        })
        .await?;

    info!("Reading created: {}", reading.reading_id);

    Ok(Json(CreateReadingResponse {
        success: true,
        reading_id: reading.reading_id,
        chart: ChartSummary {
            sun: chart.sun.sign,
            moon: chart.moon.sign,
            venus: chart.venus.sign,
            rising: chart.rising.sign,
        },
        preview,
    }))
}

/// POST /api/send-report/:reading_id
///
/// Admin-triggered delivery of the full report. A reading is sent at most
/// once: a second call is rejected before any email API call is made. The
/// record is only marked sent after the provider accepts the message.
pub async fn handle_send_report(
    State(state): State<AppState>,
    Path(reading_id): Path<Uuid>,
) -> Result<Json<SendReportResponse>, AppError> {
    let reading = state.store.read(reading_id).await?;

    if reading.sent {
        return Err(AppError::AlreadySent);
    }

    info!("Sending report to {}", reading.email);

    let accepted = state
        .mailer
        .send_full_report(
            &reading.email,
            &reading.name,
            &reading.full_report,
            &reading.chart,
        )
        .await;

    if !accepted {
        return Err(AppError::EmailSend);
    }

    state
        .store
        .update(reading_id, ReadingPatch::mark_sent(Utc::now()))
        .await?;

    info!("Report sent to {}", reading.email);

    Ok(Json(SendReportResponse { success: true }))
}
