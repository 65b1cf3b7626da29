//! Record store — one pretty-printed JSON file per reading under the records
//! directory, keyed by a generated uuid.
//!
//! There is no locking: concurrent updates to the same record are last-writer
//! wins. Acceptable at this request volume; do not build on it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::chart::ChartData;
use crate::report::generator::FullReport;
use crate::report::preview::PreviewReport;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt record: {0}")]
    Json(#[from] serde_json::Error),
}

/// A persisted reading. `reading_id` is unique and immutable once assigned;
/// only `paid`, `sent` and `sent_at` change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub reading_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub name: String,
    pub birth_data: Value,
    pub chart: ChartData,
    pub full_report: FullReport,
    pub preview: PreviewReport,
    pub gender: String,
    pub paid: bool,
    pub sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
}

/// Everything a new record needs before the store stamps id, timestamps and
/// the paid/sent flags.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub email: String,
    pub name: String,
    pub birth_data: Value,
    pub chart: ChartData,
    pub full_report: FullReport,
    pub preview: PreviewReport,
    pub gender: String,
}

/// Partial update merged into an existing record.
#[derive(Debug, Clone, Default)]
pub struct ReadingPatch {
    pub paid: Option<bool>,
    pub sent: Option<bool>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl ReadingPatch {
    pub fn mark_sent(sent_at: DateTime<Utc>) -> Self {
        Self {
            sent: Some(true),
            sent_at: Some(sent_at),
            ..Self::default()
        }
    }
}

/// Flat-file reading store.
#[derive(Clone)]
pub struct ReadingStore {
    dir: PathBuf,
}

impl ReadingStore {
    /// Opens the store, creating the records directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, reading_id: Uuid) -> PathBuf {
        self.dir.join(format!("{reading_id}.json"))
    }

    /// Persists a new reading: assigns a fresh id, stamps `created_at`, and
    /// initializes `paid = false, sent = false`.
    pub async fn create(&self, new: NewReading) -> Result<Reading, StoreError> {
        let reading = Reading {
            reading_id: Uuid::new_v4(),
            created_at: Utc::now(),
            email: new.email,
            name: new.name,
            birth_data: new.birth_data,
            chart: new.chart,
            full_report: new.full_report,
            preview: new.preview,
            gender: new.gender,
            paid: false,
            sent: false,
            sent_at: None,
        };
        self.write(&reading).await?;
        Ok(reading)
    }

    /// Loads a reading by id.
    pub async fn read(&self, reading_id: Uuid) -> Result<Reading, StoreError> {
        read_record(&self.path_for(reading_id)).await
    }

    /// Merges a patch into an existing record and rewrites the file in full.
    pub async fn update(
        &self,
        reading_id: Uuid,
        patch: ReadingPatch,
    ) -> Result<Reading, StoreError> {
        let mut reading = self.read(reading_id).await?;
        if let Some(paid) = patch.paid {
            reading.paid = paid;
        }
        if let Some(sent) = patch.sent {
            reading.sent = sent;
        }
        if let Some(sent_at) = patch.sent_at {
            reading.sent_at = Some(sent_at);
        }
        self.write(&reading).await?;
        Ok(reading)
    }

    /// Reads every record, most recently created first.
    pub async fn list_all(&self) -> Result<Vec<Reading>, StoreError> {
        let mut readings = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                readings.push(read_record(&path).await?);
            }
        }
        readings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(readings)
    }

    async fn write(&self, reading: &Reading) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(reading)?;
        tokio::fs::write(self.path_for(reading.reading_id), json).await?;
        Ok(())
    }
}

async fn read_record(path: &Path) -> Result<Reading, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(StoreError::NotFound),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{calculate_birth_chart, BirthRequest};
    use crate::report::parser::ReportSections;

    fn new_reading(email: &str) -> NewReading {
        let birth = BirthRequest {
            name: "User".to_string(),
            year: 1990,
            month: 5,
            day: 15,
            hour: 14,
            minute: 30,
            city: "New York".to_string(),
            nation: "US".to_string(),
            gender: "female".to_string(),
            email: email.to_string(),
        };
        let chart = calculate_birth_chart(&birth).unwrap();
        let full_report = FullReport {
            sections: ReportSections {
                personality_analysis: "Warm.".to_string(),
                ..ReportSections::default()
            },
            hd_image_url: "https://img.example/p.png".to_string(),
            blur_image_url: "https://img.example/p.png".to_string(),
        };
        let preview = crate::report::preview::create_preview_from_full(&full_report);
        NewReading {
            email: email.to_string(),
            name: "User".to_string(),
            birth_data: serde_json::to_value(&birth).unwrap(),
            chart,
            full_report,
            preview,
            gender: "female".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();

        let created = store.create(new_reading("a@example.com")).await.unwrap();
        assert!(!created.paid);
        assert!(!created.sent);
        assert!(created.sent_at.is_none());

        let loaded = store.read(created.reading_id).await.unwrap();
        assert_eq!(loaded.reading_id, created.reading_id);
        assert_eq!(loaded.email, "a@example.com");
        assert_eq!(loaded.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();

        let first = store.create(new_reading("a@example.com")).await.unwrap();
        let second = store.create(new_reading("b@example.com")).await.unwrap();
        assert_ne!(first.reading_id, second.reading_id);

        // Both records remain independently readable.
        assert_eq!(store.read(first.reading_id).await.unwrap().email, "a@example.com");
        assert_eq!(store.read(second.reading_id).await.unwrap().email, "b@example.com");
    }

    #[tokio::test]
    async fn test_read_missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.read(Uuid::new_v4()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();
        let created = store.create(new_reading("a@example.com")).await.unwrap();

        let sent_at = Utc::now();
        let updated = store
            .update(created.reading_id, ReadingPatch::mark_sent(sent_at))
            .await
            .unwrap();
        assert!(updated.sent);
        assert_eq!(updated.sent_at, Some(sent_at));
        // Untouched fields survive the rewrite.
        assert!(!updated.paid);
        assert_eq!(updated.email, "a@example.com");

        let loaded = store.read(created.reading_id).await.unwrap();
        assert!(loaded.sent);
        assert_eq!(loaded.sent_at, Some(sent_at));
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.update(Uuid::new_v4(), ReadingPatch::default()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_all_is_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();

        let first = store.create(new_reading("first@example.com")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store.create(new_reading("second@example.com")).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].reading_id, second.reading_id);
        assert_eq!(all[1].reading_id, first.reading_id);
    }

    #[tokio::test]
    async fn test_list_all_ignores_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();
        store.create(new_reading("a@example.com")).await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a record").unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_record_serializes_expected_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path()).unwrap();
        let created = store.create(new_reading("a@example.com")).await.unwrap();

        let value = serde_json::to_value(&created).unwrap();
        for key in [
            "reading_id", "created_at", "email", "name", "birth_data", "chart", "full_report",
            "preview", "gender", "paid", "sent",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        // sent_at is omitted until the report goes out.
        assert!(value.get("sent_at").is_none());
        // The full report is flat: section keys next to the image URLs.
        assert!(value["full_report"]["personality_analysis"].is_string());
        assert!(value["full_report"]["hd_image_url"].is_string());
    }
}
