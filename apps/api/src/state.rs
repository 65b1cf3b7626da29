use crate::llm_client::LlmClient;
use crate::mailer::EmailClient;
use crate::store::ReadingStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Services are constructed once in `main` from `Config` and passed here —
/// no ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub mailer: EmailClient,
    pub store: ReadingStore,
}
