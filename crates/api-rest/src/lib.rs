//! # API REST
//!
//! REST API implementation for Cura.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, redirects)
//!
//! Uses `api-shared` for wire types and `cura-core` for everything else.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post, put},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AdviceRes, AssessmentReq, AssessmentRes, CommonSymptomsRes, ErrorRes, HealthRes,
    HealthService, StoreAssessmentRes,
};
use cura_core::{
    render_results, results_view, store_report, CoreConfig, MemorySessionStore, ResultsView,
    ADVICE_SHEET, COMMON_SYMPTOMS,
};

const MAX_SESSION_ID_LEN: usize = 128;

/// Most sessions held at once. The least recently used one is evicted past this.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Sessions untouched for this long are dropped.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

type ApiError = (StatusCode, Json<ErrorRes>);

#[derive(Debug)]
struct SessionEntry {
    store: Arc<MemorySessionStore>,
    last_seen: Instant,
}

/// Per-session stores keyed by session id.
///
/// Sessions expire after `idle_ttl` without use, and at most `max_sessions` are kept.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_TTL)
    }
}

impl SessionRegistry {
    pub fn with_limits(max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_ttl,
        }
    }

    /// Returns the store for `session_id`, creating it on first use.
    pub fn get_or_create(&self, session_id: &str) -> Arc<MemorySessionStore> {
        self.get_or_create_at(session_id, Instant::now())
    }

    /// Returns the store for `session_id` if it exists and has not expired.
    pub fn get(&self, session_id: &str) -> Option<Arc<MemorySessionStore>> {
        self.get_at(session_id, Instant::now())
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_or_create_at(&self, session_id: &str, now: Instant) -> Arc<MemorySessionStore> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        self.evict_expired(&mut sessions, now);

        if let Some(entry) = sessions.get_mut(session_id) {
            entry.last_seen = now;
            return entry.store.clone();
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone());
            if let Some(id) = oldest {
                tracing::debug!(session_id = %id, "evicting least recently used session");
                sessions.remove(&id);
            }
        }

        let store = Arc::new(MemorySessionStore::new());
        sessions.insert(
            session_id.to_owned(),
            SessionEntry {
                store: store.clone(),
                last_seen: now,
            },
        );
        store
    }

    fn get_at(&self, session_id: &str, now: Instant) -> Option<Arc<MemorySessionStore>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        self.evict_expired(&mut sessions, now);

        let entry = sessions.get_mut(session_id)?;
        entry.last_seen = now;
        Some(entry.store.clone())
    }

    fn evict_expired(&self, sessions: &mut HashMap<String, SessionEntry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= self.idle_ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!(expired, "expired idle sessions");
        }
    }
}

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(cfg: CoreConfig) -> Self {
        Self::with_sessions(cfg, SessionRegistry::default())
    }

    pub fn with_sessions(cfg: CoreConfig, sessions: SessionRegistry) -> Self {
        Self {
            cfg: Arc::new(cfg),
            sessions: Arc::new(sessions),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        common_symptoms,
        advice,
        create_assessment,
        store_session_assessment,
        session_results,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        CommonSymptomsRes,
        AssessmentReq,
        AssessmentRes,
        StoreAssessmentRes,
        AdviceRes,
        api_shared::SummaryRes,
        api_shared::DiagnosisRes,
        api_shared::MedicineRes,
        api_shared::LifestyleAdviceRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/symptoms/common", get(common_symptoms))
        .route("/advice", get(advice))
        .route("/assessments", post(create_assessment))
        .route(
            "/sessions/:session_id/assessment",
            put(store_session_assessment),
        )
        .route("/sessions/:session_id/results", get(session_results))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves the REST API until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Cura REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorRes {
            error: message.into(),
        }),
    )
}

fn validate_session_id(session_id: &str) -> Result<(), ApiError> {
    let ok = !session_id.is_empty()
        && session_id.len() <= MAX_SESSION_ID_LEN
        && session_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'));
    if ok {
        Ok(())
    } else {
        Err(error(StatusCode::BAD_REQUEST, "Invalid session id"))
    }
}

async fn analysis_pause(cfg: &CoreConfig) {
    let delay = cfg.analysis_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/symptoms/common",
    responses(
        (status = 200, description = "Quick-add symptoms", body = CommonSymptomsRes)
    )
)]
/// List the quick-add symptoms offered by the assessment form.
#[axum::debug_handler]
async fn common_symptoms(State(_state): State<AppState>) -> Json<CommonSymptomsRes> {
    Json(CommonSymptomsRes {
        symptoms: COMMON_SYMPTOMS.iter().map(|s| s.to_string()).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/advice",
    responses(
        (status = 200, description = "Fixed advice content", body = AdviceRes)
    )
)]
#[axum::debug_handler]
async fn advice(State(_state): State<AppState>) -> Json<AdviceRes> {
    Json(AdviceRes::from(&ADVICE_SHEET))
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = AssessmentReq,
    responses(
        (status = 200, description = "Assessment results", body = AssessmentRes),
        (status = 400, description = "Form validation failed", body = ErrorRes)
    )
)]
/// Assess symptoms and return results in one round trip.
///
/// The report is validated, classified and rendered directly. The configured analysis delay
/// is applied before responding.
///
/// # Errors
/// Returns `400 Bad Request` if the form fails validation.
#[axum::debug_handler]
async fn create_assessment(
    State(state): State<AppState>,
    Json(req): Json<AssessmentReq>,
) -> Result<Json<AssessmentRes>, ApiError> {
    let report = req.into_form().submit_now().map_err(|e| {
        tracing::warn!("Assessment rejected: {}", e);
        error(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let results = render_results(&report);
    analysis_pause(&state.cfg).await;
    Ok(Json(AssessmentRes::from(&results)))
}

#[utoipa::path(
    put,
    path = "/sessions/{session_id}/assessment",
    request_body = AssessmentReq,
    params(("session_id" = String, Path, description = "Browser session identifier")),
    responses(
        (status = 200, description = "Assessment stored", body = StoreAssessmentRes),
        (status = 400, description = "Invalid session id or form", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Store an assessment in the session for the results view to pick up.
///
/// Replaces any assessment stored earlier in the same session.
#[axum::debug_handler]
async fn store_session_assessment(
    State(state): State<AppState>,
    AxumPath(session_id): AxumPath<String>,
    Json(req): Json<AssessmentReq>,
) -> Result<Json<StoreAssessmentRes>, ApiError> {
    validate_session_id(&session_id)?;

    let report = req.into_form().submit_now().map_err(|e| {
        tracing::warn!("Assessment rejected: {}", e);
        error(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let store = state.sessions.get_or_create(&session_id);
    match store_report(&*store, &report) {
        Ok(()) => Ok(Json(StoreAssessmentRes {
            stored: true,
            timestamp: report.timestamp().to_rfc3339(),
        })),
        Err(e) => {
            tracing::error!("Store assessment error: {:?}", e);
            Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/results",
    params(("session_id" = String, Path, description = "Browser session identifier")),
    responses(
        (status = 200, description = "Assessment results", body = AssessmentRes),
        (status = 303, description = "No stored assessment; redirect to the form"),
        (status = 400, description = "Invalid session id", body = ErrorRes),
        (status = 500, description = "Stored assessment could not be read", body = ErrorRes)
    )
)]
/// Render results for the assessment stored in the session.
///
/// Redirects to the assessment form when the session holds no assessment.
#[axum::debug_handler]
async fn session_results(
    State(state): State<AppState>,
    AxumPath(session_id): AxumPath<String>,
) -> Result<Response, ApiError> {
    validate_session_id(&session_id)?;

    let view = match state.sessions.get(&session_id) {
        Some(store) => results_view(&*store),
        None => results_view(&MemorySessionStore::new()),
    };

    match view {
        Ok(ResultsView::Redirect { to }) => Ok(Redirect::to(to).into_response()),
        Ok(ResultsView::Ready(results)) => {
            analysis_pause(&state.cfg).await;
            Ok(Json(AssessmentRes::from(&*results)).into_response())
        }
        Err(e) => {
            tracing::error!("Session results error: {:?}", e);
            Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
