use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::advisor::AdvisorConfig;
use crate::cards::{Card, StartingHand};
use crate::decision::{Decision, analyze};
use crate::error::ValidationError;
use crate::evaluator::HandEvaluation;
use crate::position::{Position, PositionCategory, PositionStats};
use crate::profiler::ActionProfile;

const HISTORY_LIMIT: usize = 1_000;

#[derive(Clone)]
struct AppState {
    history: Arc<RwLock<VecDeque<AnalysisRecord>>>,
    default_players: u32,
}

impl AppState {
    fn new(config: &AdvisorConfig) -> Self {
        Self {
            history: Arc::new(RwLock::new(VecDeque::new())),
            default_players: config.default_players,
        }
    }

    fn record(&self, record: AnalysisRecord) {
        let mut history = self.history.write();
        if history.len() == HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(record);
    }

    fn find(&self, id: &Uuid) -> Option<AnalysisRecord> {
        self.history.read().iter().find(|r| r.id == *id).cloned()
    }
}

/// A served recommendation, kept so clients can list what was asked earlier.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    #[serde_as(as = "[DisplayFromStr; 2]")]
    pub cards: [Card; 2],
    pub position: Position,
    pub stack_bb: u32,
    pub player_count: u32,
    pub actions: Vec<String>,
    pub evaluation: HandEvaluation,
    pub profile: ActionProfile,
    pub decision: Decision,
}

#[derive(Debug, Deserialize)]
struct DecisionRequest {
    cards: [String; 2],
    position: String,
    stack_bb: u32,
    player_count: Option<u32>,
    #[serde(default)]
    actions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PositionInfo {
    pub position: Position,
    pub multiplier: f64,
    pub category: PositionCategory,
    pub stats: PositionStats,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub async fn serve(addr: SocketAddr, config: AdvisorConfig) -> Result<()> {
    let app = build_router(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "advisor API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/decisions", get(list_decisions).post(create_decision))
        .route("/decisions/:id", get(fetch_decision))
        .route("/positions/:position", get(position_info));

    Router::new()
        .route("/healthz", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn router() -> Router {
    build_router(AppState::new(&AdvisorConfig::default()))
}

async fn health() -> &'static str {
    "ok"
}

async fn create_decision(
    State(state): State<AppState>,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let first: Card = req.cards[0].trim().parse()?;
    let second: Card = req.cards[1].trim().parse()?;
    let hand = StartingHand::new(first, second);
    let position = Position::parse(&req.position);
    let player_count = req.player_count.unwrap_or(state.default_players);

    let analysis = analyze(&hand, &position, req.stack_bb, player_count, req.actions.as_slice());
    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        cards: hand.cards(),
        position,
        stack_bb: req.stack_bb,
        player_count,
        actions: req.actions,
        evaluation: analysis.evaluation,
        profile: analysis.profile,
        decision: analysis.decision,
    };
    tracing::info!(id = %record.id, %hand, action = %record.decision.action, "recorded analysis");
    state.record(record.clone());
    Ok(Json(record))
}

async fn list_decisions(State(state): State<AppState>) -> Json<Vec<AnalysisRecord>> {
    Json(state.history.read().iter().cloned().collect())
}

async fn fetch_decision(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    state
        .find(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("analysis"))
}

async fn position_info(Path(position): Path<String>) -> Result<Json<PositionInfo>, ApiError> {
    let position = Position::parse(&position);
    let category = position.category().ok_or(ApiError::NotFound("position"))?;
    Ok(Json(PositionInfo {
        multiplier: position.multiplier(),
        category,
        stats: category.stats(),
        position,
    }))
}
