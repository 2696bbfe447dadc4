//! HTTP API gateway for Postcraft.
//!
//! Exposes post generation, the template vocabulary, health checks and the
//! agent's skills over JSON.
//!
//! Built on Axum.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Path};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use postcraft_core::error::ToolError;
use postcraft_core::post::{PostRequest, PostResult};
use postcraft_core::tool::{ToolDefinition, ToolResult};
use postcraft_generator::{PostGenerator, TemplateOptions, template_options};
use postcraft_tools::ContentAgent;

/// Request bodies larger than this are rejected.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

const INDEX_TEXT: &str = "LinkedIn Post Generator API - Use POST /generate endpoint";

/// Shared application state for the gateway.
pub struct GatewayState {
    pub generator: Arc<PostGenerator>,
    pub agent: Arc<ContentAgent>,
}

impl GatewayState {
    /// State whose agent shares `generator`.
    pub fn new(generator: Arc<PostGenerator>) -> Self {
        let agent = Arc::new(ContentAgent::new(generator.clone()));
        Self { generator, agent }
    }
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .route("/health", get(health_handler))
        .route("/options", get(options_handler))
        .route("/skills", get(list_skills_handler))
        .route("/skills/{name}", post(invoke_skill_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start(config: postcraft_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let provider = postcraft_providers::inference_provider(&config);
    let generator = Arc::new(PostGenerator::from_config(&config, provider));
    let state = Arc::new(GatewayState::new(generator));

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

async fn index_handler() -> &'static str {
    INDEX_TEXT
}

async fn generate_handler(
    State(state): State<SharedState>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<PostResult>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "Rejected malformed generate request");
        api_error(StatusCode::BAD_REQUEST, e.body_text())
    })?;

    request
        .validate()
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    info!(
        topic = %request.topic,
        tone = %request.tone,
        post_type = %request.post_type,
        "Generating post"
    );

    Ok(Json(state.generator.create_post(&request).await))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    ai_enabled: bool,
    /// `null` in template-only mode.
    ai_reachable: Option<bool>,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ai_enabled: state.generator.has_ai(),
        ai_reachable: state.generator.provider_reachable().await,
    })
}

async fn options_handler() -> Json<TemplateOptions> {
    Json(template_options())
}

#[derive(Serialize)]
struct SkillListResponse {
    agent: String,
    description: String,
    skills: Vec<ToolDefinition>,
    count: usize,
}

async fn list_skills_handler(State(state): State<SharedState>) -> Json<SkillListResponse> {
    let skills = state.agent.skills();
    Json(SkillListResponse {
        agent: state.agent.name().to_string(),
        description: state.agent.description().to_string(),
        count: skills.len(),
        skills,
    })
}

async fn invoke_skill_handler(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolResult>, ApiError> {
    let arguments = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {e}")))?
    };

    state
        .agent
        .invoke(&name, arguments)
        .await
        .map(Json)
        .map_err(|e| {
            let status = match &e {
                ToolError::NotFound(_) => StatusCode::NOT_FOUND,
                ToolError::InvalidArguments(_) => StatusCode::BAD_REQUEST,
                ToolError::ExecutionFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            api_error(status, e.to_string())
        })
}
