use crate::{
    AppState,
    error::{AppError, AppResult, CHAT_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE},
    extract::JsonBody,
    models::{ChatRequest, ChatResponse, SearchRequest},
    pages,
    services::fallback::SearchOutcome,
};
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use http::{HeaderValue, header};
use std::{any::Any, path::PathBuf};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{debug, error, info, warn};

pub const SEARCH_SOURCE_HEADER: &str = "x-search-source";

const HTML: &str = "text/html; charset=utf-8";
const JAVASCRIPT: &str = "application/javascript";
const CSS: &str = "text/css";

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(index))
        .route("/script.js", get(script))
        .route("/style.css", get(style))
        .route("/health", get(health_check))
        .route(
            "/search",
            post(search).layer(CatchPanicLayer::custom(search_panicked)),
        )
        .route(
            "/chat",
            post(chat).layer(CatchPanicLayer::custom(chat_panicked)),
        );

    if let Some(public) = state.assets.public_dir() {
        info!("serving {} under /static", public.display());
        app = app.nest_service("/static", ServeDir::new(public));
    }

    app.with_state(state).layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AllowMethods::any())
                .allow_headers(AllowHeaders::any()),
        ),
    )
}

async fn health_check() -> &'static str {
    "OK"
}

async fn index(State(state): State<AppState>) -> Response {
    if let Some(bytes) = read_asset(&state, "index.html").await {
        return ([(header::CONTENT_TYPE, HTML)], bytes).into_response();
    }

    Html(pages::fallback_index(&state.assets.list_root())).into_response()
}

async fn script(State(state): State<AppState>) -> Response {
    match read_asset(&state, "script.js").await {
        Some(bytes) => ([(header::CONTENT_TYPE, JAVASCRIPT)], bytes).into_response(),
        None => ([(header::CONTENT_TYPE, JAVASCRIPT)], pages::FALLBACK_SCRIPT).into_response(),
    }
}

async fn style(State(state): State<AppState>) -> Response {
    match read_asset(&state, "style.css").await {
        Some(bytes) => ([(header::CONTENT_TYPE, CSS)], bytes).into_response(),
        None => ([(header::CONTENT_TYPE, CSS)], pages::FALLBACK_STYLE).into_response(),
    }
}

/// Resolves and reads a front-end file; unreadable files count as missing.
async fn read_asset(state: &AppState, filename: &str) -> Option<Vec<u8>> {
    let assets = state.assets.clone();
    let name = filename.to_string();
    let path: Option<PathBuf> = tokio::task::spawn_blocking(move || assets.resolve(&name))
        .await
        .ok()
        .flatten();
    let path = path?;

    match tokio::fs::read(&path).await {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!("failed to read {}: {}", path.display(), err);
            None
        }
    }
}

async fn search(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> AppResult<Response> {
    debug!(
        npz = %request.npz,
        meta = %request.meta,
        source_csv = %request.source_csv,
        "search request received"
    );

    let result = state
        .search
        .search(&request.query, request.top_k, request.randomize)
        .await;
    let outcome = SearchOutcome::from_search(result, request.top_k);

    if let SearchOutcome::Degraded { results, cause } = &outcome {
        warn!(
            fallback = true,
            query = %request.query,
            top_k = request.top_k,
            served = results.len(),
            cause = %cause,
            "book search unavailable, serving sample results"
        );
    }

    let source = outcome.source();
    let body = outcome.into_body().map_err(|err| {
        error!(error = %err, "failed to encode search results");
        AppError::Internal(SEARCH_FAILED_MESSAGE)
    })?;

    let mut response = Json(body).into_response();
    response
        .headers_mut()
        .insert(SEARCH_SOURCE_HEADER, HeaderValue::from_static(source));
    Ok(response)
}

async fn chat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let reply = state.chat.reply(&request.message).await;
    Ok(Json(ChatResponse { reply }))
}

fn search_panicked(err: Box<dyn Any + Send + 'static>) -> Response {
    error!(panic = panic_message(&*err), "search handler panicked");
    AppError::Internal(SEARCH_FAILED_MESSAGE).into_response()
}

fn chat_panicked(err: Box<dyn Any + Send + 'static>) -> Response {
    error!(panic = panic_message(&*err), "chat handler panicked");
    AppError::Internal(CHAT_FAILED_MESSAGE).into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    }
}
