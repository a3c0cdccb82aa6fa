//! HTTP surface for language resolution and localized site metadata.

use crate::i18n::{Language, LanguageResolver, Resolution};
use crate::site::SiteMetadata;
use anyhow::{Context, Result};
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::header::{CONTENT_LANGUAGE, VARY};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LanguageResolver>,
}

impl AppState {
    pub fn new(resolver: LanguageResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

impl FromRef<AppState> for Arc<LanguageResolver> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.resolver)
    }
}

/// Extractor yielding the resolved language of the request.
///
/// Never rejects: unusable headers resolve to the default or fallback
/// language.
pub struct PreferredLanguage(pub Resolution);

#[axum::async_trait]
impl<S> FromRequestParts<S> for PreferredLanguage
where
    S: Send + Sync,
    Arc<LanguageResolver>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let resolver: Arc<LanguageResolver> = FromRef::from_ref(state);
        Ok(PreferredLanguage(resolver.resolve(&parts.headers)))
    }
}

#[derive(Debug, Serialize)]
struct LanguageOption {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
}

#[derive(Debug, Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageOption>,
    default_language: Language,
    cookie_name: String,
    local_storage_key: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/language", get(current_language))
        .route("/api/languages", get(supported_languages))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until the process is stopped.
pub async fn serve(address: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("Server error")
}

async fn home(PreferredLanguage(resolution): PreferredLanguage) -> Response {
    let mut response = Json(SiteMetadata::for_language(resolution.language)).into_response();

    let headers = response.headers_mut();
    headers.insert(
        CONTENT_LANGUAGE,
        HeaderValue::from_static(resolution.language.code()),
    );
    headers.insert(VARY, HeaderValue::from_static("Accept-Language, Cookie"));

    response
}

async fn current_language(PreferredLanguage(resolution): PreferredLanguage) -> Json<Resolution> {
    Json(resolution)
}

async fn supported_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let config = state.resolver.config();

    Json(LanguagesResponse {
        languages: state
            .resolver
            .supported_languages()
            .iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                name: lang.name(),
                native_name: lang.native_name(),
            })
            .collect(),
        default_language: config.default_language,
        cookie_name: config.cookie_name.clone(),
        local_storage_key: config.local_storage_key.clone(),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
