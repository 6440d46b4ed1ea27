//! Request handlers for the question page

use super::flash::{FLASH_COOKIE, clear_cookie, read_cookie};
use super::page::{Level, Page};
use super::router::AppState;
use axum::Json;
use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use llm_qa_application::{AskError, NoProgress};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    question: String,
}

/// `GET /`: empty form, plus a pending flash message if one is validly signed
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(cookie) = read_cookie(&headers, FLASH_COOKIE) else {
        return Html(Page::default().render()).into_response();
    };

    let mut page = Page::default();
    match state.signer.verify(cookie) {
        Some(message) => page.messages.push((Level::Warning, message)),
        None => warn!("Ignoring flash cookie with bad signature"),
    }

    ([(SET_COOKIE, clear_cookie())], Html(page.render())).into_response()
}

/// `POST /`: answer the submitted question
pub async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> Response {
    let prepared = match state.use_case.prepare(&form.question) {
        Ok(prepared) => prepared,
        Err(e) => {
            info!("Rejected submission: {}", e);
            let cookie = state.signer.set_cookie(&e.to_string());
            return ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response();
        }
    };

    let mut page = Page {
        question: form.question,
        normalized: Some(prepared.normalized.clone()),
        ..Page::default()
    };

    match state.use_case.answer(prepared, &NoProgress).await {
        Ok(output) => {
            page.answer = Some(output.answer);
            page.metadata = Some(output.metadata);
        }
        Err(AskError::Invocation { source, .. }) => {
            page.messages.push((Level::Danger, format!("LLM API error: {}", source)));
        }
        Err(e @ AskError::Validation(_)) => {
            page.messages.push((Level::Warning, e.to_string()));
        }
    }

    Html(page.render()).into_response()
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
