use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use http::{header, HeaderMap};
use chrono::SecondsFormat;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    article::{Article, NewComment},
    error::RestError,
    http::AppState,
    store::Entry,
};

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn health() -> impl IntoResponse {
    Json(Health {
        status: "OK",
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn get_article(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Json<Article> {
    Json(state.store.get(&name).await)
}

pub async fn upvote(Path(name): Path<String>, State(state): State<AppState>) -> Json<Article> {
    let (article, entry) = state.store.upvote_entry(&name).await;

    if entry == Entry::Created {
        info!("created article {name:?} on first upvote");
    }

    Json(article)
}

pub async fn add_comment(
    Path(name): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Article>, RestError> {
    let comment = comment_from_body(&headers, &body)?;
    let (article, entry) = state.store.add_comment_entry(&name, comment.into()).await;

    if entry == Entry::Created {
        info!("created article {name:?} on first comment");
    }

    Ok(Json(article))
}

/// Bodies not declared as JSON are ignored, the same as an empty one.
fn comment_from_body(headers: &HeaderMap, body: &[u8]) -> Result<NewComment, RestError> {
    if !is_json(headers) {
        debug!("ignoring add-comment body without a JSON content type");
        return Ok(NewComment::default());
    }

    Ok(NewComment::from_json_slice(body)?)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
