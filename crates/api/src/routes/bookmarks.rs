//! Bookmark CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use bookmark_store::{Bookmark, BookmarkId, BookmarkStore};
use domain::{BookmarkService, CreateBookmark, DomainError};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: BookmarkStore> {
    pub bookmarks: BookmarkService<S>,
    pub config: Arc<Config>,
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub desc: Option<String>,
    #[serde(default)]
    pub rating: Option<RatingInput>,
}

/// Rating as sent by clients: a JSON number or a numeric string.
/// Integers and fractions are both accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(f64),
    Text(String),
}

impl RatingInput {
    /// Normalizes the rating. An empty string means "no rating".
    fn into_value(self) -> Result<Option<f64>, ApiError> {
        match self {
            RatingInput::Number(n) => Ok(Some(n)),
            RatingInput::Text(s) if s.trim().is_empty() => Ok(None),
            RatingInput::Text(s) => s.trim().parse().map(Some).map_err(|_| {
                tracing::error!(rating = %s, "rating is not a number");
                ApiError::InvalidData
            }),
        }
    }
}

impl TryFrom<CreateBookmarkRequest> for CreateBookmark {
    type Error = ApiError;

    fn try_from(req: CreateBookmarkRequest) -> Result<Self, Self::Error> {
        let rating = match req.rating {
            Some(input) => input.into_value()?,
            None => None,
        };

        Ok(CreateBookmark {
            title: req.title,
            url: req.url,
            desc: req.desc,
            rating,
        })
    }
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id.to_string(),
            title: b.title,
            url: b.url,
            desc: b.desc,
            rating: b.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookmarkCreatedResponse {
    pub id: String,
}

// -- Handlers --

/// GET /bookmarks: list every bookmark.
#[tracing::instrument(skip(state))]
pub async fn list<S: BookmarkStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let bookmarks = state.bookmarks.list_bookmarks().await?;
    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

/// GET /bookmarks/{id}: the matching bookmarks, as an array.
#[tracing::instrument(skip(state))]
pub async fn get<S: BookmarkStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let matches = state.bookmarks.find_bookmark(&BookmarkId::from(id)).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

/// POST /bookmark: validate and store a new bookmark.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: BookmarkStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "malformed bookmark payload");
        ApiError::InvalidData
    })?;

    let bookmark = state
        .bookmarks
        .create_bookmark(CreateBookmark::try_from(req)?)
        .await?;
    let location = state.config.bookmark_location(&bookmark.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkCreatedResponse {
            id: bookmark.id.to_string(),
        }),
    ))
}

/// DELETE /bookmarks/{id}: remove a bookmark.
///
/// Answers 204 whether or not the id matched; an unknown id removes nothing.
#[tracing::instrument(skip(state))]
pub async fn delete<S: BookmarkStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.bookmarks.delete_bookmark(&BookmarkId::from(id)).await {
        Ok(_) => {}
        Err(DomainError::NotFound { id }) => {
            tracing::info!(%id, "no bookmark to delete");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CreateBookmarkRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_rating_forms() {
        let cmd: CreateBookmark = request(serde_json::json!({ "rating": 3 }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, Some(3.0));

        let cmd: CreateBookmark = request(serde_json::json!({ "rating": 4.0 }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, Some(4.0));

        let cmd: CreateBookmark = request(serde_json::json!({ "rating": 2.5 }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, Some(2.5));

        let cmd: CreateBookmark = request(serde_json::json!({ "rating": "4" }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, Some(4.0));

        let cmd: CreateBookmark = request(serde_json::json!({ "rating": " 3.5 " }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, Some(3.5));

        let cmd: CreateBookmark = request(serde_json::json!({ "rating": "" }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, None);

        let cmd: CreateBookmark = request(serde_json::json!({ "rating": null }))
            .try_into()
            .unwrap();
        assert_eq!(cmd.rating, None);

        let cmd: CreateBookmark = request(serde_json::json!({})).try_into().unwrap();
        assert_eq!(cmd.rating, None);
    }

    #[test]
    fn test_non_numeric_rating_is_invalid() {
        let result: Result<CreateBookmark, _> =
            request(serde_json::json!({ "rating": "great" })).try_into();
        assert!(matches!(result, Err(ApiError::InvalidData)));
    }

    #[test]
    fn test_non_scalar_rating_does_not_deserialize() {
        let result =
            serde_json::from_value::<CreateBookmarkRequest>(serde_json::json!({ "rating": [4] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_rating_serializes_as_number() {
        let response = BookmarkResponse::from(Bookmark::new(
            "Half",
            "https://example.com",
            None,
            Some(2.5),
        ));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["rating"], 2.5);
    }
}
