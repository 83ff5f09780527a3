use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Path, Request, State};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::Hash;
use tracing::info;

/// Body of `POST /shorten`, accepted as JSON or as an urlencoded form.
///
/// An empty body is read as a request without a `url`.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S: Send + Sync> FromRequest<S> for ShortenPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(request) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidBody(e.body_text()))?;
            return Ok(Self(request));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(Self(ShortenRequest::default()));
        }

        let Json(request) = Json::<ShortenRequest>::from_bytes(&bytes)
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        Ok(Self(request))
    }
}

pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenPayload(request): ShortenPayload,
) -> Result<Json<ShortenResponse>> {
    let url = request
        .url
        .filter(|url| !url.is_empty())
        .ok_or(AppError::MissingUrl)?;

    let hash = state.shortener().shorten(url).await?;
    info!(hash = %hash, "created short url");

    Ok(Json(ShortenResponse {
        short_url: hash.to_url(state.base_url()),
        hash: hash.to_string(),
    }))
}

pub async fn redirect_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let hash = Hash::from(hash);
    let url = state.shortener().retrieve(&hash).await?;

    // Stored URLs are not validated, so they may not fit in a header.
    let location = HeaderValue::try_from(url.as_str())
        .map_err(|_| AppError::InvalidLocation(hash.to_string()))?;
    Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response())
}
