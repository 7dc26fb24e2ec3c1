use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::cv::CV_FILE_NAME;
use crate::errors::AppError;
use crate::state::AppState;

fn pdf_response(bytes: Bytes, disposition: &str) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("{disposition}; filename=\"{CV_FILE_NAME}\""),
            ),
        ],
        bytes,
    )
}

/// GET /cv.pdf
/// Generates a fresh CV and sends it as a download.
pub async fn handle_download(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cv = state.cv_store.generator().generate().await?;
    Ok(pdf_response(cv.bytes, "attachment"))
}

/// GET /cv/:id
/// Displays a CV produced earlier by the terminal's `cv` command.
pub async fn handle_transient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::Validation(format!("'{id}' is not a valid CV id")))?;
    let bytes = state
        .cv_store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("CV {id} has expired or never existed")))?;
    Ok(pdf_response(bytes, "inline"))
}
