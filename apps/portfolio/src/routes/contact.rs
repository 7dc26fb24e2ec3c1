use axum::{extract::State, Form, Json};
use serde_json::{json, Value};

use crate::contact::{ContactForm, SENT_MESSAGE};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /contact
/// Relays the form once; the response carries the message to show.
pub async fn handle_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Json<Value>, AppError> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() || form.message.trim().is_empty() {
        return Err(AppError::Validation(
            "name, email and message are required".to_string(),
        ));
    }
    let client = state.contact.as_ref().ok_or(AppError::ContactUnavailable)?;
    client.submit(&form).await?;
    Ok(Json(json!({ "message": SENT_MESSAGE })))
}
