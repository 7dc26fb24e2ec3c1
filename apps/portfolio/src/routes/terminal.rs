use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cv::CvLauncher;
use crate::errors::AppError;
use crate::site::{navigate, render_with_transcript, SiteState};
use crate::state::AppState;
use crate::terminal::{Action, EntryKind, LogEntry, Resolution, CV_CONFIRMATION};

#[derive(Debug, Deserialize)]
pub struct TerminalRequest {
    pub input: String,
}

/// A command posted either by the page script (JSON) or by the plain HTML
/// form (`application/x-www-form-urlencoded`).
#[derive(Debug)]
pub enum TerminalInput {
    Json(TerminalRequest),
    Form(TerminalRequest),
}

#[async_trait]
impl<S> FromRequest<S> for TerminalInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(request) = Form::<TerminalRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(TerminalInput::Form(request))
        } else {
            let Json(request) = Json::<TerminalRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(TerminalInput::Json(request))
        }
    }
}

/// The client types `entries` one character at a time, `interval_ms` apart.
#[derive(Debug, Serialize)]
pub struct TerminalResponse {
    /// The echoed command line; absent for blank input.
    pub echo: Option<String>,
    pub entries: Vec<LogEntry>,
    /// The client must empty its output log.
    pub clear: bool,
    /// Where the CV generated by `cv` can be opened.
    pub cv_location: Option<String>,
    pub interval_ms: u64,
}

impl TerminalResponse {
    /// Everything the terminal pane shows after this command, for clients
    /// that render the page instead of animating it.
    fn transcript(&self, welcome: &str) -> String {
        if self.clear {
            return String::new();
        }
        let mut lines = vec![welcome.trim_end().to_string()];
        lines.extend(self.echo.iter().cloned());
        lines.extend(self.entries.iter().map(|entry| entry.text.clone()));
        lines.extend(self.cv_location.iter().cloned());
        lines.join("\n")
    }
}

fn entry(kind: EntryKind, text: String) -> LogEntry {
    LogEntry { id: 0, kind, text }
}

async fn dispatch(state: &AppState, input: &str) -> Result<TerminalResponse, AppError> {
    let command = input.trim();
    let mut response = TerminalResponse {
        echo: None,
        entries: Vec::new(),
        clear: false,
        cv_location: None,
        interval_ms: state.config.typewriter_interval.as_millis() as u64,
    };

    let resolution = state.commands.resolve(command);
    if resolution != Resolution::Empty {
        response.echo = Some(format!("{} {}", state.content.terminal.prompt, command));
    }
    debug!("Terminal API command {command:?}");

    match resolution {
        Resolution::Empty => {}
        Resolution::Output(text) => response.entries.push(entry(EntryKind::Output, text)),
        Resolution::NotFound(message) => response.entries.push(entry(EntryKind::Error, message)),
        Resolution::Action(Action::Clear) => response.clear = true,
        Resolution::Action(Action::OpenCv) => {
            let location = state.cv_store.launch().await?;
            response.cv_location = Some(location);
            response
                .entries
                .push(entry(EntryKind::Output, CV_CONFIRMATION.to_string()));
        }
    }

    Ok(response)
}

/// POST /api/terminal
/// JSON in, JSON out; a posted form gets the terminal page back instead.
pub async fn handle_command(
    State(state): State<AppState>,
    input: TerminalInput,
) -> Result<Response, AppError> {
    match input {
        TerminalInput::Json(request) => {
            let response = dispatch(&state, &request.input).await?;
            Ok(Json(response).into_response())
        }
        TerminalInput::Form(request) => {
            let response = dispatch(&state, &request.input).await?;
            let transcript = response.transcript(&state.content.terminal.welcome);
            let site = navigate(SiteState::default(), "terminal");
            Ok(Html(render_with_transcript(&site, &state.content, &transcript)).into_response())
        }
    }
}
