use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::favicon::favicon_png;
use crate::site::{
    close_menu, escape, navigate, open_menu, render_shell, resize, toggle_menu, SiteState,
};
use crate::state::AppState;

/// `menu` is one of `open`, `closed`, `toggle`, `escape`; `width` is the
/// viewport width in CSS pixels.
#[derive(Debug, Default, Deserialize)]
pub struct ShellQuery {
    pub menu: Option<String>,
    pub width: Option<u32>,
}

fn shell(state: &AppState, page_id: &str, query: &ShellQuery) -> Html<String> {
    let site = navigate(SiteState::default(), page_id);
    let site = match query.menu.as_deref() {
        Some("open") => open_menu(site),
        Some("closed") => close_menu(site),
        Some("toggle") => toggle_menu(site),
        Some("escape") => escape(site),
        _ => site,
    };
    let site = match query.width {
        Some(width) => resize(site, width),
        None => site,
    };
    Html(render_shell(&site, &state.content))
}

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<ShellQuery>,
) -> Html<String> {
    shell(&state, "home", &query)
}

/// GET /:page
/// Unknown pages render the home page, never a 404.
pub async fn handle_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(query): Query<ShellQuery>,
) -> Html<String> {
    shell(&state, &page, &query)
}

/// GET /contact
/// The relay owns `POST /contact`, so the page needs its own route.
pub async fn handle_contact_page(
    State(state): State<AppState>,
    Query(query): Query<ShellQuery>,
) -> Html<String> {
    shell(&state, "contact", &query)
}

/// GET /favicon.png
pub async fn handle_favicon() -> Result<impl IntoResponse, AppError> {
    let png = favicon_png(&mut rand::thread_rng())?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        png,
    ))
}
