//! Shared page rendering for HTML handlers.

use axum::{
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Value};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::flash::{self, Flash};
use crate::state::AppState;

/// Render `template` inside the site layout.
///
/// Adds `site_name` and any pending flash `messages` to the context. A
/// flash cookie in the request is always expired, even if it fails to decode.
pub(crate) fn render_page<S: Serialize>(
    state: &AppState,
    headers: &HeaderMap,
    template: &str,
    ctx: S,
) -> AppResult<Response> {
    let raw_flash = flash::cookie_value(headers);
    let pending = raw_flash.and_then(Flash::decode);
    let messages: Vec<&Flash> = pending.iter().collect();

    let body = state.templates.render(
        template,
        context! {
            site_name => &state.config.site_name,
            messages => messages,
            ..Value::from_serialize(&ctx)
        },
    )?;

    let mut response = Html(body).into_response();
    if raw_flash.is_some() {
        response.headers_mut().insert(SET_COOKIE, flash::clear_cookie());
    }
    Ok(response)
}

/// The site's 404 page.
pub(crate) fn not_found_page(state: &AppState, headers: &HeaderMap) -> Response {
    match render_page(state, headers, "404.html", context! {}) {
        Ok(mut response) => {
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
        Err(e) => e.into_response(),
    }
}

/// Turn a page result into a response, rendering not-found errors as HTML.
pub(crate) fn page_response(
    state: &AppState,
    headers: &HeaderMap,
    result: AppResult<Response>,
) -> Response {
    match result {
        Ok(response) => response,
        Err(AppError::NotFound(msg)) => {
            tracing::debug!(reason = %msg, "Page not found");
            not_found_page(state, headers)
        }
        Err(e) => e.into_response(),
    }
}
