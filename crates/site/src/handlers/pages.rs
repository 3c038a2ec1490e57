//! Public page handlers: home page, portfolio and blog.
//!
//! Routes:
//! - `GET /`
//! - `GET /portfolio?page=N`, `GET /portfolio/{id}`
//! - `GET /blog?page=N`, `GET /blog/{id}`
//!
//! `{id}` is a numeric ID or a slug. Unknown pages, unknown IDs and
//! out-of-range page numbers all render the 404 page.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use minijinja::{context, Value};
use serde::Deserialize;

use super::render::{not_found_page, page_response, render_page};
use crate::db::models::DetailKey;
use crate::error::AppResult;
use crate::pagination::PageRequest;
use crate::state::AppState;

/// Query parameters for listing pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Home page.
///
/// `GET /`
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let result = render_index(&state, &headers).await;
    page_response(&state, &headers, result)
}

async fn render_index(state: &AppState, headers: &HeaderMap) -> AppResult<Response> {
    let ctx = state.content.index().await?;
    render_page(state, headers, "index.html", ctx)
}

/// Paginated portfolio listing.
///
/// `GET /portfolio`
pub async fn portfolio_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = render_portfolio_list(&state, &headers, &query).await;
    page_response(&state, &headers, result)
}

async fn render_portfolio_list(
    state: &AppState,
    headers: &HeaderMap,
    query: &PageQuery,
) -> AppResult<Response> {
    let page = PageRequest::parse(query.page.as_deref())?;
    let listing = state.content.portfolio_list(page).await?;
    render_page(
        state,
        headers,
        "portfolio.html",
        context! {
            portfolio_list => &listing.object_list,
            ..Value::from_serialize(&listing)
        },
    )
}

/// Portfolio item detail.
///
/// `GET /portfolio/{id}`
pub async fn portfolio_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let result = render_portfolio_detail(&state, &headers, &id).await;
    page_response(&state, &headers, result)
}

async fn render_portfolio_detail(
    state: &AppState,
    headers: &HeaderMap,
    id: &str,
) -> AppResult<Response> {
    let item = state.content.portfolio_detail(&DetailKey::parse(id)).await?;
    render_page(
        state,
        headers,
        "portfolio-detail.html",
        context! { object => &item, portfolio => &item },
    )
}

/// Paginated blog listing.
///
/// `GET /blog`
pub async fn blog_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = render_blog_list(&state, &headers, &query).await;
    page_response(&state, &headers, result)
}

async fn render_blog_list(
    state: &AppState,
    headers: &HeaderMap,
    query: &PageQuery,
) -> AppResult<Response> {
    let page = PageRequest::parse(query.page.as_deref())?;
    let listing = state.content.blog_list(page).await?;
    render_page(
        state,
        headers,
        "blog.html",
        context! {
            blog_list => &listing.object_list,
            ..Value::from_serialize(&listing)
        },
    )
}

/// Blog post detail.
///
/// `GET /blog/{id}`
pub async fn blog_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let result = render_blog_detail(&state, &headers, &id).await;
    page_response(&state, &headers, result)
}

async fn render_blog_detail(state: &AppState, headers: &HeaderMap, id: &str) -> AppResult<Response> {
    let post = state.content.blog_detail(&DetailKey::parse(id)).await?;
    render_page(
        state,
        headers,
        "blog-detail.html",
        context! { object => &post, blog => &post },
    )
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> Response {
    not_found_page(&state, &headers)
}
