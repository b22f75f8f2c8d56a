//! Development server rendering pages per request
//!
//! Nothing is cached between requests: every page load re-reads the content
//! directory through the catalog, so edits show up on the next refresh
//! without a restart.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{CatalogError, MarkdownRenderer};
use crate::generator::sort_for_index;
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Solivar;

/// Server state
struct ServerState {
    app: Solivar,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

/// Start the development server
pub async fn start(app: &Solivar, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        app: app.clone(),
        templates: TemplateRenderer::new()?,
        markdown: MarkdownRenderer::with_theme(&app.config.highlight.theme),
    });

    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/posts/:slug", get(post_handler))
        .route("/posts/:slug/", get(post_handler))
        .route("/style.css", get(style_handler));

    if app.static_dir.exists() {
        router = router.nest_service("/static", ServeDir::new(&app.static_dir));
    }

    let router = router
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // "localhost" is not a bindable address literal
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Index page: all posts, newest first
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let catalog = state.app.catalog();
    let mut summaries = match catalog.list_summaries() {
        Ok(s) => s,
        Err(e) => return internal_error(e),
    };
    sort_for_index(&mut summaries);

    match state.templates.render_index(&state.app.config, &summaries) {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Single post page
async fn post_handler(
    Path(slug): Path<String>,
    State(state): State<Arc<ServerState>>,
) -> Response {
    let post = match state.app.catalog().get_by_slug(&slug) {
        Ok(post) => post,
        Err(CatalogError::NotFound(_)) => return not_found_page(&state),
        Err(e @ CatalogError::InvalidSlug(_)) => {
            tracing::debug!("rejected slug: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid slug").into_response();
        }
        Err(e) => return internal_error(e),
    };

    let content_html = match state.markdown.render(&post.body) {
        Ok(html) => html,
        Err(e) => return internal_error(e),
    };

    let summary = post.into_summary();
    match state
        .templates
        .render_post(&state.app.config, &summary, &content_html)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Embedded stylesheet
async fn style_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn not_found_handler(State(state): State<Arc<ServerState>>) -> Response {
    not_found_page(&state)
}

fn not_found_page(state: &ServerState) -> Response {
    match state.templates.render_not_found(&state.app.config) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => internal_error(e),
    }
}

fn internal_error<E: std::fmt::Display>(e: E) -> Response {
    tracing::error!("request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}
