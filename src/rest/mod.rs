// rest/mod.rs — HTTP API server.
//
// Axum server exposing the task CRUD endpoints and the embedded
// single-page UI.
//
// Endpoints:
//   GET    /
//   GET    /tasks
//   POST   /tasks
//   PUT    /tasks/{id}
//   DELETE /tasks/{id}
//   GET    /ui  (+ /ui/app.js, /ui/style.css)

pub mod routes;
pub mod ui;

use anyhow::Result;
use axum::{
    routing::{get, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("HTTP API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Health
        .route("/", get(routes::health::health))
        // Tasks
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        // Embedded single-page UI
        .route("/ui", get(ui::index))
        .route("/ui/app.js", get(ui::app_js))
        .route("/ui/style.css", get(ui::style_css))
        // The UI may be hosted on a different origin
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
