// rest/ui.rs — Embedded single-page UI.
//
// The assets are compiled into the binary so the service ships as a
// single file. The page talks to its own origin unless
// window.TASKD_API_BASE is set before app.js loads.

use axum::http::header;
use axum::response::{Html, IntoResponse};

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../web/app.js"),
    )
}

pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../web/style.css"),
    )
}
