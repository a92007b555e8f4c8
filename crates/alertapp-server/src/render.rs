//! Presentation of alert listings.

use alertapp_store::Alert;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use clap::ValueEnum;

/// How a page of alerts is written to the response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// One plain-text line per alert.
    #[default]
    Text,
    /// A JSON array of alerts.
    Json,
}

/// Renders `alerts` as a response body in the given format.
pub fn render(format: RenderFormat, alerts: &[Alert]) -> Response {
    match format {
        RenderFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_text(alerts),
        )
            .into_response(),
        RenderFormat::Json => axum::Json(alerts).into_response(),
    }
}

/// Formats alerts as `UUID: <id> --- <timestamp> --- <info>` lines.
pub fn render_text(alerts: &[Alert]) -> String {
    alerts.iter().map(|alert| format!("{alert}\n")).collect()
}
