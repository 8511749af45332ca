use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use tokio::net::TcpListener;

use crate::report::ReportBuilder;
use crate::types::{Report, WalletAddress};

/// Starts the API server.
pub async fn serve_api(listener: TcpListener, builder: Arc<ReportBuilder>) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/api/v1/report/:address", get(get_report))
        .with_state(builder);

    let addr = listener.local_addr()?;

    tracing::info!(address = ?addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Handler for `GET /api/v1/report/{address}`.
///
/// Address syntax is validated here, at the edge; the report builder never
/// sees a malformed address. A valid address always yields 200 with a
/// report, however degraded.
async fn get_report(
    State(builder): State<Arc<ReportBuilder>>,
    Path(address): Path<String>,
) -> Result<Json<Report>, (StatusCode, String)> {
    let address: WalletAddress = address
        .parse()
        .map_err(|e: crate::errors::ValidationError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(builder.build_report(&address).await))
}
