//! HTTPS-endpoint flavour of the skill: the platform POSTs request envelopes
//! to `/` and reads the response envelope back.
//!
//! | Endpoint  | Method | Description                 |
//! |-----------|--------|-----------------------------|
//! | `/`       | POST   | Dispatch a skill request    |
//! | `/health` | GET    | Liveness check              |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    alexa,
    skill::{Lookup, Skill},
};

struct AppState<L> {
    skill: Skill<L>,
    application_id: Option<String>,
}

pub fn router<L: Lookup + 'static>(skill: Skill<L>, application_id: Option<String>) -> Router {
    let state = Arc::new(AppState {
        skill,
        application_id,
    });
    Router::new()
        .route("/", post(dispatch::<L>))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dispatch<L: Lookup + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Json(request): Json<alexa::Request>,
) -> Result<Json<alexa::Response>, StatusCode> {
    if let Some(application_id) = &state.application_id {
        if request.application_id() != application_id.as_str() {
            tracing::warn!(
                application_id = request.application_id(),
                "request for another skill"
            );
            return Err(StatusCode::FORBIDDEN);
        }
    }
    Ok(Json(state.skill.dispatch(&request).await))
}

pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(%err, "ctrl-c");
            }
            tracing::info!("shutting down");
        })
        .await
}
