use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::mysql::MySqlPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::ReservationForm;
use crate::repository::ReservationRepository;
use crate::validation;
use crate::views;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: MySqlPool,
    /// Application configuration.
    pub config: Config,
}

/// Assembles the full router; shared between `main` and the HTTP tests.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/reservas/nueva", get(new_reservation_form).post(create_reservation))
        .route(
            "/reservas/editar/:id",
            get(edit_reservation_form).post(update_reservation),
        )
        .route("/reservas/:id", delete(delete_reservation))
        // Form payloads only; anything bigger is not a browser submission
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(64 * 1024)))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "gotrip",
            "version": "0.1.0"
        })),
    )
}

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub msg: Option<String>,
}

/// GET /
///
/// Reservation listing, ordered by departure date, with an optional status
/// banner selected by the `msg` query parameter.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, AppError> {
    let repo = ReservationRepository::new(state.pool.clone());
    let reservas = repo.list_all().await?;

    tracing::debug!("GET / - {} reservations listed", reservas.len());
    Ok(Html(views::index_page(&reservas, params.msg.as_deref())))
}

/// GET /reservas/nueva
pub async fn new_reservation_form() -> Html<String> {
    Html(views::new_reservation_page(None, &[]))
}

/// POST /reservas/nueva
///
/// Validates the submitted form and inserts the reservation. A validation
/// failure re-renders the form with the accumulated messages and the
/// submitted values (422); a storage failure redirects to the listing with
/// the error banner.
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReservationForm>,
) -> Response {
    let nueva = match validation::validate(&form) {
        Ok(nueva) => nueva,
        Err(errors) => {
            tracing::info!("POST /reservas/nueva - {} validation errors", errors.len());
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::new_reservation_page(Some(&form), &errors)),
            )
                .into_response();
        }
    };

    let repo = ReservationRepository::new(state.pool.clone());
    match repo.insert(&nueva).await {
        Ok(id) => {
            tracing::info!("POST /reservas/nueva - reservation {} created", id);
            Redirect::to("/?msg=success").into_response()
        }
        Err(e) => {
            tracing::error!("POST /reservas/nueva - storage failure: {}", e);
            Redirect::to("/?msg=error").into_response()
        }
    }
}

/// GET /reservas/editar/{id}
///
/// Edit form pre-filled from storage; 404 when the id resolves to no row.
pub async fn edit_reservation_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let repo = ReservationRepository::new(state.pool.clone());
    let reserva = repo
        .fetch_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

    Ok(Html(views::edit_reservation_page(
        id,
        &ReservationForm::from(&reserva),
        &[],
    )))
}

/// POST /reservas/editar/{id}
///
/// Overwrites every field of the reservation. Validation failure re-renders
/// the edit form (422); an absent id is a 404; a storage failure redirects
/// with the error banner, same as the create path.
pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<ReservationForm>,
) -> Response {
    let nueva = match validation::validate(&form) {
        Ok(nueva) => nueva,
        Err(errors) => {
            tracing::info!(
                "POST /reservas/editar/{} - {} validation errors",
                id,
                errors.len()
            );
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::edit_reservation_page(id, &form, &errors)),
            )
                .into_response();
        }
    };

    let repo = ReservationRepository::new(state.pool.clone());
    match repo.update(id, &nueva).await {
        Ok(true) => {
            tracing::info!("POST /reservas/editar/{} - reservation updated", id);
            Redirect::to("/?msg=updated").into_response()
        }
        Ok(false) => AppError::NotFound("Reserva no encontrada".to_string()).into_response(),
        Err(e) => {
            tracing::error!("POST /reservas/editar/{} - storage failure: {}", id, e);
            Redirect::to("/?msg=error").into_response()
        }
    }
}

/// DELETE /reservas/{id}
///
/// JSON confirmation on success; 404 when the id resolves to no row.
pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let repo = ReservationRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(AppError::NotFound("Reserva no encontrada".to_string()));
    }

    tracing::info!("DELETE /reservas/{} - reservation removed", id);
    Ok(Json(json!({ "mensaje": "Reserva eliminada" })))
}
