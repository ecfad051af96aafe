//! Admin resource handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use shop_admin_core::AdminId;

use crate::{
    error::{ADMIN_NOT_FOUND, AppError},
    models::Admin,
    services::{AdminPayload, AdminService},
    state::AppState,
};

/// Response for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: AdminId,
}

/// Response for a successful update.
#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub message: &'static str,
    pub admin: Admin,
}

fn service(state: &AppState) -> AdminService<'_> {
    AdminService::new(state.store(), state.hasher())
}

/// Raw `{id}` segment. A segment that cannot be decoded is treated like any
/// other malformed ID.
fn admin_id(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected admin id");
            Err(AppError::NotFound(ADMIN_NOT_FOUND.to_string()))
        }
    }
}

/// Create an admin.
///
/// # Errors
///
/// 400 for validation failures or a duplicate email, 500 if the write fails.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AdminPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = payload?;
    let record = service(&state).create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Admin created successfully",
            id: record.id,
        }),
    ))
}

/// List every admin, without passwords.
///
/// # Errors
///
/// 500 if the store fails.
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Admin>>, AppError> {
    Ok(Json(service(&state).list().await?))
}

/// Get one admin, without password.
///
/// # Errors
///
/// 404 for an unknown or malformed ID, 500 if the store fails.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Admin>, AppError> {
    let id = admin_id(id)?;
    Ok(Json(service(&state).get(&id).await?))
}

/// Partially update an admin.
///
/// # Errors
///
/// 400 for validation failures or an email owned by another admin, 404 for
/// an unknown ID, 500 if the write fails.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<AdminPayload>, JsonRejection>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let Json(payload) = payload?;
    let id = admin_id(id)?;
    let admin = service(&state).update(&id, &payload).await?;

    Ok(Json(UpdatedResponse {
        message: "Admin updated successfully",
        admin,
    }))
}
