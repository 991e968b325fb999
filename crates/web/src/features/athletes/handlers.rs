use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        athlete::{AthleteFilter, AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
        common::{Page, PaginationParams},
    },
    error::StorageError,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "List all athletes successfully", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(db): State<Database>) -> WebResult<Response> {
    let athletes = services::list_athletes(&db);

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/query",
    params(AthleteFilter),
    responses(
        (status = 200, description = "Athletes matching the given substrings", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn query_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteFilter>,
) -> WebResult<Response> {
    let athletes = services::query_athletes(&db, &filter);

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/paginated",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of athletes", body = Page<AthleteResponse>),
        (status = 422, description = "Invalid pagination parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes_paginated(
    State(db): State<Database>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> WebResult<Response> {
    // Unparseable page/size is reported like any other out-of-range value.
    let Query(params) =
        params.map_err(|rejection| StorageError::InvalidParameter(rejection.body_text()))?;
    params.validate()?;

    let page = services::list_athletes_paginated(&db, &params)?;

    Ok(Json(page.map(AthleteResponse::from)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let athlete = services::get_athlete(&db, id)?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or tax id already registered")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let athlete = services::create_athlete(&db, &req)?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = services::update_athlete(&db, id, &update_req)?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}
