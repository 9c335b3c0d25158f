use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{EntityNotFoundDto, ErrorDto, MessageDto},
        help_request::{CreateHelpRequestDto, HelpRequestDto, UpdateHelpRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::help_request::{HelpRequestFields, UpsertHelpRequestParams},
        service::help_request::HelpRequestService,
        state::AppState,
    },
};

/// Tag for grouping help request endpoints in OpenAPI documentation
pub static HELP_REQUEST_TAG: &str = "helpRequest";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HelpRequestCodeParam {
    /// Code identifying the help request
    pub code: String,
}

/// List all help requests.
///
/// # Access Control
/// - `User` - Any logged-in user
#[utoipa::path(
    get,
    path = "/api/helpRequest/all",
    tag = HELP_REQUEST_TAG,
    responses(
        (status = 200, description = "All help requests", body = Vec<HelpRequestDto>),
        (status = 403, description = "User not authenticated"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_help_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let requests = HelpRequestService::new(&state.db).get_all().await?;

    let dtos: Vec<HelpRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single help request by code.
///
/// # Access Control
/// - `User` - Any logged-in user
///
/// # Returns
/// - `200 OK` - The help request
/// - `403 Forbidden` - User not authenticated
/// - `404 Not Found` - No help request with that code
#[utoipa::path(
    get,
    path = "/api/helpRequest",
    tag = HELP_REQUEST_TAG,
    params(HelpRequestCodeParam),
    responses(
        (status = 200, description = "The help request", body = HelpRequestDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated"),
        (status = 404, description = "Help request not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_help_request(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<HelpRequestCodeParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let Query(params) = params?;

    let request = HelpRequestService::new(&state.db)
        .get_by_code(&params.code)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Create a help request.
///
/// All fields are supplied as query parameters. A request stored under the same
/// code is overwritten.
///
/// # Access Control
/// - `Admin` - Only admins can create help requests
#[utoipa::path(
    post,
    path = "/api/helpRequest/post",
    tag = HELP_REQUEST_TAG,
    params(CreateHelpRequestDto),
    responses(
        (status = 200, description = "Successfully stored help request", body = HelpRequestDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_help_request(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Query<CreateHelpRequestDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(payload) = payload?;

    let request = HelpRequestService::new(&state.db)
        .create(UpsertHelpRequestParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Replace the fields of an existing help request.
///
/// The code is taken from the query string; a `code` in the body is ignored.
///
/// # Access Control
/// - `Admin` - Only admins can update help requests
#[utoipa::path(
    put,
    path = "/api/helpRequest",
    tag = HELP_REQUEST_TAG,
    params(HelpRequestCodeParam),
    request_body = UpdateHelpRequestDto,
    responses(
        (status = 200, description = "Successfully updated help request", body = HelpRequestDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 404, description = "Help request not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_help_request(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<HelpRequestCodeParam>, QueryRejection>,
    payload: Result<Json<UpdateHelpRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(params) = params?;
    let Json(payload) = payload?;

    let request = HelpRequestService::new(&state.db)
        .update(&params.code, HelpRequestFields::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Delete a help request.
///
/// # Access Control
/// - `Admin` - Only admins can delete help requests
#[utoipa::path(
    delete,
    path = "/api/helpRequest",
    tag = HELP_REQUEST_TAG,
    params(HelpRequestCodeParam),
    responses(
        (status = 200, description = "Successfully deleted help request", body = MessageDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 404, description = "Help request not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_help_request(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<HelpRequestCodeParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(params) = params?;

    let message = HelpRequestService::new(&state.db)
        .delete(&params.code)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
