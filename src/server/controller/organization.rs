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
        organization::{CreateOrganizationDto, OrganizationDto, UpdateOrganizationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::organization::{OrganizationFields, UpsertOrganizationParams},
        service::organization::OrganizationService,
        state::AppState,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "ucsborganization";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrgCodeParam {
    /// Short code identifying the organization, e.g. `zpr`
    pub org_code: String,
}

/// List all organizations.
///
/// # Access Control
/// - `User` - Any logged-in user
#[utoipa::path(
    get,
    path = "/api/ucsborganization/all",
    tag = ORGANIZATION_TAG,
    responses(
        (status = 200, description = "All organizations", body = Vec<OrganizationDto>),
        (status = 403, description = "User not authenticated"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_organizations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let organizations = OrganizationService::new(&state.db).get_all().await?;

    let dtos: Vec<OrganizationDto> = organizations.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single organization by code.
///
/// # Access Control
/// - `User` - Any logged-in user
///
/// # Returns
/// - `200 OK` - The organization
/// - `403 Forbidden` - User not authenticated
/// - `404 Not Found` - No organization with that code
#[utoipa::path(
    get,
    path = "/api/ucsborganization",
    tag = ORGANIZATION_TAG,
    params(OrgCodeParam),
    responses(
        (status = 200, description = "The organization", body = OrganizationDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated"),
        (status = 404, description = "Organization not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organization(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<OrgCodeParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let Query(params) = params?;

    let organization = OrganizationService::new(&state.db)
        .get_by_code(&params.org_code)
        .await?;

    Ok((StatusCode::OK, Json(organization.into_dto())))
}

/// Create an organization.
///
/// All fields are supplied as query parameters. An organization stored under the
/// same code is overwritten.
///
/// # Access Control
/// - `Admin` - Only admins can create organizations
#[utoipa::path(
    post,
    path = "/api/ucsborganization/post",
    tag = ORGANIZATION_TAG,
    params(CreateOrganizationDto),
    responses(
        (status = 200, description = "Successfully stored organization", body = OrganizationDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Query<CreateOrganizationDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(payload) = payload?;

    let organization = OrganizationService::new(&state.db)
        .create(UpsertOrganizationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(organization.into_dto())))
}

/// Replace the fields of an existing organization.
///
/// The code is taken from the query string; an `orgCode` in the body is ignored.
///
/// # Access Control
/// - `Admin` - Only admins can update organizations
#[utoipa::path(
    put,
    path = "/api/ucsborganization",
    tag = ORGANIZATION_TAG,
    params(OrgCodeParam),
    request_body = UpdateOrganizationDto,
    responses(
        (status = 200, description = "Successfully updated organization", body = OrganizationDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 404, description = "Organization not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_organization(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<OrgCodeParam>, QueryRejection>,
    payload: Result<Json<UpdateOrganizationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(params) = params?;
    let Json(payload) = payload?;

    let organization = OrganizationService::new(&state.db)
        .update(&params.org_code, OrganizationFields::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(organization.into_dto())))
}

/// Delete an organization.
///
/// # Access Control
/// - `Admin` - Only admins can delete organizations
#[utoipa::path(
    delete,
    path = "/api/ucsborganization",
    tag = ORGANIZATION_TAG,
    params(OrgCodeParam),
    responses(
        (status = 200, description = "Successfully deleted organization", body = MessageDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 404, description = "Organization not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<OrgCodeParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(params) = params?;

    let message = OrganizationService::new(&state.db)
        .delete(&params.org_code)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
