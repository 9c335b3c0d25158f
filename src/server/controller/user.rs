use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CurrentUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/currentUser - Get the authenticated caller
///
/// Returns the caller's user record together with the names of the roles it holds.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: The caller and its roles
/// - `403 Forbidden`: No user in session
#[utoipa::path(
    get,
    path = "/api/currentUser",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = CurrentUserDto),
        (status = 403, description = "User not authenticated"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    Ok((StatusCode::OK, Json(user.into_current_user_dto())))
}

/// GET /api/admin/users - List every user
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: JSON array of UserDto ordered by ID
/// - `403 Forbidden`: User not authenticated or not an admin
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
