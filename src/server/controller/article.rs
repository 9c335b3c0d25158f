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
        article::{ArticleDto, CreateArticleDto, UpdateArticleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::article::ArticleParams,
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "articles";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleIdParam {
    /// Generated article ID
    pub id: i32,
}

/// List all articles.
///
/// # Access Control
/// - `User` - Any logged-in user
///
/// # Returns
/// - `200 OK` - Every article ordered by ID, possibly empty
/// - `403 Forbidden` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/all",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "All articles", body = Vec<ArticleDto>),
        (status = 403, description = "User not authenticated"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_articles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let articles = ArticleService::new(&state.db).get_all().await?;

    let dtos: Vec<ArticleDto> = articles.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single article by ID.
///
/// # Access Control
/// - `User` - Any logged-in user
///
/// # Returns
/// - `200 OK` - The article
/// - `400 Bad Request` - Missing or non-numeric `id`
/// - `403 Forbidden` - User not authenticated
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleIdParam),
    responses(
        (status = 200, description = "The article", body = ArticleDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated"),
        (status = 404, description = "Article not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<ArticleIdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let Query(params) = params?;

    let article = ArticleService::new(&state.db).get_by_id(params.id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Create a new article.
///
/// All fields are supplied as query parameters. The ID is generated by the database.
///
/// # Access Control
/// - `Admin` - Only admins can create articles
///
/// # Returns
/// - `200 OK` - The stored article including its generated ID
/// - `400 Bad Request` - Missing or ill-typed parameter
/// - `403 Forbidden` - User not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/articles/post",
    tag = ARTICLE_TAG,
    params(CreateArticleDto),
    responses(
        (status = 200, description = "Successfully created article", body = ArticleDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Query<CreateArticleDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(payload) = payload?;

    let article = ArticleService::new(&state.db)
        .create(ArticleParams::from_create_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Replace every field of an existing article.
///
/// # Access Control
/// - `Admin` - Only admins can update articles
///
/// # Returns
/// - `200 OK` - The updated article
/// - `400 Bad Request` - Invalid `id` or body
/// - `403 Forbidden` - User not authenticated or not an admin
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    put,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleIdParam),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Successfully updated article", body = ArticleDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 404, description = "Article not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<ArticleIdParam>, QueryRejection>,
    payload: Result<Json<UpdateArticleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(params) = params?;
    let Json(payload) = payload?;

    let article = ArticleService::new(&state.db)
        .update(params.id, ArticleParams::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Delete an article.
///
/// # Access Control
/// - `Admin` - Only admins can delete articles
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `403 Forbidden` - User not authenticated or not an admin
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    delete,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleIdParam),
    responses(
        (status = 200, description = "Successfully deleted article", body = MessageDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "User not authenticated or not an admin"),
        (status = 404, description = "Article not found", body = EntityNotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<ArticleIdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(params) = params?;

    let message = ArticleService::new(&state.db).delete(params.id).await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
