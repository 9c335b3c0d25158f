use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{EntityNotFoundDto, ErrorDto, HealthDto, MessageDto},
        article::{ArticleDto, CreateArticleDto, UpdateArticleDto},
        help_request::{CreateHelpRequestDto, HelpRequestDto, UpdateHelpRequestDto},
        organization::{CreateOrganizationDto, OrganizationDto, UpdateOrganizationDto},
        user::{CurrentUserDto, UserDto},
    },
    server::{
        controller::{
            article::{
                create_article, delete_article, get_all_articles, get_article, update_article,
            },
            health::health,
            help_request::{
                create_help_request, delete_help_request, get_all_help_requests,
                get_help_request, update_help_request,
            },
            organization::{
                create_organization, delete_organization, get_all_organizations,
                get_organization, update_organization,
            },
            user::{get_all_users, get_current_user},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Campus API", description = "Articles, help requests and student organizations"),
    paths(
        crate::server::controller::article::get_all_articles,
        crate::server::controller::article::get_article,
        crate::server::controller::article::create_article,
        crate::server::controller::article::update_article,
        crate::server::controller::article::delete_article,
        crate::server::controller::help_request::get_all_help_requests,
        crate::server::controller::help_request::get_help_request,
        crate::server::controller::help_request::create_help_request,
        crate::server::controller::help_request::update_help_request,
        crate::server::controller::help_request::delete_help_request,
        crate::server::controller::organization::get_all_organizations,
        crate::server::controller::organization::get_organization,
        crate::server::controller::organization::create_organization,
        crate::server::controller::organization::update_organization,
        crate::server::controller::organization::delete_organization,
        crate::server::controller::user::get_current_user,
        crate::server::controller::user::get_all_users,
        crate::server::controller::health::health,
    ),
    components(schemas(
        ArticleDto,
        CreateArticleDto,
        UpdateArticleDto,
        HelpRequestDto,
        CreateHelpRequestDto,
        UpdateHelpRequestDto,
        OrganizationDto,
        CreateOrganizationDto,
        UpdateOrganizationDto,
        UserDto,
        CurrentUserDto,
        ErrorDto,
        EntityNotFoundDto,
        MessageDto,
        HealthDto,
    )),
    tags(
        (name = "articles", description = "Articles"),
        (name = "helpRequest", description = "Dining commons help requests"),
        (name = "ucsborganization", description = "Student organizations"),
        (name = "user", description = "Users and roles"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/articles/all", get(get_all_articles))
        .route("/api/articles/post", axum::routing::post(create_article))
        .route(
            "/api/articles",
            get(get_article).put(update_article).delete(delete_article),
        )
        .route("/api/helpRequest/all", get(get_all_help_requests))
        .route(
            "/api/helpRequest/post",
            axum::routing::post(create_help_request),
        )
        .route(
            "/api/helpRequest",
            get(get_help_request)
                .put(update_help_request)
                .delete(delete_help_request),
        )
        .route("/api/ucsborganization/all", get(get_all_organizations))
        .route(
            "/api/ucsborganization/post",
            axum::routing::post(create_organization),
        )
        .route(
            "/api/ucsborganization",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
        .route("/api/currentUser", get(get_current_user))
        .route("/api/admin/users", get(get_all_users))
        .route("/api/docs/openapi.json", get(openapi))
        .route("/health", get(health))
}
