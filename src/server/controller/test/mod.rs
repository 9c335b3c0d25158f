use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{middleware::session::AuthSession, router::router, state::AppState};


/// Who the request is sent as.
#[derive(Clone, Copy, PartialEq)]
enum Caller {
    Anonymous,
    User,
    Admin,
}

/// Full application router over an in-memory database, with a caller logged in
/// through a real session cookie.
struct TestApp {
    _context: TestContext,
    db: DatabaseConnection,
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    async fn new(caller: Caller) -> Self {
        let mut context = TestBuilder::new()
            .with_resource_tables()
            .build()
            .await
            .unwrap();
        let db = context.database().await.unwrap().clone();

        let cookie = if caller == Caller::Anonymous {
            None
        } else {
            let user = factory::user::UserFactory::new(&db)
                .admin(caller == Caller::Admin)
                .build()
                .await
                .unwrap();

            let session = context.session().await.unwrap();
            AuthSession::new(session).set_user_id(user.id).await.unwrap();

            Some(context.session_cookie().await.unwrap())
        };

        let store = context.session_store().await.unwrap();
        let router = router()
            .with_state(AppState::new(db.clone()))
            .layer(SessionManagerLayer::new(store));

        Self {
            _context: context,
            db,
            router,
            cookie,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, bytes.to_vec())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Method::POST, uri, None).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Method::DELETE, uri, None).await
    }
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}
