use axum::{http, Router};
use crate::router::*;
use crate::auth::*;
use crate::config::ServerConfig;
use gram_service::profile::MockUserStore;
use std::error::Error as StdError;
use std::fmt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug)]
pub enum ServerError {
    BindError(String),
    ServeError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::BindError(msg) => write!(f, "Bind error: {}", msg),
            ServerError::ServeError(msg) => write!(f, "Serve error: {}", msg),
        }
    }
}

impl StdError for ServerError {}

pub fn build_app(store: MockUserStore) -> Router {
    let components = collect_components();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::OPTIONS
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    main_router(components, store)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn build_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = MockUserStore::new();
    let app = build_app(store);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| ServerError::BindError(e.to_string()))?;

    tracing::info!("{} listening on {}", config.tittle, config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::ServeError(e.to_string()))?;

    Ok(())
}



fn collect_components() ->  Vec<Router<MockUserStore>> {
    // 인증 관련 라우터
    let router_me_get = get_router_builder("/api/auth/me", get_me::<MockUserStore>);
    let router_logout_post = post_router_builder("/api/auth/logout", logout);

    vec![
        router_me_get,
        router_logout_post,
    ]
}
