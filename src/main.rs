mod auth;
mod controllers;
mod db;
mod error;
mod models;
mod repositories;
mod routes;
mod services;
mod swagger;

use crate::{
    auth::auth_extractor::ApiContext,
    db::init_pool_default,
    error::AppResult,
    repositories::role_repository::PgRoleStore,
    services::verification::VerificationService,
    swagger::ApiDoc,
};
use dotenvy::dotenv;
use std::{env, sync::Arc};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pawcare_backend=debug,info".into()),
        )
        .init();

    let database_url = env::var("DATABASE_URL")?;
    let jwt_secret = env::var("JWT_SECRET")?;
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse()
        .map_err(|e| error::AppError::Other(format!("Invalid PORT: {}", e)))?;

    let pool = init_pool_default(&database_url).await?;
    tracing::info!("Database pool initialized successfully");

    let roles: Arc<dyn repositories::role_repository::RoleStore> =
        Arc::new(PgRoleStore::new(pool.clone()));
    let ctx = ApiContext {
        db: pool,
        jwt_secret,
        roles: roles.clone(),
        verification: Arc::new(VerificationService::new(roles)),
    };

    let app = routes::api_router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(ctx);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
