pub mod admin_routes;
pub mod appointment_routes;
pub mod auth_routes;
pub mod pet_routes;
pub mod role_routes;

use crate::{auth::auth_extractor::ApiContext, controllers::role_controller};
use axum::{Router, routing::get};

pub fn api_router() -> Router<ApiContext> {
    Router::new()
        .nest("/api/auth", auth_routes::auth_routes())
        .nest("/api/roles", role_routes::role_routes())
        .nest("/api/admin", admin_routes::admin_routes())
        .nest("/api/pets", pet_routes::pet_routes())
        .nest("/api/appointments", appointment_routes::appointment_routes())
        .route(
            "/api/veterinarians",
            get(role_controller::list_verified_veterinarians),
        )
}
