use crate::{
    auth::auth_extractor::ApiContext,
    controllers::role_controller::{get_my_role, submit_verification, update_my_role},
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn role_routes() -> Router<ApiContext> {
    Router::new()
        .route("/me", get(get_my_role).put(update_my_role))
        .route("/me/verification", post(submit_verification))
}
