use crate::{
    auth::auth_extractor::ApiContext,
    controllers::admin_controller::{decide_verification, list_verifications, verification_stats},
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn admin_routes() -> Router<ApiContext> {
    Router::new()
        .route("/verifications", get(list_verifications))
        .route("/verifications/stats", get(verification_stats))
        .route("/verifications/{id}/decision", post(decide_verification))
}
