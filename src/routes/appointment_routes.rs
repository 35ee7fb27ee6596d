use crate::{
    auth::auth_extractor::ApiContext,
    controllers::appointment_controller::{
        book_appointment, list_appointments, update_appointment_status,
    },
};
use axum::{
    Router,
    routing::{get, patch},
};

pub fn appointment_routes() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_appointments).post(book_appointment))
        .route("/{id}/status", patch(update_appointment_status))
}
