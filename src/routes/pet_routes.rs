use crate::{
    auth::auth_extractor::ApiContext,
    controllers::{
        pet_controller::{create_pet, delete_pet, list_pets, update_pet},
        vaccination_controller::{
            create_vaccination, delete_vaccination, list_vaccinations, update_vaccination,
        },
    },
};
use axum::{
    Router,
    routing::{get, put},
};

pub fn pet_routes() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_pets).post(create_pet))
        .route("/{id}", put(update_pet).delete(delete_pet))
        .route(
            "/{pet_id}/vaccinations",
            get(list_vaccinations).post(create_vaccination),
        )
        .route(
            "/{pet_id}/vaccinations/{id}",
            put(update_vaccination).delete(delete_vaccination),
        )
}
