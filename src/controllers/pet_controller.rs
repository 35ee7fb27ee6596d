use crate::{
    auth::auth_extractor::{ApiContext, AuthUser},
    error::{AppError, AppResult},
    models::pet::{Pet, PetInput},
    repositories::pet_repository::PetRepository,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/pets",
    responses((status = 200, description = "Caller's pets, newest first", body = [Pet])),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
pub async fn list_pets(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
) -> AppResult<Json<Vec<Pet>>> {
    let pets = PetRepository::list_for_user(&ctx.db, &auth_user.user_id).await?;
    Ok(Json(pets))
}

#[utoipa::path(
    post,
    path = "/api/pets",
    request_body = PetInput,
    responses(
        (status = 201, description = "Pet created", body = Pet),
        (status = 422, description = "Invalid pet data", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
pub async fn create_pet(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Json(data): Json<PetInput>,
) -> AppResult<(StatusCode, Json<Pet>)> {
    if data.name.trim().is_empty() {
        return Err(AppError::Validation("Pet name is required".to_string()));
    }
    if data.kind.trim().is_empty() {
        return Err(AppError::Validation("Pet type is required".to_string()));
    }

    let pet = PetRepository::create(&ctx.db, &auth_user.user_id, &data).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

#[utoipa::path(
    put,
    path = "/api/pets/{id}",
    params(("id" = String, Path, description = "Pet id")),
    request_body = PetInput,
    responses(
        (status = 200, description = "Pet updated", body = Pet),
        (status = 404, description = "Pet not found or not owned by caller", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
pub async fn update_pet(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(data): Json<PetInput>,
) -> AppResult<Json<Pet>> {
    let pet = PetRepository::update(&ctx.db, &id, &auth_user.user_id, &data)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;
    Ok(Json(pet))
}

#[utoipa::path(
    delete,
    path = "/api/pets/{id}",
    params(("id" = String, Path, description = "Pet id")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Pet not found or not owned by caller", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pets"
)]
pub async fn delete_pet(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = PetRepository::delete(&ctx.db, &id, &auth_user.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Pet not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
