use crate::{
    auth::auth_extractor::{ApiContext, AuthUser},
    error::{AppError, AppResult},
    models::vaccination::{Vaccination, VaccinationInput},
    repositories::{
        pet_repository::PetRepository, vaccination_repository::VaccinationRepository,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

async fn check_pet_ownership(ctx: &ApiContext, pet_id: &str, user_id: &str) -> AppResult<()> {
    PetRepository::get_owned(&ctx.db, pet_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/pets/{pet_id}/vaccinations",
    params(("pet_id" = String, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Vaccination history, newest first", body = [Vaccination]),
        (status = 404, description = "Pet not found or not owned by caller", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Vaccinations"
)]
pub async fn list_vaccinations(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path(pet_id): Path<String>,
) -> AppResult<Json<Vec<Vaccination>>> {
    check_pet_ownership(&ctx, &pet_id, &auth_user.user_id).await?;

    let vaccinations = VaccinationRepository::list_for_pet(&ctx.db, &pet_id).await?;
    Ok(Json(vaccinations))
}

#[utoipa::path(
    post,
    path = "/api/pets/{pet_id}/vaccinations",
    params(("pet_id" = String, Path, description = "Pet id")),
    request_body = VaccinationInput,
    responses(
        (status = 201, description = "Vaccination recorded", body = Vaccination),
        (status = 404, description = "Pet not found or not owned by caller", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Vaccinations"
)]
pub async fn create_vaccination(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path(pet_id): Path<String>,
    Json(data): Json<VaccinationInput>,
) -> AppResult<(StatusCode, Json<Vaccination>)> {
    check_pet_ownership(&ctx, &pet_id, &auth_user.user_id).await?;

    if data.vaccine_name.trim().is_empty() {
        return Err(AppError::Validation("Vaccine name is required".to_string()));
    }

    let vaccination = VaccinationRepository::create(&ctx.db, &pet_id, &data).await?;
    Ok((StatusCode::CREATED, Json(vaccination)))
}

#[utoipa::path(
    put,
    path = "/api/pets/{pet_id}/vaccinations/{id}",
    params(
        ("pet_id" = String, Path, description = "Pet id"),
        ("id" = String, Path, description = "Vaccination id")
    ),
    request_body = VaccinationInput,
    responses(
        (status = 200, description = "Vaccination updated", body = Vaccination),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Vaccinations"
)]
pub async fn update_vaccination(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path((pet_id, id)): Path<(String, String)>,
    Json(data): Json<VaccinationInput>,
) -> AppResult<Json<Vaccination>> {
    check_pet_ownership(&ctx, &pet_id, &auth_user.user_id).await?;

    let vaccination = VaccinationRepository::update(&ctx.db, &id, &pet_id, &data)
        .await?
        .ok_or_else(|| AppError::NotFound("Vaccination not found".to_string()))?;
    Ok(Json(vaccination))
}

#[utoipa::path(
    delete,
    path = "/api/pets/{pet_id}/vaccinations/{id}",
    params(
        ("pet_id" = String, Path, description = "Pet id"),
        ("id" = String, Path, description = "Vaccination id")
    ),
    responses(
        (status = 204, description = "Vaccination deleted"),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Vaccinations"
)]
pub async fn delete_vaccination(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path((pet_id, id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    check_pet_ownership(&ctx, &pet_id, &auth_user.user_id).await?;

    let deleted = VaccinationRepository::delete(&ctx.db, &id, &pet_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Vaccination not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
