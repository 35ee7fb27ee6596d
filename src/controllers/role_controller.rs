use crate::{
    auth::auth_extractor::{ApiContext, AuthUser},
    error::AppResult,
    models::role_record::{
        RoleRecord, RoleUpdateRequest, VerificationSubmission, VerifiedVeterinarian,
    },
    repositories::role_repository,
};
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/api/roles/me",
    responses(
        (status = 200, description = "Caller's role record", body = RoleRecord),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Roles"
)]
pub async fn get_my_role(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
) -> AppResult<Json<RoleRecord>> {
    let record = ctx.verification.get_or_create_role(&auth_user.user_id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/roles/me",
    request_body = RoleUpdateRequest,
    responses(
        (status = 200, description = "Updated role record", body = RoleRecord),
        (status = 422, description = "Edits refused while verification is pending", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Roles"
)]
pub async fn update_my_role(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Json(data): Json<RoleUpdateRequest>,
) -> AppResult<Json<RoleRecord>> {
    let record = ctx
        .verification
        .update_role_profile(&auth_user.user_id, &data)
        .await?;
    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/api/roles/me/verification",
    request_body = VerificationSubmission,
    responses(
        (status = 200, description = "Verification submitted", body = RoleRecord),
        (status = 422, description = "Missing required field or already pending", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Roles"
)]
pub async fn submit_verification(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Json(data): Json<VerificationSubmission>,
) -> AppResult<Json<RoleRecord>> {
    let record = ctx
        .verification
        .submit_verification(&auth_user.user_id, &data)
        .await?;
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/veterinarians",
    responses((status = 200, description = "Verified veterinarians", body = [VerifiedVeterinarian])),
    tag = "Roles"
)]
pub async fn list_verified_veterinarians(
    State(ctx): State<ApiContext>,
) -> AppResult<Json<Vec<VerifiedVeterinarian>>> {
    let vets = role_repository::list_verified_veterinarians(&ctx.db).await?;
    Ok(Json(vets))
}
