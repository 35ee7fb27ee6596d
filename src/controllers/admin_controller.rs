use crate::{
    auth::auth_extractor::{ApiContext, AuthUser, RequireRole},
    error::AppResult,
    models::role_record::{
        RequestFilter, RoleRecord, VerificationOutcome, VerificationRequest, VerificationStats,
        VerificationStatus,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct VerificationListQuery {
    pub status: Option<VerificationStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DecisionRequest {
    #[schema(example = "verified")]
    pub outcome: VerificationOutcome,

    #[schema(example = "looks good")]
    pub notes: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/admin/verifications",
    params(
        ("status" = Option<String>, Query, description = "Filter by verification status"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on clinic or owner name")
    ),
    responses(
        (status = 200, description = "Verification requests", body = [VerificationRequest]),
        (status = 403, description = "Caller is not an admin", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_verifications(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Query(query): Query<VerificationListQuery>,
) -> AppResult<Json<Vec<VerificationRequest>>> {
    RequireRole::admin().check(&ctx, &auth_user.user_id).await?;

    let filter = RequestFilter {
        status: query.status,
        search_text: query.search,
    };
    let requests = ctx.verification.list_requests(&filter).await?;
    Ok(Json(requests))
}

#[utoipa::path(
    get,
    path = "/api/admin/verifications/stats",
    responses(
        (status = 200, description = "Counters per verification status", body = VerificationStats),
        (status = 403, description = "Caller is not an admin", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn verification_stats(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
) -> AppResult<Json<VerificationStats>> {
    RequireRole::admin().check(&ctx, &auth_user.user_id).await?;

    let stats = ctx.verification.stats().await?;
    Ok(Json(stats))
}

#[utoipa::path(
    post,
    path = "/api/admin/verifications/{id}/decision",
    params(("id" = String, Path, description = "Verification request id")),
    request_body = DecisionRequest,
    responses(
        (status = 200, description = "Updated role record", body = RoleRecord),
        (status = 403, description = "Caller is not an admin", body = crate::error::ErrorResponse),
        (status = 404, description = "No such request", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn decide_verification(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(data): Json<DecisionRequest>,
) -> AppResult<Json<RoleRecord>> {
    let record = ctx
        .verification
        .decide(&auth_user.user_id, &id, data.outcome, data.notes)
        .await?;

    tracing::info!(
        request = %id,
        outcome = ?data.outcome,
        "verification request decided"
    );

    Ok(Json(record))
}
