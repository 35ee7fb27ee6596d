use crate::{
    auth::{
        auth_extractor::{ApiContext, AuthUser},
        utils::{hash_password, verify_password},
    },
    error::{AppError, AppResult},
    models::auth::{
        AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UserInfo,
    },
    repositories::user_repository::UserRepository,
};
use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 422, description = "Invalid registration data", body = crate::error::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(data): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    if UserRepository::email_exists(&ctx.db, &data.email).await? {
        return Err(AppError::Validation("Email already exists".to_string()));
    }

    if data.password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let password_hash = hash_password(&data.password).await?;

    let user = UserRepository::create_user(
        &ctx.db,
        &data.email,
        &password_hash,
        &data.first_name,
        &data.last_name,
    )
    .await?;

    let record = ctx
        .verification
        .create_for_registration(&user.id, data.role, data.clinic_name, data.license_number)
        .await?;

    let auth_user = AuthUser {
        user_id: user.id.clone(),
    };
    let token = auth_user.to_jwt(&ctx)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserInfo {
                id: user.id,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                role: record.role,
            },
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(data): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    let (user, password_hash) = UserRepository::get_user_with_password(&ctx.db, &data.email)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid email or password".to_string()))?;

    verify_password(&data.password, &password_hash).await?;

    let role = ctx.effective_role(&user.id).await?;

    let auth_user = AuthUser {
        user_id: user.id.clone(),
    };
    let token = auth_user.to_jwt(&ctx)?;

    let cookie = Cookie::build(("jwt", token.clone()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::weeks(2))
        .path("/")
        .build();

    let jar = CookieJar::new().add(cookie);

    Ok((
        jar,
        Json(AuthResponse {
            token,
            user: UserInfo {
                id: user.id,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                role,
            },
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Signed out")),
    tag = "Authentication"
)]
pub async fn logout(jar: CookieJar) -> AppResult<CookieJar> {
    let cookie = Cookie::build("jwt")
        .path("/")
        .max_age(Duration::seconds(0))
        .build();

    Ok(jar.remove(cookie))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn get_current_user(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepository::get_user_by_id(&ctx.db, &auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let role = ctx.effective_role(&user.id).await?;

    Ok(Json(UserInfo {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        role,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 401, description = "Wrong current password", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn change_password(
    auth_user: AuthUser,
    State(ctx): State<ApiContext>,
    Json(data): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = UserRepository::get_user_by_id(&ctx.db, &auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let (_, current_hash) = UserRepository::get_user_with_password(&ctx.db, &user.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    verify_password(&data.current_password, &current_hash).await?;

    if data.new_password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let new_hash = hash_password(&data.new_password).await?;

    UserRepository::update_password(&ctx.db, &auth_user.user_id, &new_hash).await?;

    Ok(StatusCode::NO_CONTENT)
}
