use crate::{
    error::AppError,
    models::role_record::Role,
    repositories::role_repository::RoleStore,
    services::verification::VerificationService,
};
use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    extract::CookieJar,
    headers::{Authorization, authorization::Bearer},
};
use hmac::{Hmac, Mac};
use jwt::VerifyWithKey;
use serde::{Deserialize, Serialize};
use sha2::Sha384;
use std::sync::Arc;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

#[derive(Debug, Serialize, Deserialize)]
struct AuthUserClaims {
    user_id: String,
    exp: i64,
}

#[derive(Clone)]
pub struct ApiContext {
    pub db: sqlx::PgPool,
    pub jwt_secret: String,
    pub roles: Arc<dyn RoleStore>,
    pub verification: Arc<VerificationService>,
}

impl ApiContext {
    /// Role used for gating. A user without a role record gates as a client;
    /// registration creates the record, so this only covers rows predating it.
    pub async fn effective_role(&self, user_id: &str) -> Result<Role, AppError> {
        let record = self.roles.get_role(user_id).await?;
        Ok(record.map(|r| r.role).unwrap_or(Role::Client))
    }
}

impl AuthUser {
    pub fn from_token(ctx: &ApiContext, token: &str) -> Result<Self, AppError> {
        let hmac = Hmac::<Sha384>::new_from_slice(ctx.jwt_secret.as_bytes())
            .map_err(|e| AppError::Auth(format!("Invalid HMAC key: {}", e)))?;

        let claims: AuthUserClaims = token.verify_with_key(&hmac).map_err(|e| {
            tracing::debug!("JWT failed to verify: {}", e);
            AppError::Auth("Invalid token".to_string())
        })?;

        if claims.exp < OffsetDateTime::now_utc().unix_timestamp() {
            tracing::debug!("Token expired");
            return Err(AppError::Auth("Token expired".to_string()));
        }

        Ok(Self {
            user_id: claims.user_id,
        })
    }

    pub fn to_jwt(&self, ctx: &ApiContext) -> Result<String, AppError> {
        use jwt::SignWithKey;
        use time::Duration;

        let hmac = Hmac::<Sha384>::new_from_slice(ctx.jwt_secret.as_bytes())
            .map_err(|e| AppError::Auth(format!("Invalid HMAC key: {}", e)))?;

        let claims = AuthUserClaims {
            user_id: self.user_id.clone(),
            exp: (OffsetDateTime::now_utc() + Duration::weeks(2)).unix_timestamp(),
        };

        claims
            .sign_with_key(&hmac)
            .map_err(|e| AppError::Auth(format!("Failed to sign JWT: {}", e)))
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    ApiContext: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match MaybeAuthUser::from_request_parts(parts, state).await? {
            MaybeAuthUser(Some(auth_user)) => Ok(auth_user),
            MaybeAuthUser(None) => Err(AppError::Auth("Not authenticated".to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    ApiContext: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ctx: ApiContext = ApiContext::from_ref(state);

        if let Some(TypedHeader(Authorization(bearer))) = parts
            .extract::<Option<TypedHeader<Authorization<Bearer>>>>()
            .await
            .ok()
            .flatten()
        {
            let user = AuthUser::from_token(&ctx, bearer.token())?;
            return Ok(Self(Some(user)));
        }

        let Ok(jar) = parts.extract::<CookieJar>().await;

        if let Some(cookie) = jar.get("jwt") {
            let user = AuthUser::from_token(&ctx, cookie.value())?;
            return Ok(Self(Some(user)));
        }

        Ok(Self(None))
    }
}

#[derive(Debug, Clone)]
pub struct RequireRole {
    pub roles: Vec<Role>,
}

impl RequireRole {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn admin() -> Self {
        Self::new(vec![Role::Admin])
    }

    pub fn veterinarian() -> Self {
        Self::new(vec![Role::Veterinarian, Role::Admin])
    }

    pub async fn check(&self, ctx: &ApiContext, user_id: &str) -> Result<(), AppError> {
        let role = ctx.effective_role(user_id).await?;

        if !self.roles.contains(&role) {
            return Err(AppError::Forbidden("Insufficient permissions".to_string()));
        }

        Ok(())
    }
}
