use crate::{error::AppResult, models::user::User};
use nanoid::nanoid;
use sqlx::PgPool;

pub struct UserRepository;

impl UserRepository {
    pub async fn create_user(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<User> {
        let id = nanoid!();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    pub async fn get_user_by_id(pool: &PgPool, id: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn get_user_with_password(
        pool: &PgPool,
        email: &str,
    ) -> AppResult<Option<(User, String)>> {
        let record = sqlx::query_as::<_, UserWithPassword>(
            r#"
            SELECT id, email, first_name, last_name, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(record.map(|r| {
            (
                User {
                    id: r.id,
                    email: r.email,
                    first_name: r.first_name,
                    last_name: r.last_name,
                    created_at: r.created_at,
                    updated_at: r.updated_at,
                },
                r.password_hash,
            )
        }))
    }

    pub async fn update_password(pool: &PgPool, id: &str, password_hash: &str) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn email_exists(pool: &PgPool, email: &str) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}

#[derive(sqlx::FromRow)]
struct UserWithPassword {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    created_at: time::OffsetDateTime,
    updated_at: time::OffsetDateTime,
}
