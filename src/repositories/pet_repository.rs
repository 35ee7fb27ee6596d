use crate::{
    error::AppResult,
    models::pet::{Pet, PetInput},
};
use nanoid::nanoid;
use sqlx::PgPool;

pub struct PetRepository;

impl PetRepository {
    pub async fn create(pool: &PgPool, user_id: &str, input: &PetInput) -> AppResult<Pet> {
        let id = nanoid!();
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            INSERT INTO pets (
                id, user_id, name, kind, breed, age, weight, color,
                microchip_id, notes, image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.kind)
        .bind(&input.breed)
        .bind(&input.age)
        .bind(&input.weight)
        .bind(&input.color)
        .bind(&input.microchip_id)
        .bind(&input.notes)
        .bind(&input.image_url)
        .fetch_one(pool)
        .await?;
        Ok(pet)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> AppResult<Vec<Pet>> {
        let pets = sqlx::query_as::<_, Pet>(
            r#"
            SELECT *
            FROM pets
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(pets)
    }

    pub async fn get_owned(pool: &PgPool, id: &str, user_id: &str) -> AppResult<Option<Pet>> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            SELECT *
            FROM pets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(pet)
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        user_id: &str,
        input: &PetInput,
    ) -> AppResult<Option<Pet>> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            UPDATE pets
            SET name = $3, kind = $4, breed = $5, age = $6, weight = $7,
                color = $8, microchip_id = $9, notes = $10, image_url = $11,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.kind)
        .bind(&input.breed)
        .bind(&input.age)
        .bind(&input.weight)
        .bind(&input.color)
        .bind(&input.microchip_id)
        .bind(&input.notes)
        .bind(&input.image_url)
        .fetch_optional(pool)
        .await?;
        Ok(pet)
    }

    pub async fn delete(pool: &PgPool, id: &str, user_id: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM pets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
