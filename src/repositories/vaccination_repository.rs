use crate::{
    error::AppResult,
    models::vaccination::{Vaccination, VaccinationInput},
};
use nanoid::nanoid;
use sqlx::PgPool;

pub struct VaccinationRepository;

impl VaccinationRepository {
    pub async fn create(
        pool: &PgPool,
        pet_id: &str,
        input: &VaccinationInput,
    ) -> AppResult<Vaccination> {
        let id = nanoid!();
        let vaccination = sqlx::query_as::<_, Vaccination>(
            r#"
            INSERT INTO vaccinations (
                id, pet_id, vaccine_name, veterinarian_name, date_administered,
                next_due_date, reminder_enabled, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(pet_id)
        .bind(&input.vaccine_name)
        .bind(&input.veterinarian_name)
        .bind(input.date_administered)
        .bind(input.next_due_date)
        .bind(input.reminder_enabled)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(vaccination)
    }

    pub async fn list_for_pet(pool: &PgPool, pet_id: &str) -> AppResult<Vec<Vaccination>> {
        let vaccinations = sqlx::query_as::<_, Vaccination>(
            r#"
            SELECT *
            FROM vaccinations
            WHERE pet_id = $1
            ORDER BY date_administered DESC
            "#,
        )
        .bind(pet_id)
        .fetch_all(pool)
        .await?;
        Ok(vaccinations)
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        pet_id: &str,
        input: &VaccinationInput,
    ) -> AppResult<Option<Vaccination>> {
        let vaccination = sqlx::query_as::<_, Vaccination>(
            r#"
            UPDATE vaccinations
            SET vaccine_name = $3, veterinarian_name = $4, date_administered = $5,
                next_due_date = $6, reminder_enabled = $7, notes = $8,
                updated_at = NOW()
            WHERE id = $1 AND pet_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(pet_id)
        .bind(&input.vaccine_name)
        .bind(&input.veterinarian_name)
        .bind(input.date_administered)
        .bind(input.next_due_date)
        .bind(input.reminder_enabled)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await?;
        Ok(vaccination)
    }

    pub async fn delete(pool: &PgPool, id: &str, pet_id: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM vaccinations
            WHERE id = $1 AND pet_id = $2
            "#,
        )
        .bind(id)
        .bind(pet_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
