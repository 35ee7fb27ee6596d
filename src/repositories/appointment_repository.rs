use crate::{
    error::AppResult,
    models::appointment::{Appointment, AppointmentStatus, AppointmentWithPet},
};
use nanoid::nanoid;
use sqlx::PgPool;
use time::{Date, OffsetDateTime};

const WITH_PET_SELECT: &str = r#"
    SELECT
        a.id, a.user_id, a.pet_id, a.date, a.time, a.appointment_type,
        a.vet_name, a.clinic_name, a.status, a.notes, a.appointment_notes,
        a.completed_at,
        p.name AS pet_name, p.kind AS pet_kind, p.image_url AS pet_image_url
    FROM appointments a
    JOIN pets p ON p.id = a.pet_id
"#;

pub struct AppointmentRepository;

impl AppointmentRepository {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        pet_id: &str,
        date: Date,
        time: &str,
        appointment_type: &str,
        vet_name: &str,
        clinic_name: &str,
        notes: Option<&str>,
    ) -> AppResult<Appointment> {
        let id = nanoid!();
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                id, user_id, pet_id, date, time, appointment_type,
                vet_name, clinic_name, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(pet_id)
        .bind(date)
        .bind(time)
        .bind(appointment_type)
        .bind(vet_name)
        .bind(clinic_name)
        .bind(notes)
        .fetch_one(pool)
        .await?;
        Ok(appointment)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> AppResult<Vec<AppointmentWithPet>> {
        let sql = format!("{WITH_PET_SELECT} WHERE a.user_id = $1 ORDER BY a.date, a.time");
        let appointments = sqlx::query_as::<_, AppointmentWithPet>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(appointments)
    }

    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<AppointmentWithPet>> {
        let sql = format!("{WITH_PET_SELECT} ORDER BY a.date, a.time");
        let appointments = sqlx::query_as::<_, AppointmentWithPet>(&sql)
            .fetch_all(pool)
            .await?;
        Ok(appointments)
    }

    pub async fn update_status(
        pool: &PgPool,
        id: &str,
        status: AppointmentStatus,
        notes: Option<&str>,
        completed_at: Option<OffsetDateTime>,
    ) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $2,
                appointment_notes = COALESCE($3, appointment_notes),
                completed_at = COALESCE($4, completed_at),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .bind(completed_at)
        .fetch_optional(pool)
        .await?;
        Ok(appointment)
    }
}
