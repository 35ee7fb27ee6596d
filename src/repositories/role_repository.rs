use crate::{
    error::AppResult,
    models::role_record::{RoleRecord, VerificationRequest, VerifiedVeterinarian},
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Narrow accessor over the role-record store so the verification workflow
/// can run against a fake in tests.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn get_role(&self, user_id: &str) -> AppResult<Option<RoleRecord>>;

    async fn get_role_by_id(&self, id: &str) -> AppResult<Option<RoleRecord>>;

    /// Single-record upsert keyed by `user_id`. A failed write leaves the
    /// stored row untouched.
    async fn upsert_role(&self, record: &RoleRecord) -> AppResult<RoleRecord>;

    /// All veterinarian role records joined with the owner's display name,
    /// newest submission first, never-submitted last.
    async fn list_veterinarian_roles(&self) -> AppResult<Vec<VerificationRequest>>;
}

pub struct PgRoleStore {
    pool: PgPool,
}

impl PgRoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn get_role(&self, user_id: &str) -> AppResult<Option<RoleRecord>> {
        let record = sqlx::query_as::<_, RoleRecord>(
            r#"
            SELECT *
            FROM role_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn get_role_by_id(&self, id: &str) -> AppResult<Option<RoleRecord>> {
        let record = sqlx::query_as::<_, RoleRecord>(
            r#"
            SELECT *
            FROM role_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn upsert_role(&self, record: &RoleRecord) -> AppResult<RoleRecord> {
        let stored = sqlx::query_as::<_, RoleRecord>(
            r#"
            INSERT INTO role_records (
                id, user_id, role, clinic_name, license_number, business_address,
                phone_number, years_of_experience, education, specializations,
                verification_documents, verification_status, verification_submitted_at,
                verified_at, verification_notes, verified_by, is_verified
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ON CONFLICT (user_id) DO UPDATE SET
                role = EXCLUDED.role,
                clinic_name = EXCLUDED.clinic_name,
                license_number = EXCLUDED.license_number,
                business_address = EXCLUDED.business_address,
                phone_number = EXCLUDED.phone_number,
                years_of_experience = EXCLUDED.years_of_experience,
                education = EXCLUDED.education,
                specializations = EXCLUDED.specializations,
                verification_documents = EXCLUDED.verification_documents,
                verification_status = EXCLUDED.verification_status,
                verification_submitted_at = EXCLUDED.verification_submitted_at,
                verified_at = EXCLUDED.verified_at,
                verification_notes = EXCLUDED.verification_notes,
                verified_by = EXCLUDED.verified_by,
                is_verified = EXCLUDED.is_verified,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(record.role)
        .bind(&record.clinic_name)
        .bind(&record.license_number)
        .bind(&record.business_address)
        .bind(&record.phone_number)
        .bind(record.years_of_experience)
        .bind(&record.education)
        .bind(&record.specializations)
        .bind(&record.verification_documents)
        .bind(record.verification_status)
        .bind(record.verification_submitted_at)
        .bind(record.verified_at)
        .bind(&record.verification_notes)
        .bind(&record.verified_by)
        .bind(record.is_verified)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn list_veterinarian_roles(&self) -> AppResult<Vec<VerificationRequest>> {
        let requests = sqlx::query_as::<_, VerificationRequest>(
            r#"
            SELECT
                rr.id, rr.user_id, u.first_name, u.last_name, rr.clinic_name,
                rr.license_number, rr.business_address, rr.phone_number,
                rr.years_of_experience, rr.education, rr.specializations,
                rr.verification_documents, rr.verification_status,
                rr.verification_submitted_at, rr.verified_at, rr.verification_notes
            FROM role_records rr
            JOIN users u ON u.id = rr.user_id
            WHERE rr.role = 'veterinarian'
            ORDER BY rr.verification_submitted_at DESC NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }
}

pub async fn list_verified_veterinarians(pool: &PgPool) -> AppResult<Vec<VerifiedVeterinarian>> {
    let vets = sqlx::query_as::<_, VerifiedVeterinarian>(
        r#"
        SELECT
            rr.user_id, u.first_name, u.last_name, rr.clinic_name,
            rr.specializations, rr.years_of_experience
        FROM role_records rr
        JOIN users u ON u.id = rr.user_id
        WHERE rr.role = 'veterinarian' AND rr.is_verified
        ORDER BY u.last_name, u.first_name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(vets)
}
