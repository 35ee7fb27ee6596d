use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Type, Clone, Copy, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "text")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sqlx(rename = "client")]
    Client,
    #[sqlx(rename = "veterinarian")]
    Veterinarian,
    #[sqlx(rename = "admin")]
    Admin,
}

#[derive(Debug, Serialize, Deserialize, Type, Clone, Copy, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "text")]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[sqlx(rename = "unverified")]
    Unverified,
    #[sqlx(rename = "pending")]
    Pending,
    #[sqlx(rename = "verified")]
    Verified,
    #[sqlx(rename = "rejected")]
    Rejected,
}

/// One row per user. Verification fields are meaningful only while
/// `role` is `veterinarian`; `is_verified` always mirrors
/// `verification_status == verified`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct RoleRecord {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub clinic_name: Option<String>,
    pub license_number: Option<String>,
    pub business_address: Option<String>,
    pub phone_number: Option<String>,
    pub years_of_experience: Option<i32>,
    pub education: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub verification_documents: Option<String>,
    pub verification_status: VerificationStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub verification_submitted_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub verified_at: Option<OffsetDateTime>,
    pub verification_notes: Option<String>,
    pub verified_by: Option<String>,
    pub is_verified: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl RoleRecord {
    /// Fresh record for a user who has none yet. The canonical status default
    /// is `unverified`; no call site ever sees an absent status.
    pub fn new(user_id: &str, role: Role) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: nanoid::nanoid!(),
            user_id: user_id.to_string(),
            role,
            clinic_name: None,
            license_number: None,
            business_address: None,
            phone_number: None,
            years_of_experience: None,
            education: None,
            specializations: None,
            verification_documents: None,
            verification_status: VerificationStatus::Unverified,
            verification_submitted_at: None,
            verified_at: None,
            verification_notes: None,
            verified_by: None,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Admin-facing read-only projection: a veterinarian's role record joined
/// with the owner's display name.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct VerificationRequest {
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub clinic_name: Option<String>,
    pub license_number: Option<String>,
    pub business_address: Option<String>,
    pub phone_number: Option<String>,
    pub years_of_experience: Option<i32>,
    pub education: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub verification_documents: Option<String>,
    pub verification_status: VerificationStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub verification_submitted_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub verified_at: Option<OffsetDateTime>,
    pub verification_notes: Option<String>,
}

/// Public directory entry for booking: verified veterinarians only.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct VerifiedVeterinarian {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub clinic_name: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub years_of_experience: Option<i32>,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq, ToSchema)]
pub struct VerificationStats {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub rejected: usize,
    pub unverified: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestFilter {
    pub status: Option<VerificationStatus>,
    pub search_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerificationOutcome {
    Verified,
    Rejected,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerificationSubmission {
    #[schema(example = "123 Main St, Springfield")]
    pub business_address: String,

    #[schema(example = "555-1111")]
    pub phone_number: String,

    #[schema(example = 5)]
    pub years_of_experience: Option<i32>,

    #[schema(example = "DVM, Cornell University")]
    pub education: String,

    #[serde(default)]
    pub specializations: Vec<String>,

    pub verification_documents: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleUpdateRequest {
    #[schema(example = "veterinarian")]
    pub role: Role,

    #[schema(example = "Happy Paws Clinic")]
    pub clinic_name: Option<String>,

    #[schema(example = "VET-2024-0042")]
    pub license_number: Option<String>,
}
