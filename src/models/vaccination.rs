use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Vaccination {
    pub id: String,
    pub pet_id: String,
    pub vaccine_name: String,
    pub veterinarian_name: String,
    pub date_administered: Date,
    pub next_due_date: Option<Date>,
    pub reminder_enabled: bool,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VaccinationInput {
    #[schema(example = "Rabies")]
    pub vaccine_name: String,

    #[schema(example = "Dr. Emma Davis")]
    pub veterinarian_name: String,

    pub date_administered: Date,
    pub next_due_date: Option<Date>,

    #[serde(default = "default_reminder")]
    pub reminder_enabled: bool,

    pub notes: Option<String>,
}

fn default_reminder() -> bool {
    true
}
