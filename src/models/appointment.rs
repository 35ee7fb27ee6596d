use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Type, Clone, Copy, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "text")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[sqlx(rename = "scheduled")]
    Scheduled,
    #[sqlx(rename = "completed")]
    Completed,
    #[sqlx(rename = "cancelled")]
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub date: Date,
    pub time: String,
    pub appointment_type: String,
    pub vet_name: String,
    pub clinic_name: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub appointment_notes: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Listing projection joined with the pet the appointment is for.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct AppointmentWithPet {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub date: Date,
    pub time: String,
    pub appointment_type: String,
    pub vet_name: String,
    pub clinic_name: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub appointment_notes: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub pet_name: String,
    pub pet_kind: String,
    pub pet_image_url: Option<String>,
}

/// Which slice of the queue a dashboard is asking for.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentScope {
    Upcoming,
    Completed,
    Missed,
    All,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingRequest {
    pub pet_id: String,

    #[schema(example = "Annual Check-up")]
    pub appointment_type: String,

    #[schema(example = "Dr. Sarah Johnson")]
    pub vet_name: String,

    #[schema(example = "PetCare Central")]
    pub clinic_name: String,

    pub date: Date,

    #[schema(example = "9:30 AM")]
    pub time: String,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    pub status: AppointmentStatus,

    #[schema(example = "Healthy, next check-up in 12 months")]
    pub notes: Option<String>,
}
